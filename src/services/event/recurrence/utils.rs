use chrono::{Duration, NaiveDateTime};

use crate::models::recurrence::Frequency;
use crate::utils::date::{months_between, shift_months};

/// Start of the `index`-th candidate of a series anchored at `anchor`.
///
/// Month-based frequencies are always computed from the anchor, so a series
/// starting on the 31st clamps in short months without drifting.
pub(super) fn candidate_start(
    anchor: NaiveDateTime,
    frequency: Frequency,
    interval: u32,
    index: u64,
) -> Option<NaiveDateTime> {
    let steps = i64::try_from(index).ok()?.checked_mul(i64::from(interval))?;

    match frequency {
        Frequency::Daily => anchor.checked_add_signed(Duration::try_days(steps)?),
        Frequency::Weekly => anchor.checked_add_signed(Duration::try_weeks(steps)?),
        Frequency::Monthly => shift_months(anchor, i32::try_from(steps).ok()?),
        Frequency::Yearly => shift_months(anchor, i32::try_from(steps.checked_mul(12)?).ok()?),
    }
}

/// Index of a candidate at or before `range_start`, so expansion can begin
/// near the range instead of walking forward from the anchor.
pub(super) fn seek_index(
    anchor: NaiveDateTime,
    frequency: Frequency,
    interval: u32,
    range_start: NaiveDateTime,
) -> u64 {
    if range_start <= anchor {
        return 0;
    }

    let interval = i64::from(interval);
    let index = match frequency {
        Frequency::Daily => (range_start - anchor).num_days() / interval,
        Frequency::Weekly => (range_start - anchor).num_days() / (7 * interval),
        Frequency::Monthly => months_between(anchor.date(), range_start.date()) / interval - 1,
        Frequency::Yearly => months_between(anchor.date(), range_start.date()) / (12 * interval) - 1,
    };

    index.max(0) as u64
}
