// Property-based tests for recurrence expansion

use agri_calendar::models::event::Event;
use agri_calendar::models::recurrence::{EndCondition, Frequency, Recurrence};
use agri_calendar::services::event::recurrence::expand_days;
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

fn any_frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
        Just(Frequency::Yearly),
    ]
}

fn event(start: NaiveDate, hours: i64, frequency: Frequency, interval: u32, end: EndCondition) -> Event {
    let start = start.and_hms_opt(8, 30, 0).unwrap();
    Event::builder()
        .title("Field task")
        .category("crop-inspection")
        .start(start)
        .end(start + Duration::hours(hours))
        .recurrence(Recurrence::recurring(frequency, interval, end))
        .build()
        .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

proptest! {
    /// Every occurrence lies in the range, in order, with the event's duration
    #[test]
    fn prop_occurrences_within_range(
        day in 1..=31u32,
        hours in 1..6i64,
        frequency in any_frequency(),
        interval in 1..4u32,
        offset in 0..2000i64,
        span in 0..400i64,
    ) {
        let anchor = NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
        let event = event(anchor, hours, frequency, interval, EndCondition::Never);
        let first = anchor + Duration::days(offset);
        let last = first + Duration::days(span);

        let occurrences: Vec<_> = expand_days(&event, first, last).collect();
        for occurrence in &occurrences {
            prop_assert!(occurrence.date() >= first && occurrence.date() <= last);
            prop_assert_eq!(occurrence.end - occurrence.start, Duration::hours(hours));
        }
        for pair in occurrences.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
        }
    }

    /// Seeking into the middle of a series finds the same occurrences as
    /// expanding from the anchor
    #[test]
    fn prop_seek_matches_full_walk(
        day in 1..=31u32,
        frequency in any_frequency(),
        interval in 1..4u32,
        offset in 0..1500i64,
    ) {
        let anchor = date(2021, 3, day);
        let event = event(anchor, 1, frequency, interval, EndCondition::Never);
        let first = anchor + Duration::days(offset);
        let last = first + Duration::days(60);

        let direct: Vec<_> = expand_days(&event, first, last).map(|o| o.start).collect();
        let walked: Vec<_> = expand_days(&event, anchor, last)
            .map(|o| o.start)
            .filter(|start| start.date() >= first)
            .collect();
        prop_assert_eq!(direct, walked);
    }

    /// After(n) never yields more than n occurrences
    #[test]
    fn prop_after_count_bounds(
        frequency in any_frequency(),
        interval in 1..4u32,
        count in 1..20u32,
    ) {
        let event = event(date(2024, 1, 31), 1, frequency, interval, EndCondition::After(count));
        let total = expand_days(&event, date(2024, 1, 1), date(2150, 1, 1)).count();
        prop_assert_eq!(total, count as usize);
    }

    /// Until(d) never yields an occurrence after d
    #[test]
    fn prop_until_is_respected(
        frequency in any_frequency(),
        interval in 1..4u32,
        until_offset in 0..1000i64,
    ) {
        let anchor = date(2024, 2, 29);
        let until = anchor + Duration::days(until_offset);
        let event = event(anchor, 1, frequency, interval, EndCondition::Until(until));

        prop_assert!(expand_days(&event, anchor, date(2030, 1, 1)).all(|o| o.date() <= until));
    }

    /// Monthly series clamp to the last day instead of skipping short months
    #[test]
    fn prop_monthly_never_skips(day in 28..=31u32, interval in 1..3u32) {
        let event = event(date(2024, 1, day), 1, Frequency::Monthly, interval, EndCondition::Never);
        let occurrences: Vec<_> = expand_days(&event, date(2024, 1, 1), date(2025, 12, 31)).collect();

        prop_assert_eq!(occurrences.len(), (24 / interval as usize) + usize::from(24 % interval != 0));
        for occurrence in occurrences {
            prop_assert!(occurrence.date().day() <= day);
        }
    }
}
