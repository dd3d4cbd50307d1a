//! Recurrence expansion.
//!
//! Turns an event (recurring or not) into the concrete occurrences whose
//! start falls inside a query range. Occurrences are derived on every query
//! and never stored.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::event::Event;
use crate::models::recurrence::{EndCondition, Recurrence};
use crate::utils::date::{end_of_day, start_of_day};

mod utils;

use utils::{candidate_start, seek_index};

/// One concrete instance of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence<'a> {
    pub event: &'a Event,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl<'a> Occurrence<'a> {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn event_id(&self) -> Option<i64> {
        self.event.id
    }
}

/// Lazy, finite sequence of occurrences. Clone it to restart.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    event: &'a Event,
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
    next_index: u64,
    finished: bool,
}

/// Expand `event` into its occurrences starting within
/// `range_start..=range_end`.
///
/// Recurring series step from the event's own start; each occurrence keeps
/// the event's duration. A non-recurring event yields itself when its
/// interval intersects the range.
pub fn expand(event: &Event, range_start: NaiveDateTime, range_end: NaiveDateTime) -> Occurrences<'_> {
    let next_index = match event.recurrence {
        Recurrence::Recurring {
            frequency,
            interval,
            ..
        } => seek_index(event.start, frequency, interval.max(1), range_start),
        Recurrence::NonRecurring => 0,
    };

    Occurrences {
        event,
        range_start,
        range_end,
        next_index,
        finished: range_end < range_start,
    }
}

/// Expand over whole days, `first` and `last` inclusive.
pub fn expand_days(event: &Event, first: NaiveDate, last: NaiveDate) -> Occurrences<'_> {
    expand(event, start_of_day(first), end_of_day(last))
}

impl<'a> Occurrences<'a> {
    /// `None` when the shifted end is past the last representable instant.
    fn occurrence_at(&self, start: NaiveDateTime) -> Option<Occurrence<'a>> {
        let end = start.checked_add_signed(self.event.duration())?;
        Some(Occurrence {
            event: self.event,
            start,
            end,
        })
    }

    fn finish(&mut self) -> Option<Occurrence<'a>> {
        self.finished = true;
        None
    }
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = Occurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (frequency, interval, end) = match self.event.recurrence {
            Recurrence::NonRecurring => {
                if self.finished {
                    return None;
                }
                self.finished = true;
                let event = self.event;
                let intersects = event.start <= self.range_end && event.end > self.range_start;
                return intersects.then_some(Occurrence {
                    event,
                    start: event.start,
                    end: event.end,
                });
            }
            Recurrence::Recurring {
                frequency,
                interval,
                end,
            } => (frequency, interval.max(1), end),
        };

        while !self.finished {
            if let EndCondition::After(count) = end {
                if self.next_index >= u64::from(count) {
                    return self.finish();
                }
            }

            let Some(start) = candidate_start(self.event.start, frequency, interval, self.next_index)
            else {
                return self.finish();
            };
            self.next_index += 1;

            if let EndCondition::Until(until) = end {
                if start.date() > until {
                    return self.finish();
                }
            }

            if start > self.range_end {
                return self.finish();
            }

            if start >= self.range_start {
                return match self.occurrence_at(start) {
                    Some(occurrence) => Some(occurrence),
                    None => self.finish(),
                };
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recurrence::Frequency;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(y: i32, m: u32, day: u32, hour: u32) -> NaiveDateTime {
        d(y, m, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn recurring(start: NaiveDateTime, frequency: Frequency, interval: u32, end: EndCondition) -> Event {
        Event::builder()
            .title("Worker Health Check-up")
            .category("worker-checkup")
            .start(start)
            .end(start + Duration::hours(2))
            .recurrence(Recurrence::recurring(frequency, interval, end))
            .build()
            .unwrap()
    }

    fn dates(occurrences: Occurrences<'_>) -> Vec<NaiveDate> {
        occurrences.map(|o| o.date()).collect()
    }

    #[test]
    fn test_weekly_across_year_end() {
        let event = recurring(at(2024, 12, 16, 14), Frequency::Weekly, 1, EndCondition::Never);
        let got = dates(expand(&event, at(2024, 12, 1, 0), at(2025, 1, 10, 0)));

        assert_eq!(got, vec![d(2024, 12, 16), d(2024, 12, 23), d(2024, 12, 30), d(2025, 1, 6)]);
    }

    #[test]
    fn test_occurrence_keeps_duration() {
        let event = recurring(at(2024, 12, 16, 14), Frequency::Daily, 1, EndCondition::Never);
        let third = expand(&event, at(2024, 12, 1, 0), at(2024, 12, 31, 0)).nth(2).unwrap();

        assert_eq!(third.start, at(2024, 12, 18, 14));
        assert_eq!(third.end, at(2024, 12, 18, 16));
        assert!(std::ptr::eq(third.event, &event));
    }

    #[test]
    fn test_monthly_clamps_february() {
        let event = recurring(at(2024, 1, 31, 9), Frequency::Monthly, 1, EndCondition::Never);
        let got = dates(expand_days(&event, d(2024, 2, 1), d(2024, 3, 31)));
        assert_eq!(got, vec![d(2024, 2, 29), d(2024, 3, 31)]);

        let event = recurring(at(2023, 1, 31, 9), Frequency::Monthly, 1, EndCondition::Never);
        let got = dates(expand_days(&event, d(2023, 2, 1), d(2023, 2, 28)));
        assert_eq!(got, vec![d(2023, 2, 28)]);
    }

    #[test]
    fn test_after_count_includes_first() {
        let event = recurring(at(2024, 12, 1, 8), Frequency::Daily, 2, EndCondition::After(3));
        let got = dates(expand_days(&event, d(2024, 11, 1), d(2025, 12, 31)));
        assert_eq!(got, vec![d(2024, 12, 1), d(2024, 12, 3), d(2024, 12, 5)]);
    }

    #[test]
    fn test_after_count_counts_skipped_occurrences() {
        let event = recurring(at(2024, 12, 1, 8), Frequency::Daily, 1, EndCondition::After(5));
        let got = dates(expand_days(&event, d(2024, 12, 4), d(2024, 12, 31)));
        assert_eq!(got, vec![d(2024, 12, 4), d(2024, 12, 5)]);
    }

    #[test]
    fn test_until_is_inclusive_of_date() {
        let event = recurring(
            at(2024, 12, 2, 8),
            Frequency::Weekly,
            1,
            EndCondition::Until(d(2024, 12, 16)),
        );
        let got = dates(expand_days(&event, d(2024, 12, 1), d(2025, 1, 31)));
        assert_eq!(got, vec![d(2024, 12, 2), d(2024, 12, 9), d(2024, 12, 16)]);
    }

    #[test]
    fn test_yearly_feb_29() {
        let event = recurring(at(2024, 2, 29, 12), Frequency::Yearly, 1, EndCondition::After(3));
        let got = dates(expand_days(&event, d(2024, 1, 1), d(2030, 1, 1)));
        assert_eq!(got, vec![d(2024, 2, 29), d(2025, 2, 28), d(2026, 2, 28)]);
    }

    #[test]
    fn test_range_far_after_anchor() {
        let event = recurring(at(2000, 1, 3, 7), Frequency::Daily, 1, EndCondition::Never);
        let got = dates(expand_days(&event, d(2024, 12, 30), d(2025, 1, 1)));
        assert_eq!(got, vec![d(2024, 12, 30), d(2024, 12, 31), d(2025, 1, 1)]);
    }

    #[test]
    fn test_open_ended_duration_stops_instead_of_overflowing() {
        let start = at(2024, 12, 15, 9);
        let event = Event::builder()
            .title("Long-running survey")
            .category("crop-inspection")
            .start(start)
            .end(NaiveDateTime::MAX)
            .recurrence(Recurrence::recurring(Frequency::Daily, 1, EndCondition::Never))
            .build()
            .unwrap();

        let got: Vec<_> = expand_days(&event, d(2024, 12, 15), d(2024, 12, 18)).collect();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].start, start);
        assert_eq!(got[0].end, NaiveDateTime::MAX);
    }

    #[test]
    fn test_non_recurring_intersection() {
        let event = Event::new(
            "Equipment Maintenance - Irrigation",
            "equipment-maintenance",
            at(2024, 12, 18, 8),
            at(2024, 12, 18, 12),
        )
        .unwrap();

        assert_eq!(expand_days(&event, d(2024, 12, 18), d(2024, 12, 18)).count(), 1);
        assert_eq!(expand(&event, at(2024, 12, 18, 10), at(2024, 12, 18, 11)).count(), 1);
        assert_eq!(expand(&event, at(2024, 12, 18, 12), at(2024, 12, 19, 0)).count(), 0);
        assert_eq!(expand_days(&event, d(2024, 12, 19), d(2024, 12, 31)).count(), 0);
    }

    #[test]
    fn test_expansion_is_restartable() {
        let event = recurring(at(2024, 12, 16, 14), Frequency::Weekly, 1, EndCondition::Never);
        let occurrences = expand_days(&event, d(2024, 12, 1), d(2024, 12, 31));

        let first_pass: Vec<_> = occurrences.clone().collect();
        let second_pass: Vec<_> = occurrences.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 3);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let event = recurring(at(2024, 12, 16, 14), Frequency::Daily, 1, EndCondition::Never);
        assert_eq!(expand_days(&event, d(2024, 12, 31), d(2024, 12, 1)).count(), 0);
    }
}
