use chrono::{NaiveDate, NaiveDateTime};

use super::recurrence::{expand, Occurrence};
use super::EventStore;
use crate::models::event::Event;

impl EventStore {
    /// Events whose start falls on `date`, in start order.
    ///
    /// Served from the date index; cost is proportional to the events on
    /// that day, not to the size of the store.
    pub fn events_on_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.index
            .ids_on(date)
            .filter_map(|id| self.events.get(&id))
            .collect()
    }

    /// Events starting on any date in `first..=last`, in start order.
    pub fn events_between(&self, first: NaiveDate, last: NaiveDate) -> Vec<&Event> {
        self.index
            .ids_between(first, last)
            .filter_map(|id| self.events.get(&id))
            .collect()
    }

    /// Search events by title, description, location, or category.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let contains = |value: &str| value.to_lowercase().contains(&query);
        self.all()
            .into_iter()
            .filter(|event| {
                contains(&event.title)
                    || event.description.as_deref().is_some_and(contains)
                    || event.location.as_deref().is_some_and(contains)
                    || contains(&event.category)
            })
            .collect()
    }

    /// Every occurrence starting within `range_start..=range_end`, sorted by
    /// start then event id.
    ///
    /// One-off events come from the date index; recurring series are
    /// expanded individually.
    pub fn expand_between(
        &self,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> Vec<Occurrence<'_>> {
        if range_end < range_start {
            return Vec::new();
        }

        let mut occurrences: Vec<Occurrence<'_>> = self
            .index
            .ids_between(range_start.date(), range_end.date())
            .filter(|id| !self.recurring.contains(id))
            .filter_map(|id| self.events.get(&id))
            .filter(|event| event.start >= range_start && event.start <= range_end)
            .map(|event| Occurrence {
                event,
                start: event.start,
                end: event.end,
            })
            .collect();

        for id in &self.recurring {
            if let Some(event) = self.events.get(id) {
                occurrences.extend(expand(event, range_start, range_end));
            }
        }

        occurrences.sort_by_key(|occurrence| (occurrence.start, occurrence.event.id));
        log::debug!(
            "Expanded {} occurrences between {} and {}",
            occurrences.len(),
            range_start,
            range_end
        );
        occurrences
    }

    /// The next occurrence of each event strictly after `now`, soonest
    /// first, at most `limit` entries.
    pub fn upcoming(&self, now: NaiveDateTime, limit: usize) -> Vec<Occurrence<'_>> {
        let mut upcoming: Vec<Occurrence<'_>> = self
            .events
            .values()
            .filter_map(|event| {
                if event.is_recurring() {
                    expand(event, now, NaiveDateTime::MAX).find(|o| o.start > now)
                } else {
                    (event.start > now).then_some(Occurrence {
                        event,
                        start: event.start,
                        end: event.end,
                    })
                }
            })
            .collect();

        upcoming.sort_by_key(|occurrence| (occurrence.start, occurrence.event.id));
        upcoming.truncate(limit);
        upcoming
    }
}
