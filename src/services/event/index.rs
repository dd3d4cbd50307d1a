use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

use crate::models::event::Event;

/// Secondary index: calendar date of `start` -> ids ordered by `(start, id)`.
#[derive(Debug, Clone, Default)]
pub(crate) struct DateIndex {
    buckets: BTreeMap<NaiveDate, Vec<(NaiveDateTime, i64)>>,
}

impl DateIndex {
    pub(crate) fn insert(&mut self, id: i64, event: &Event) {
        let entry = (event.start, id);
        let bucket = self.buckets.entry(event.date()).or_default();
        if let Err(position) = bucket.binary_search(&entry) {
            bucket.insert(position, entry);
        }
    }

    pub(crate) fn remove(&mut self, id: i64, event: &Event) {
        let date = event.date();
        let Some(bucket) = self.buckets.get_mut(&date) else {
            return;
        };

        if let Ok(position) = bucket.binary_search(&(event.start, id)) {
            bucket.remove(position);
        }

        if bucket.is_empty() {
            self.buckets.remove(&date);
        }
    }

    pub(crate) fn ids_on(&self, date: NaiveDate) -> impl Iterator<Item = i64> + '_ {
        self.buckets
            .get(&date)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|(_, id)| *id))
    }

    /// Ids of events starting on any date in `first..=last`, in start order.
    pub(crate) fn ids_between(&self, first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = i64> + '_ {
        let range = if first <= last {
            Some(self.buckets.range(first..=last))
        } else {
            None
        };

        range
            .into_iter()
            .flatten()
            .flat_map(|(_, bucket)| bucket.iter().map(|(_, id)| *id))
    }

    #[cfg(test)]
    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
