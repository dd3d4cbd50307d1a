//! In-memory event store.
//!
//! Owns every event record and keeps a start-date index beside it. Writes
//! live in `crud`, read-side lookups in `queries`, and occurrence expansion
//! in `recurrence`.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::event::Event;

pub mod crud;
mod index;
pub mod queries;
pub mod recurrence;

use index::DateIndex;

/// In-memory owner of all event records.
///
/// Every mutation keeps the date index in step with the records, so
/// `events_on_date` never scans the full event set.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: BTreeMap<i64, Event>,
    index: DateIndex,
    recurring: BTreeSet<i64>,
    next_id: i64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
            index: DateIndex::default(),
            recurring: BTreeSet::new(),
            next_id: 1,
        }
    }

    /// Build a store from existing records (ids are kept when present).
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> crate::Result<Self> {
        let mut store = Self::new();
        for event in events {
            store.add(event)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn index_event(&mut self, id: i64, event: &Event) {
        self.index.insert(id, event);
        if event.is_recurring() {
            self.recurring.insert(id);
        }
    }

    fn unindex_event(&mut self, id: i64, event: &Event) {
        self.index.remove(id, event);
        self.recurring.remove(&id);
    }
}
