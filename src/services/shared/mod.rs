//! Thread-safe handle to an event store.
//!
//! Writers are serialised by the lock; lost updates between editors that
//! read the same record are caught by the per-event version stamp.

use std::sync::{Arc, PoisonError, RwLock};

use crate::services::event::EventStore;

#[derive(Debug, Clone, Default)]
pub struct SharedEventStore {
    inner: Arc<RwLock<EventStore>>,
}

impl SharedEventStore {
    pub fn new(store: EventStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` with shared read access.
    pub fn read<R>(&self, f: impl FnOnce(&EventStore) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive write access.
    pub fn write<R>(&self, f: impl FnOnce(&mut EventStore) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Consistent copy of the current contents.
    pub fn snapshot(&self) -> EventStore {
        self.read(EventStore::clone)
    }
}

impl From<EventStore> for SharedEventStore {
    fn from(store: EventStore) -> Self {
        Self::new(store)
    }
}
