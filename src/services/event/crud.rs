use super::EventStore;
use crate::error::{CalendarError, Result};
use crate::models::event::Event;

impl EventStore {
    /// Insert a new event, assigning the next id when none is set.
    pub fn add(&mut self, mut event: Event) -> Result<Event> {
        event.validate()?;

        let id = match event.id {
            Some(id) if self.events.contains_key(&id) => {
                return Err(CalendarError::DuplicateId(id));
            }
            Some(id) => id,
            None if self.events.contains_key(&self.next_id) => {
                return Err(CalendarError::InvalidEvent(
                    "No event ids left to assign".to_string(),
                ));
            }
            None => self.next_id,
        };

        // Saturates at i64::MAX; the guard above then rejects further inserts.
        self.next_id = self.next_id.max(id.saturating_add(1));
        event.id = Some(id);
        event.version = 1;

        self.index_event(id, &event);
        self.events.insert(id, event.clone());
        log::debug!("Added event {} on {}", id, event.date());

        Ok(event)
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: i64) -> Result<&Event> {
        self.events.get(&id).ok_or(CalendarError::NotFound(id))
    }

    /// Replace an existing event record as a whole.
    ///
    /// The caller's `version` must match the stored one; the stored version
    /// is incremented on success.
    pub fn update(&mut self, mut event: Event) -> Result<Event> {
        let id = event
            .id
            .ok_or_else(|| CalendarError::InvalidEvent("Event ID is required for update".to_string()))?;
        event.validate()?;

        let previous = self.events.get(&id).ok_or(CalendarError::NotFound(id))?;
        if previous.version != event.version {
            return Err(CalendarError::VersionConflict {
                id,
                expected: event.version,
                actual: previous.version,
            });
        }

        event.version = previous.version + 1;
        let previous = previous.clone();

        self.unindex_event(id, &previous);
        self.index_event(id, &event);
        self.events.insert(id, event.clone());
        log::debug!(
            "Updated event {} ({} -> {}), version {}",
            id,
            previous.date(),
            event.date(),
            event.version
        );

        Ok(event)
    }

    /// Delete an event by ID, returning the removed record.
    pub fn remove(&mut self, id: i64) -> Result<Event> {
        let event = self.events.remove(&id).ok_or(CalendarError::NotFound(id))?;
        self.unindex_event(id, &event);
        log::debug!("Removed event {}", id);
        Ok(event)
    }

    /// Every event, ordered by start time then id.
    pub fn all(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.values().collect();
        events.sort_by_key(|event| (event.start, event.id));
        events
    }
}
