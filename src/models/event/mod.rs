// Event module
// Scheduled occurrence on the operations calendar

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CalendarError, Result};
use crate::models::recurrence::Recurrence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar event.
///
/// Times are local wall-clock values; the calendar date of `start` decides
/// which day the event is listed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Assigned by the event store on insert.
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Key into the category registry.
    pub category: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Display order only.
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Optimistic concurrency stamp, bumped by the store on every update.
    #[serde(default)]
    pub version: u64,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `category` - Category key
    /// * `start` - Event start time
    /// * `end` - Event end time, strictly after `start`
    ///
    /// # Examples
    /// ```
    /// use agri_calendar::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(2);
    /// let event = Event::new("Crop Health Assessment", "health-assessment", start, end).unwrap();
    /// assert_eq!(event.date(), start.date());
    /// ```
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        let event = Self {
            id: None,
            title: title.into(),
            description: None,
            category: category.into(),
            start,
            end,
            attendees: Vec::new(),
            location: None,
            status: EventStatus::default(),
            priority: Priority::default(),
            recurrence: Recurrence::NonRecurring,
            version: 0,
        };

        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Check the record-level invariants the store relies on.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CalendarError::InvalidEvent(
                "Event title cannot be empty".to_string(),
            ));
        }

        if self.end <= self.start {
            return Err(CalendarError::InvalidEvent(
                "Event end time must be after start time".to_string(),
            ));
        }

        if let Recurrence::Recurring { interval: 0, .. } = self.recurrence {
            return Err(CalendarError::InvalidEvent(
                "Recurrence interval must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_recurring()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Calendar date the event is indexed under.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn has_attendee(&self, name: &str) -> bool {
        self.attendees.iter().any(|a| a == name)
    }
}

/// Builder for creating events with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    attendees: Vec<String>,
    location: Option<String>,
    status: EventStatus,
    priority: Priority,
    recurrence: Recurrence,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn attendee(mut self, attendee: impl Into<String>) -> Self {
        self.attendees.push(attendee.into());
        self
    }

    pub fn attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attendees.extend(attendees.into_iter().map(Into::into));
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn build(self) -> Result<Event> {
        let missing = |what: &str| CalendarError::InvalidEvent(format!("Event {} is required", what));

        let event = Event {
            id: self.id,
            title: self.title.ok_or_else(|| missing("title"))?,
            description: self.description,
            category: self.category.ok_or_else(|| missing("category"))?,
            start: self.start.ok_or_else(|| missing("start time"))?,
            end: self.end.ok_or_else(|| missing("end time"))?,
            attendees: self.attendees,
            location: self.location,
            status: self.status,
            priority: self.priority,
            recurrence: self.recurrence,
            version: 0,
        };

        event.validate()?;
        Ok(event)
    }
}
