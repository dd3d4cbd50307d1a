use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, EventField, Result};
use crate::models::category::CategoryRegistry;
use crate::models::event::{Event, EventStatus, Priority};
use crate::models::recurrence::{EndCondition, Recurrence};

/// Pages of the create wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Details,
    AttendeesLocation,
    Schedule,
}

impl WizardStep {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Details => Some(Self::AttendeesLocation),
            Self::AttendeesLocation => Some(Self::Schedule),
            Self::Schedule => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Details => None,
            Self::AttendeesLocation => Some(Self::Details),
            Self::Schedule => Some(Self::AttendeesLocation),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Details => "Event Details",
            Self::AttendeesLocation => "Attendees & Location",
            Self::Schedule => "Schedule",
        }
    }
}

/// Editable form state for an event.
///
/// Text fields are plain strings as typed; empty optional fields become
/// `None` when the draft is turned back into an `Event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub attendees: Vec<String>,
    pub location: String,
    pub status: EventStatus,
    pub priority: Priority,
    pub recurrence: Recurrence,
    pub version: u64,
}

impl EventDraft {
    /// Blank draft starting at `start`.
    pub fn new_at(start: NaiveDateTime, duration: Duration, default_category: impl Into<String>) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            category: default_category.into(),
            start,
            end: start + duration,
            attendees: Vec::new(),
            location: String::new(),
            status: EventStatus::Scheduled,
            priority: Priority::Medium,
            recurrence: Recurrence::NonRecurring,
            version: 0,
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            category: event.category.clone(),
            start: event.start,
            end: event.end,
            attendees: event.attendees.clone(),
            location: event.location.clone().unwrap_or_default(),
            status: event.status,
            priority: event.priority,
            recurrence: event.recurrence,
            version: event.version,
        }
    }

    /// Append an attendee. Blank and duplicate names are ignored.
    pub fn add_attendee(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.attendees.iter().any(|a| a == name) {
            return false;
        }
        self.attendees.push(name.to_string());
        true
    }

    pub fn remove_attendee(&mut self, name: &str) -> bool {
        let before = self.attendees.len();
        self.attendees.retain(|a| a != name);
        self.attendees.len() != before
    }

    /// Field-level validation, reporting the first failing field.
    pub fn validate(&self, registry: &CategoryRegistry) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CalendarError::validation(EventField::Title, "Title is required"));
        }

        if self.end <= self.start {
            return Err(CalendarError::validation(
                EventField::EndTime,
                "End time must be after start time",
            ));
        }

        if self.category.trim().is_empty() {
            return Err(CalendarError::validation(EventField::Category, "Category is required"));
        }
        if !registry.contains(&self.category) {
            return Err(CalendarError::validation(
                EventField::Category,
                format!("Unknown category '{}'", self.category),
            ));
        }

        if let Recurrence::Recurring { interval, end, .. } = self.recurrence {
            if interval < 1 {
                return Err(CalendarError::validation(
                    EventField::Interval,
                    "Interval must be at least 1",
                ));
            }
            match end {
                EndCondition::After(0) => {
                    return Err(CalendarError::validation(
                        EventField::EndCondition,
                        "Occurrence count must be at least 1",
                    ));
                }
                EndCondition::Until(until) if until < self.start.date() => {
                    return Err(CalendarError::validation(
                        EventField::EndCondition,
                        "End date cannot be before the start date",
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub fn to_event(&self) -> Event {
        Event {
            id: self.id,
            title: self.title.trim().to_string(),
            description: non_empty(&self.description),
            category: self.category.clone(),
            start: self.start,
            end: self.end,
            attendees: self.attendees.clone(),
            location: non_empty(&self.location),
            status: self.status,
            priority: self.priority,
            recurrence: self.recurrence,
            version: self.version,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::default_registry;
    use crate::models::recurrence::Frequency;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn draft() -> EventDraft {
        let mut draft = EventDraft::new_at(start(), Duration::minutes(60), "crop-inspection");
        draft.title = "Soil Sampling".to_string();
        draft
    }

    #[test]
    fn test_new_at_defaults() {
        let draft = EventDraft::new_at(start(), Duration::minutes(90), "worker-checkup");
        assert_eq!(draft.end - draft.start, Duration::minutes(90));
        assert_eq!(draft.status, EventStatus::Scheduled);
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.recurrence, Recurrence::NonRecurring);
    }

    #[test]
    fn test_steps_walk_forward_and_back() {
        assert_eq!(WizardStep::Details.next(), Some(WizardStep::AttendeesLocation));
        assert_eq!(WizardStep::Schedule.next(), None);
        assert_eq!(WizardStep::Schedule.previous(), Some(WizardStep::AttendeesLocation));
        assert_eq!(WizardStep::Details.previous(), None);
    }

    #[test]
    fn test_attendees() {
        let mut draft = draft();
        assert!(draft.add_attendee(" Safety Officer "));
        assert!(!draft.add_attendee("Safety Officer"));
        assert!(!draft.add_attendee("  "));
        assert_eq!(draft.attendees, vec!["Safety Officer"]);

        assert!(draft.remove_attendee("Safety Officer"));
        assert!(!draft.remove_attendee("Safety Officer"));
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate(&default_registry()).is_ok());
    }

    #[test_case(|d: &mut EventDraft| d.title = "  ".into(), EventField::Title ; "blank title")]
    #[test_case(|d: &mut EventDraft| d.end = d.start, EventField::EndTime ; "zero length")]
    #[test_case(|d: &mut EventDraft| d.category = "orchard".into(), EventField::Category ; "unknown category")]
    #[test_case(|d: &mut EventDraft| d.category = String::new(), EventField::Category ; "missing category")]
    #[test_case(
        |d: &mut EventDraft| d.recurrence = Recurrence::recurring(Frequency::Daily, 0, EndCondition::Never),
        EventField::Interval ; "zero interval"
    )]
    #[test_case(
        |d: &mut EventDraft| d.recurrence = Recurrence::recurring(Frequency::Daily, 1, EndCondition::After(0)),
        EventField::EndCondition ; "zero count"
    )]
    #[test_case(
        |d: &mut EventDraft| d.recurrence = Recurrence::recurring(
            Frequency::Weekly,
            1,
            EndCondition::Until(NaiveDate::from_ymd_opt(2024, 12, 17).unwrap()),
        ),
        EventField::EndCondition ; "until before start"
    )]
    fn test_validation_field(mutate: fn(&mut EventDraft), field: EventField) {
        let mut draft = draft();
        mutate(&mut draft);
        let err = draft.validate(&default_registry()).unwrap_err();
        assert_eq!(err.field(), Some(field));
    }

    #[test]
    fn test_to_event_trims_optional_text() {
        let mut draft = draft();
        draft.location = "   ".to_string();
        draft.description = " Sample the north plots ".to_string();

        let event = draft.to_event();
        assert_eq!(event.location, None);
        assert_eq!(event.description.as_deref(), Some("Sample the north plots"));
        assert_eq!(EventDraft::from_event(&event).location, "");
    }
}
