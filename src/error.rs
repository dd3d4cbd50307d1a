//! Error types shared by the scheduling engine.
//!
//! Every expected domain condition (validation, unknown ids, selecting a
//! date outside the grid) comes back as a `CalendarError` value.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::models::ui::ViewType;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Event fields that can fail validation in the edit workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Title,
    StartTime,
    EndTime,
    Category,
    Interval,
    EndCondition,
}

impl EventField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::StartTime => "start time",
            Self::EndTime => "end time",
            Self::Category => "category",
            Self::Interval => "interval",
            Self::EndCondition => "end condition",
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Event with id {0} not found")]
    NotFound(i64),

    #[error("{date} is not rendered by the current {view} grid")]
    OutOfRange { date: NaiveDate, view: ViewType },

    #[error("Invalid {field}: {message}")]
    Validation { field: EventField, message: String },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Event with id {0} already exists")]
    DuplicateId(i64),

    #[error("Event {id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict { id: i64, expected: u64, actual: u64 },

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

impl CalendarError {
    pub(crate) fn validation(field: EventField, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// The failing field for workflow validation errors.
    pub fn field(&self) -> Option<EventField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
