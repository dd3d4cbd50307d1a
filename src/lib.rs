// Agricultural operations calendar
// Scheduling engine: grids, event store, recurrence, filters, view state
// and the event edit workflow

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{CalendarError, EventField, Result};
