//! Source of "now" for the few operations that need it.
//!
//! Grid generation, expansion and filtering never read the wall clock; the
//! view state and the upcoming list take a `Clock` instead.

use chrono::{Local, NaiveDate, NaiveDateTime};

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Midnight at the start of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(crate::utils::date::start_of_day(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
