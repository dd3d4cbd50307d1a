//! View state machine.
//!
//! A single cursor over the calendar: the active view, the date the grid is
//! built around, and the selected date. The selected date is always one the
//! current grid renders.

use chrono::{Duration, NaiveDate, Weekday};

use crate::error::{CalendarError, Result};
use crate::models::settings::Settings;
use crate::models::ui::{GridCell, ViewType};
use crate::services::clock::Clock;
use crate::services::grid::{generate_grid, grid_span};
use crate::utils::date::{shift_month_preserving_day, week_start};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    view: ViewType,
    reference_date: NaiveDate,
    selected_date: NaiveDate,
    week_start: Weekday,
}

impl ViewState {
    pub fn new(view: ViewType, today: NaiveDate, week_start: Weekday) -> Self {
        Self {
            view,
            reference_date: today,
            selected_date: today,
            week_start,
        }
    }

    /// Start in the configured default view on `today`.
    pub fn from_settings(settings: &Settings, today: NaiveDate) -> Self {
        Self::new(settings.default_view, today, settings.week_start())
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Cells of the current grid.
    pub fn grid(&self) -> Vec<GridCell> {
        generate_grid(self.view, self.reference_date, self.week_start)
    }

    /// First and last date rendered by the current grid.
    pub fn span(&self) -> (NaiveDate, NaiveDate) {
        grid_span(self.view, self.reference_date, self.week_start)
    }

    /// Whether the current grid renders `date`, padding cells included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let (first, last) = self.span();
        first <= date && date <= last
    }

    /// Change the view, keeping the selection when the new grid still shows it.
    pub fn switch_view(&mut self, view: ViewType) {
        if self.view == view {
            return;
        }
        log::debug!("Switching view {} -> {}", self.view, view);
        self.view = view;
        self.reconcile_selection();
    }

    /// Move the reference date by `delta` months, weeks or days depending on
    /// the active view.
    pub fn navigate(&mut self, delta: i32) {
        let target = match self.view {
            ViewType::Month => shift_month_preserving_day(self.reference_date, delta),
            ViewType::Week => Duration::try_weeks(i64::from(delta))
                .and_then(|step| self.reference_date.checked_add_signed(step)),
            ViewType::Day => self
                .reference_date
                .checked_add_signed(Duration::days(i64::from(delta))),
        };

        match target {
            Some(date) => {
                self.reference_date = date;
                self.reconcile_selection();
            }
            None => log::warn!(
                "Cannot navigate {} {}(s) from {}",
                delta,
                self.view,
                self.reference_date
            ),
        }
    }

    /// Select a date rendered by the current grid.
    ///
    /// Dates outside the grid fail with `OutOfRange` and leave the state
    /// untouched.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        if !self.contains(date) {
            return Err(CalendarError::OutOfRange {
                date,
                view: self.view,
            });
        }
        self.selected_date = date;
        Ok(())
    }

    /// Jump the grid and the selection to the clock's current date.
    pub fn go_to_today(&mut self, clock: &dyn Clock) {
        let today = clock.today();
        self.reference_date = today;
        self.selected_date = today;
    }

    pub fn is_today(&self, date: NaiveDate, clock: &dyn Clock) -> bool {
        date == clock.today()
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        date == self.selected_date
    }

    /// Header text for the current period.
    pub fn period_label(&self) -> String {
        match self.view {
            ViewType::Month => self.reference_date.format("%B %Y").to_string(),
            ViewType::Week => {
                let start = week_start(self.reference_date, self.week_start);
                format!("Week of {}", start.format("%b %-d, %Y"))
            }
            ViewType::Day => self.reference_date.format("%A, %B %-d, %Y").to_string(),
        }
    }

    fn reconcile_selection(&mut self) {
        if !self.contains(self.selected_date) {
            self.selected_date = self.reference_date;
        }
    }
}
