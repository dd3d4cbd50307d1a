//! Calendar grid generation.
//!
//! Turns a view type and a reference date into the ordered cells a
//! presentation layer renders. Pure: the output depends only on the inputs.

use chrono::{Duration, NaiveDate, Weekday};

use crate::models::ui::{GridCell, ViewType};
use crate::utils::date::{days_in_month, first_of_month, week_start, weekday_offset};

/// Month grids never collapse below five weeks.
const MIN_MONTH_CELLS: usize = 35;

/// Build the grid for `view` around `reference`.
pub fn generate_grid(view: ViewType, reference: NaiveDate, first_day: Weekday) -> Vec<GridCell> {
    match view {
        ViewType::Month => month_grid(reference, first_day),
        ViewType::Week => week_grid(reference, first_day),
        ViewType::Day => day_grid(reference),
    }
}

fn month_grid(reference: NaiveDate, first_day: Weekday) -> Vec<GridCell> {
    let first = first_of_month(reference);
    let leading = weekday_offset(first, first_day) as usize;
    let month_days = days_in_month(first) as usize;

    let total = ((leading + month_days).div_ceil(7) * 7).max(MIN_MONTH_CELLS);
    let grid_start = first - Duration::days(leading as i64);

    grid_start
        .iter_days()
        .take(total)
        .enumerate()
        .map(|(index, date)| GridCell::Day {
            date,
            in_range: index >= leading && index < leading + month_days,
        })
        .collect()
}

fn week_grid(reference: NaiveDate, first_day: Weekday) -> Vec<GridCell> {
    week_start(reference, first_day)
        .iter_days()
        .take(7)
        .map(|date| GridCell::Day {
            date,
            in_range: true,
        })
        .collect()
}

fn day_grid(reference: NaiveDate) -> Vec<GridCell> {
    (0..24)
        .map(|hour| GridCell::Hour {
            date: reference,
            hour,
        })
        .collect()
}

/// Distinct dates rendered by a grid, in display order.
pub fn grid_dates(cells: &[GridCell]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = cells.iter().map(GridCell::date).collect();
    dates.dedup();
    dates
}

/// First and last date rendered for `view` around `reference`.
pub fn grid_span(view: ViewType, reference: NaiveDate, first_day: Weekday) -> (NaiveDate, NaiveDate) {
    match view {
        ViewType::Day => (reference, reference),
        ViewType::Week => {
            let start = week_start(reference, first_day);
            (start, start + Duration::days(6))
        }
        ViewType::Month => {
            let cells = month_grid(reference, first_day);
            let first = cells.first().map(GridCell::date).unwrap_or(reference);
            let last = cells.last().map(GridCell::date).unwrap_or(reference);
            (first, last)
        }
    }
}
