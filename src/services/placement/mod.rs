//! Places filtered occurrences onto the cells of the current grid.

use serde::Serialize;

use crate::models::filter::FilterSelection;
use crate::models::ui::GridCell;
use crate::services::event::recurrence::Occurrence;
use crate::services::event::EventStore;
use crate::services::filter;
use crate::services::view::ViewState;
use crate::utils::date::{end_of_day, start_of_day};

/// A grid cell with the occurrences that start in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedCell<'a> {
    pub cell: GridCell,
    pub occurrences: Vec<Occurrence<'a>>,
}

impl<'a> PlacedCell<'a> {
    /// The first `limit` occurrences, for cells with limited room.
    pub fn visible(&self, limit: usize) -> &[Occurrence<'a>] {
        &self.occurrences[..self.occurrences.len().min(limit)]
    }

    /// How many occurrences did not fit (the "+N more" count).
    pub fn overflow(&self, limit: usize) -> usize {
        self.occurrences.len().saturating_sub(limit)
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// Expand the store over the view's grid, filter, and bucket the occurrences
/// into cells. Day cells collect by start date, hour cells by start hour.
pub fn place_events<'a>(
    store: &'a EventStore,
    view: &ViewState,
    selection: &FilterSelection,
) -> Vec<PlacedCell<'a>> {
    let (first, last) = view.span();
    let occurrences = filter::apply_occurrences(
        store.expand_between(start_of_day(first), end_of_day(last)),
        selection,
    );

    view.grid()
        .into_iter()
        .map(|cell| {
            let occurrences = occurrences
                .iter()
                .filter(|occurrence| starts_in(occurrence, &cell))
                .copied()
                .collect();
            PlacedCell { cell, occurrences }
        })
        .collect()
}

fn starts_in(occurrence: &Occurrence<'_>, cell: &GridCell) -> bool {
    use chrono::Timelike;

    match cell {
        GridCell::Day { date, .. } => occurrence.date() == *date,
        GridCell::Hour { date, hour } => {
            occurrence.date() == *date && occurrence.start.hour() == *hour
        }
    }
}
