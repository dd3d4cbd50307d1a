//! Filter engine.
//!
//! An event passes when, for every dimension with a non-empty selection,
//! its value(s) intersect the selected set. Dimensions combine with AND;
//! values within a dimension (attendees) combine with OR.

use crate::models::event::Event;
use crate::models::filter::FilterSelection;
use crate::services::event::recurrence::Occurrence;

/// Whether `event` satisfies `selection`.
pub fn matches(event: &Event, selection: &FilterSelection) -> bool {
    let category_ok =
        selection.categories.is_empty() || selection.categories.contains(&event.category);

    let member_ok = selection.members.is_empty()
        || event
            .attendees
            .iter()
            .any(|attendee| selection.members.contains(attendee));

    let location_ok = selection.locations.is_empty()
        || event
            .location
            .as_ref()
            .is_some_and(|location| selection.locations.contains(location));

    category_ok && member_ok && location_ok
}

/// Keep the events matching `selection`, preserving input order.
pub fn apply<'a, I>(events: I, selection: &FilterSelection) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| matches(event, selection))
        .collect()
}

/// Occurrence counterpart of [`apply`].
pub fn apply_occurrences<'a, I>(occurrences: I, selection: &FilterSelection) -> Vec<Occurrence<'a>>
where
    I: IntoIterator<Item = Occurrence<'a>>,
{
    occurrences
        .into_iter()
        .filter(|occurrence| matches(occurrence.event, selection))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn event(title: &str, category: &str, attendees: &[&str], location: Option<&str>) -> Event {
        let mut builder = Event::builder()
            .title(title)
            .category(category)
            .start(at(15, 9))
            .end(at(15, 10))
            .attendees(attendees.iter().copied());
        if let Some(location) = location {
            builder = builder.location(location);
        }
        builder.build().unwrap()
    }

    fn events() -> Vec<Event> {
        vec![
            event(
                "Crop Health Assessment",
                "health-assessment",
                &["Dr. Sarah Johnson", "Farm Manager Tom"],
                Some("Field A - North Section"),
            ),
            event(
                "Worker Health Check-up",
                "worker-checkup",
                &["Nurse Maria Lopez", "HR Coordinator"],
                Some("Medical Station"),
            ),
            event(
                "Safety Training Session",
                "worker-checkup",
                &["All Farm Workers", "Safety Officer"],
                Some("Training Center"),
            ),
            event("Remote review", "crop-inspection", &[], None),
        ]
    }

    fn titles(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let events = events();
        let filtered = apply(&events, &FilterSelection::default());
        assert_eq!(filtered.len(), events.len());
    }

    #[test]
    fn test_category_dimension() {
        let events = events();
        let selection = FilterSelection::new().with_categories(["worker-checkup"]);
        assert_eq!(
            titles(&apply(&events, &selection)),
            vec!["Worker Health Check-up", "Safety Training Session"]
        );
    }

    #[test]
    fn test_member_dimension_is_or_over_attendees() {
        let events = events();
        let selection = FilterSelection::new().with_members(["Safety Officer", "Farm Manager Tom"]);
        assert_eq!(
            titles(&apply(&events, &selection)),
            vec!["Crop Health Assessment", "Safety Training Session"]
        );
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let events = events();
        let selection = FilterSelection::new()
            .with_categories(["worker-checkup"])
            .with_locations(["Medical Station", "Field A - North Section"]);
        assert_eq!(titles(&apply(&events, &selection)), vec!["Worker Health Check-up"]);
    }

    #[test]
    fn test_missing_location_fails_location_filter() {
        let events = events();
        let selection = FilterSelection::new().with_locations(["Training Center"]);
        let filtered = apply(&events, &selection);
        assert!(filtered.iter().all(|e| e.location.is_some()));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let events = events();
        let selection = FilterSelection::new()
            .with_categories(["worker-checkup", "health-assessment"])
            .with_members(["HR Coordinator", "Dr. Sarah Johnson"]);

        let once = apply(&events, &selection);
        let twice = apply(once.iter().copied(), &selection);
        assert_eq!(once, twice);
    }
}
