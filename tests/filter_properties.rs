// Property-based tests for the filter engine

use agri_calendar::models::event::Event;
use agri_calendar::models::filter::FilterSelection;
use agri_calendar::services::filter::{apply, matches};
use chrono::NaiveDate;
use proptest::prelude::*;
use proptest::sample::subsequence;

const CATEGORIES: [&str; 4] = [
    "health-assessment",
    "worker-checkup",
    "crop-inspection",
    "equipment-maintenance",
];
const MEMBERS: [&str; 5] = [
    "Dr. Sarah Johnson",
    "Nurse Maria Lopez",
    "Safety Officer",
    "Agronomist",
    "Maintenance Team",
];
const LOCATIONS: [&str; 3] = ["Medical Station", "Training Center", "Pump Station 1"];

fn any_event() -> impl Strategy<Value = Event> {
    (
        0..CATEGORIES.len(),
        subsequence(MEMBERS.to_vec(), 0..=3),
        proptest::option::of(0..LOCATIONS.len()),
        1..=28u32,
    )
        .prop_map(|(category, attendees, location, day)| {
            let start = NaiveDate::from_ymd_opt(2024, 12, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap();
            let mut builder = Event::builder()
                .title("Field task")
                .category(CATEGORIES[category])
                .start(start)
                .end(start + chrono::Duration::hours(1))
                .attendees(attendees);
            if let Some(location) = location {
                builder = builder.location(LOCATIONS[location]);
            }
            builder.build().unwrap()
        })
}

fn any_selection() -> impl Strategy<Value = FilterSelection> {
    (
        subsequence(CATEGORIES.to_vec(), 0..=2),
        subsequence(MEMBERS.to_vec(), 0..=2),
        subsequence(LOCATIONS.to_vec(), 0..=2),
    )
        .prop_map(|(categories, members, locations)| {
            FilterSelection::new()
                .with_categories(categories)
                .with_members(members)
                .with_locations(locations)
        })
}

proptest! {
    #[test]
    fn prop_empty_selection_is_identity(events in prop::collection::vec(any_event(), 0..20)) {
        let filtered = apply(&events, &FilterSelection::default());
        let all: Vec<&Event> = events.iter().collect();
        prop_assert_eq!(filtered, all);
    }

    #[test]
    fn prop_apply_is_idempotent(
        events in prop::collection::vec(any_event(), 0..20),
        selection in any_selection(),
    ) {
        let once = apply(&events, &selection);
        let twice = apply(once.iter().copied(), &selection);
        prop_assert_eq!(once, twice);
    }

    /// Filtering keeps a subsequence of the input
    #[test]
    fn prop_apply_preserves_order(
        events in prop::collection::vec(any_event(), 0..20),
        selection in any_selection(),
    ) {
        let filtered = apply(&events, &selection);
        let expected: Vec<&Event> = events.iter().filter(|e| matches(e, &selection)).collect();
        prop_assert_eq!(filtered, expected);
    }

    /// AND across dimensions: passing the full selection means passing each
    /// single-dimension selection
    #[test]
    fn prop_dimensions_combine_with_and(event in any_event(), selection in any_selection()) {
        let by_category = FilterSelection::new().with_categories(selection.categories.clone());
        let by_member = FilterSelection::new().with_members(selection.members.clone());
        let by_location = FilterSelection::new().with_locations(selection.locations.clone());

        prop_assert_eq!(
            matches(&event, &selection),
            matches(&event, &by_category) && matches(&event, &by_member) && matches(&event, &by_location)
        );
    }
}
