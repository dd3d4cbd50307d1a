// Sample schedule
// Built-in agricultural operations data used when no events file is given

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::models::event::{Event, EventStatus, Priority};
use crate::models::recurrence::{EndCondition, Frequency, Recurrence};
use crate::services::event::EventStore;

/// Reference date the sample schedule is built around.
pub fn sample_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 18).unwrap_or(NaiveDate::MIN)
}

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

#[allow(clippy::too_many_arguments)]
fn sample_event(
    id: i64,
    title: &str,
    description: &str,
    category: &str,
    (start, end): (NaiveDateTime, NaiveDateTime),
    attendees: [&str; 2],
    location: &str,
    status: EventStatus,
    priority: Priority,
    recurrence: Recurrence,
) -> Result<Event> {
    Event::builder()
        .id(id)
        .title(title)
        .description(description)
        .category(category)
        .start(start)
        .end(end)
        .attendees(attendees)
        .location(location)
        .status(status)
        .priority(priority)
        .recurrence(recurrence)
        .build()
}

/// The December 2024 field operations schedule.
pub fn sample_events() -> Result<Vec<Event>> {
    Ok(vec![
        sample_event(
            1,
            "Crop Health Assessment - Field A",
            "Comprehensive health evaluation of wheat crops in the northern field section",
            "health-assessment",
            (at(15, 9), at(15, 11)),
            ["Dr. Sarah Johnson", "Farm Manager Tom"],
            "Field A - North Section",
            EventStatus::Scheduled,
            Priority::High,
            Recurrence::NonRecurring,
        )?,
        sample_event(
            2,
            "Worker Health Check-up",
            "Routine health screening for seasonal workers including blood pressure and general wellness check",
            "worker-checkup",
            (at(16, 14), at(16, 16)),
            ["Nurse Maria Lopez", "HR Coordinator"],
            "Medical Station",
            EventStatus::Scheduled,
            Priority::Medium,
            Recurrence::legacy_flag(true),
        )?,
        sample_event(
            3,
            "Equipment Maintenance - Irrigation",
            "Scheduled maintenance and inspection of irrigation system pumps and controllers",
            "equipment-maintenance",
            (at(18, 8), at(18, 12)),
            ["Maintenance Team", "Technical Supervisor"],
            "Pump Station 1",
            EventStatus::InProgress,
            Priority::High,
            Recurrence::NonRecurring,
        )?,
        sample_event(
            4,
            "Soil Quality Inspection",
            "Monthly soil testing and analysis for nutrient levels and pH balance across multiple field sections",
            "crop-inspection",
            (at(20, 10), at(20, 15)),
            ["Soil Specialist", "Agronomist"],
            "Fields B, C, D",
            EventStatus::Scheduled,
            Priority::Medium,
            Recurrence::recurring(Frequency::Monthly, 1, EndCondition::Never),
        )?,
        sample_event(
            5,
            "Safety Training Session",
            "Mandatory safety training covering equipment handling, chemical safety, and emergency procedures",
            "worker-checkup",
            (at(22, 13), at(22, 17)),
            ["All Farm Workers", "Safety Officer"],
            "Training Center",
            EventStatus::Scheduled,
            Priority::High,
            Recurrence::NonRecurring,
        )?,
    ])
}

/// Store preloaded with `sample_events()`.
pub fn sample_store() -> Result<EventStore> {
    EventStore::from_events(sample_events()?)
}
