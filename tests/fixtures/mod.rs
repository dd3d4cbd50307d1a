// Test fixtures - reusable test data
// Provides consistent dates and events across integration tests

#![allow(dead_code)]

use agri_calendar::models::event::Event;
use agri_calendar::models::recurrence::{EndCondition, Frequency, Recurrence};
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        ymd(year, month, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    /// Wednesday Dec 18, 2024, the middle of the sample schedule
    pub fn sample_wednesday() -> NaiveDate {
        ymd(2024, 12, 18)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::dates::at;
    use super::*;

    /// Dec 15, 2024 09:00-11:00 one-off assessment
    pub fn field_assessment() -> Event {
        Event::builder()
            .title("Crop Health Assessment - Field A")
            .category("health-assessment")
            .start(at(2024, 12, 15, 9))
            .end(at(2024, 12, 15, 11))
            .attendees(["Dr. Sarah Johnson", "Farm Manager Tom"])
            .location("Field A - North Section")
            .build()
            .unwrap()
    }

    /// Weekly check-up on Mondays from Dec 16, 2024
    pub fn weekly_checkup() -> Event {
        Event::builder()
            .title("Worker Health Check-up")
            .category("worker-checkup")
            .start(at(2024, 12, 16, 14))
            .end(at(2024, 12, 16, 16))
            .attendees(["Nurse Maria Lopez", "HR Coordinator"])
            .location("Medical Station")
            .recurrence(Recurrence::recurring(Frequency::Weekly, 1, EndCondition::Never))
            .build()
            .unwrap()
    }

    /// Monthly soil test anchored on Jan 31, 2024
    pub fn month_end_soil_test() -> Event {
        Event::builder()
            .title("Soil Quality Inspection")
            .category("crop-inspection")
            .start(at(2024, 1, 31, 10))
            .end(at(2024, 1, 31, 15))
            .recurrence(Recurrence::recurring(Frequency::Monthly, 1, EndCondition::Never))
            .build()
            .unwrap()
    }
}
