// Settings module
// User-tunable calendar behaviour, loaded from TOML

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::category::{default_registry, Category, CategoryRegistry, CategoryValidationError};
use crate::models::ui::ViewType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    pub default_view: ViewType,
    /// "HH:MM" start time for newly created events
    pub default_event_start_time: String,
    /// Minutes
    pub default_event_duration: u32,
    /// Entries shown in the upcoming events panel
    pub upcoming_limit: usize,
    /// Events shown per month cell before "+N more"
    pub month_cell_event_limit: usize,
    /// Overrides the built-in category registry when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            default_view: ViewType::Month,
            default_event_start_time: "09:00".to_string(),
            default_event_duration: 60,
            upcoming_limit: 5,
            month_cell_event_limit: 2,
            categories: None,
        }
    }
}

impl Settings {
    /// Configured week start as a chrono weekday.
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week % 7 {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Parsed default start time, falling back to 09:00 when malformed.
    pub fn default_start_time(&self) -> NaiveTime {
        NaiveTime::parse_from_str(self.default_event_start_time.trim(), "%H:%M")
            .unwrap_or_else(|_| {
                log::warn!(
                    "Invalid default_event_start_time '{}', using 09:00",
                    self.default_event_start_time
                );
                NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
            })
    }

    pub fn default_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.default_event_duration.max(1)))
    }

    /// Reject values that cannot be used as-is.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be 0-6 (got {})",
                self.first_day_of_week
            ));
        }
        if self.default_event_duration == 0 {
            return Err("default_event_duration must be at least 1 minute".to_string());
        }
        if self.month_cell_event_limit == 0 {
            return Err("month_cell_event_limit must be at least 1".to_string());
        }
        Ok(())
    }

    /// Configured categories, or the built-in set when none are given.
    pub fn category_registry(&self) -> Result<CategoryRegistry, CategoryValidationError> {
        match &self.categories {
            Some(categories) => CategoryRegistry::from_categories(categories.iter().cloned()),
            None => Ok(default_registry()),
        }
    }
}
