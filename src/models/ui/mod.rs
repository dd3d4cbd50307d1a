// UI-facing models
// View granularity and the cells a calendar grid is made of

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewType {
    #[default]
    Month,
    Week,
    Day,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Day => "Day",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Month, Self::Week, Self::Day]
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            other => Err(format!("Unknown view '{}' (expected month, week or day)", other)),
        }
    }
}

/// A single renderable unit of a calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridCell {
    /// A whole day. `in_range` is false for padding days from adjacent months.
    Day { date: NaiveDate, in_range: bool },
    /// One hour slot (0-23) of the day view.
    Hour { date: NaiveDate, hour: u32 },
}

impl GridCell {
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Day { date, .. } | Self::Hour { date, .. } => *date,
        }
    }

    pub fn in_range(&self) -> bool {
        match self {
            Self::Day { in_range, .. } => *in_range,
            Self::Hour { .. } => true,
        }
    }

    pub fn hour(&self) -> Option<u32> {
        match self {
            Self::Hour { hour, .. } => Some(*hour),
            Self::Day { .. } => None,
        }
    }
}
