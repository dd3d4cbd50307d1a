// Recurrence module
// Repeat pattern attached to an event

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// When a recurring series stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndCondition {
    #[default]
    Never,
    /// Total number of occurrences, including the first.
    After(u32),
    /// Last date on which an occurrence may start.
    Until(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Recurrence {
    #[default]
    NonRecurring,
    Recurring {
        frequency: Frequency,
        interval: u32,
        #[serde(default)]
        end: EndCondition,
    },
}

impl Recurrence {
    pub fn recurring(frequency: Frequency, interval: u32, end: EndCondition) -> Self {
        Self::Recurring {
            frequency,
            interval,
            end,
        }
    }

    pub fn weekly() -> Self {
        Self::recurring(Frequency::Weekly, 1, EndCondition::Never)
    }

    /// Map a bare "is recurring" flag onto a pattern: weekly, forever.
    pub fn legacy_flag(recurring: bool) -> Self {
        if recurring {
            Self::weekly()
        } else {
            Self::NonRecurring
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, Self::Recurring { .. })
    }

    /// Short human-readable summary, e.g. "Every 2 weeks, 10 times".
    pub fn describe(&self) -> String {
        let Self::Recurring {
            frequency,
            interval,
            end,
        } = self
        else {
            return "Does not repeat".to_string();
        };

        let mut text = if *interval <= 1 {
            format!("Every {}", frequency.unit())
        } else {
            format!("Every {} {}s", interval, frequency.unit())
        };

        match end {
            EndCondition::Never => {}
            EndCondition::After(1) => text.push_str(", once"),
            EndCondition::After(count) => text.push_str(&format!(", {} times", count)),
            EndCondition::Until(date) => text.push_str(&format!(" until {}", date)),
        }

        text
    }
}
