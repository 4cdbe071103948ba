//! Habit frequency enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a habit is meant to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "habit_frequency", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HabitFrequency {
    /// Performed every day.
    Daily,
    /// Performed every ISO week.
    Weekly,
}

impl HabitFrequency {
    /// Return the frequency as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// The scheduling unit this frequency counts in, for user-facing
    /// messages ("3-day streak", "completed for this week").
    pub fn unit_name(&self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
        }
    }
}

impl fmt::Display for HabitFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HabitFrequency {
    type Err = habitflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(habitflow_core::AppError::validation(format!(
                "Invalid habit frequency: '{s}'. Expected one of: daily, weekly"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "daily".parse::<HabitFrequency>().unwrap(),
            HabitFrequency::Daily
        );
        assert_eq!(
            "WEEKLY".parse::<HabitFrequency>().unwrap(),
            HabitFrequency::Weekly
        );
        assert!("monthly".parse::<HabitFrequency>().is_err());
    }
}
