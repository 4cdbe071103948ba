//! Habit difficulty enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subjective difficulty of sticking to a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "habit_difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HabitDifficulty {
    /// Low effort.
    Easy,
    /// Moderate effort.
    Medium,
    /// High effort.
    Hard,
}

impl HabitDifficulty {
    /// Return the difficulty as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for HabitDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HabitDifficulty {
    type Err = habitflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(habitflow_core::AppError::validation(format!(
                "Invalid habit difficulty: '{s}'. Expected one of: easy, medium, hard"
            ))),
        }
    }
}
