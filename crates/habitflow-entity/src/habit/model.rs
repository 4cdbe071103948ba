//! Habit entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::difficulty::HabitDifficulty;
use super::frequency::HabitFrequency;

/// A recurring user-defined task with a frequency and difficulty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    /// Unique habit identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Habit title.
    pub title: String,
    /// Free-form category (e.g., "Study", "Health").
    pub category: String,
    /// How often the habit recurs.
    pub frequency: HabitFrequency,
    /// Target completions per frequency unit.
    pub target_count: i32,
    /// Subjective difficulty.
    pub difficulty: HabitDifficulty,
    /// Whether the habit is currently being tracked.
    pub is_active: bool,
    /// Display icon identifier.
    pub icon: String,
    /// Display color (hex).
    pub color: String,
    /// When the habit was created.
    pub created_at: DateTime<Utc>,
    /// When the habit was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHabit {
    /// Habit title.
    pub title: String,
    /// Category.
    pub category: String,
    /// Frequency.
    pub frequency: HabitFrequency,
    /// Target completions per frequency unit.
    pub target_count: i32,
    /// Difficulty.
    pub difficulty: HabitDifficulty,
    /// Display icon identifier.
    pub icon: String,
    /// Display color (hex).
    pub color: String,
}

/// Partial update of an existing habit. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHabit {
    /// New title.
    pub title: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New frequency.
    pub frequency: Option<HabitFrequency>,
    /// New target count.
    pub target_count: Option<i32>,
    /// New difficulty.
    pub difficulty: Option<HabitDifficulty>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New icon.
    pub icon: Option<String>,
    /// New color.
    pub color: Option<String>,
}
