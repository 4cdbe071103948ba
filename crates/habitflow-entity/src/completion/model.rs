//! Habit completion entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A timestamped record that a habit was performed once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HabitCompletion {
    /// Unique completion identifier.
    pub id: Uuid,
    /// The habit that was completed.
    pub habit_id: Uuid,
    /// Owning user (denormalized for owner-scoped queries).
    pub user_id: Uuid,
    /// When the habit was performed.
    pub completed_at: DateTime<Utc>,
    /// Storage path of an optional proof image.
    pub proof_image_path: Option<String>,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// Optional mood rating at completion time, 1 through 5.
    pub mood_rating: Option<i32>,
}

impl HabitCompletion {
    /// Whether this completion carries a proof image.
    pub fn has_proof(&self) -> bool {
        self.proof_image_path.is_some()
    }
}

/// Data recorded when completing a habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCompletion {
    /// Storage path of an optional proof image.
    pub proof_image_path: Option<String>,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// Optional mood rating, 1 through 5.
    pub mood_rating: Option<i32>,
}
