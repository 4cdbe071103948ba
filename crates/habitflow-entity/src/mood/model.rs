//! Mood entry entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A daily mood journal entry.
///
/// One row per user per UTC day, enforced by a unique index on
/// `(user_id, entry_date)`; re-submitting on the same day updates the
/// existing row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Mood rating, 1 through 5.
    pub mood_rating: i32,
    /// Optional free-form reflection.
    pub reflection: Option<String>,
    /// The UTC date this entry belongs to.
    pub entry_date: NaiveDate,
    /// When the entry was first created.
    pub created_at: DateTime<Utc>,
}

/// Data submitted for a mood entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMood {
    /// Mood rating, 1 through 5.
    pub mood_rating: i32,
    /// Optional free-form reflection.
    pub reflection: Option<String>,
}
