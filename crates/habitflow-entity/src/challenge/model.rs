//! Challenge entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A time-boxed, optionally capacity-limited shared goal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Challenge {
    /// Unique challenge identifier.
    pub id: Uuid,
    /// Challenge title.
    pub title: String,
    /// Challenge description.
    pub description: String,
    /// The user who created the challenge.
    pub creator_id: Uuid,
    /// When the challenge starts.
    pub start_date: DateTime<Utc>,
    /// When the challenge ends.
    pub end_date: DateTime<Utc>,
    /// Whether the challenge is open.
    pub is_active: bool,
    /// Maximum number of participants (unlimited when `None`).
    pub max_participants: Option<i32>,
    /// When the challenge was created.
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    /// Whether the challenge has ended.
    pub fn has_ended(&self) -> bool {
        self.end_date <= Utc::now()
    }

    /// Whether a participant count would exceed the capacity limit.
    pub fn is_full(&self, participant_count: i64) -> bool {
        self.max_participants
            .map(|max| participant_count >= max as i64)
            .unwrap_or(false)
    }
}

/// Data required to create a new challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChallenge {
    /// Challenge title.
    pub title: String,
    /// Challenge description.
    pub description: String,
    /// Start date.
    pub start_date: DateTime<Utc>,
    /// End date.
    pub end_date: DateTime<Utc>,
    /// Optional participant capacity.
    pub max_participants: Option<i32>,
}
