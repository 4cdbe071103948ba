//! Challenge participation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's membership in a challenge.
///
/// Uniqueness per (challenge, user) is enforced by a database
/// constraint; joining twice surfaces as a conflict.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChallengeParticipant {
    /// Unique participation identifier.
    pub id: Uuid,
    /// The challenge joined.
    pub challenge_id: Uuid,
    /// The participating user.
    pub user_id: Uuid,
    /// When the user joined.
    pub joined_at: DateTime<Utc>,
}

/// A participant row embedded with the participant's public profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParticipantWithProfile {
    /// Unique participation identifier.
    pub id: Uuid,
    /// The challenge joined.
    pub challenge_id: Uuid,
    /// The participating user.
    pub user_id: Uuid,
    /// When the user joined.
    pub joined_at: DateTime<Utc>,
    /// Participant's username.
    pub username: String,
    /// Participant's full name.
    pub full_name: String,
    /// Participant's avatar URL.
    pub avatar_url: Option<String>,
}
