//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A login session backing an access/refresh token pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (the `sid` claim of issued tokens).
    pub id: Uuid,
    /// The authenticated user.
    pub user_id: Uuid,
    /// JWT ID of the currently valid refresh token; rotation replaces it.
    pub refresh_jti: Uuid,
    /// When the refresh token (and thus the session) expires.
    pub expires_at: DateTime<Utc>,
    /// When the session was revoked by logout, if ever.
    pub revoked_at: Option<DateTime<Utc>>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Whether this session can still authenticate requests.
    pub fn is_active(&self) -> bool {
        self.revoked_at.is_none() && self.expires_at > Utc::now()
    }
}
