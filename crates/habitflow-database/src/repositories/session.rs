//! Session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use habitflow_core::error::{AppError, ErrorKind};
use habitflow_core::result::AppResult;
use habitflow_entity::session::Session;

/// Repository for login session rows.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a session for a freshly logged-in user.
    pub async fn create(
        &self,
        user_id: Uuid,
        refresh_jti: Uuid,
        expires_at: DateTime<Utc>,
    ) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (user_id, refresh_jti, expires_at) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(refresh_jti)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find a session by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Replace the refresh JWT ID after token rotation.
    pub async fn rotate_refresh(
        &self,
        session_id: Uuid,
        new_jti: Uuid,
        new_expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE sessions SET refresh_jti = $2, expires_at = $3 WHERE id = $1")
                .bind(session_id)
                .bind(new_jti)
                .bind(new_expires_at)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to rotate refresh token", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Session {session_id} not found"
            )));
        }
        Ok(())
    }

    /// Revoke a session (logout).
    pub async fn revoke(&self, session_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke session", e)
            })?;
        Ok(())
    }

}
