//! Challenge repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use habitflow_core::error::{AppError, ErrorKind};
use habitflow_core::result::AppResult;
use habitflow_core::types::pagination::{PageRequest, PageResponse};
use habitflow_entity::challenge::{
    Challenge, ChallengeParticipant, CreateChallenge, ParticipantWithProfile,
};

/// Repository for challenges and their participant rows.
#[derive(Debug, Clone)]
pub struct ChallengeRepository {
    pool: PgPool,
}

impl ChallengeRepository {
    /// Create a new challenge repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a challenge by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Challenge>> {
        sqlx::query_as::<_, Challenge>("SELECT * FROM challenges WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find challenge", e))
    }

    /// List open challenges, soonest-ending first.
    pub async fn find_active(&self, page: &PageRequest) -> AppResult<PageResponse<Challenge>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM challenges WHERE is_active = TRUE AND end_date > NOW()",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count challenges", e))?;

        let items = sqlx::query_as::<_, Challenge>(
            "SELECT * FROM challenges \
             WHERE is_active = TRUE AND end_date > NOW() \
             ORDER BY end_date \
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list challenges", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    /// Create a challenge.
    pub async fn create(&self, creator_id: Uuid, data: &CreateChallenge) -> AppResult<Challenge> {
        sqlx::query_as::<_, Challenge>(
            "INSERT INTO challenges (title, description, creator_id, start_date, end_date, max_participants) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(creator_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.max_participants)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create challenge", e))
    }

    /// Count participants of a challenge.
    pub async fn count_participants(&self, challenge_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM challenge_participants WHERE challenge_id = $1")
            .bind(challenge_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count participants", e)
            })
    }

    /// Whether a user is already a participant of a challenge.
    pub async fn is_participant(&self, challenge_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM challenge_participants \
             WHERE challenge_id = $1 AND user_id = $2)",
        )
        .bind(challenge_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check participation", e)
        })
    }

    /// Add a user to a challenge. Joining twice surfaces as a conflict
    /// through the unique constraint.
    pub async fn add_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<ChallengeParticipant> {
        sqlx::query_as::<_, ChallengeParticipant>(
            "INSERT INTO challenge_participants (challenge_id, user_id) \
             VALUES ($1, $2) RETURNING *",
        )
        .bind(challenge_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("challenge_participants_challenge_user_key") =>
            {
                AppError::conflict("Already joined this challenge")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to join challenge", e),
        })
    }

    /// Remove a user's own participation row.
    pub async fn remove_participant(&self, challenge_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM challenge_participants WHERE challenge_id = $1 AND user_id = $2",
        )
        .bind(challenge_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to leave challenge", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Not a participant of this challenge"));
        }
        Ok(())
    }

    /// List a challenge's participants with their public profiles,
    /// join order.
    pub async fn find_participants(
        &self,
        challenge_id: Uuid,
    ) -> AppResult<Vec<ParticipantWithProfile>> {
        sqlx::query_as::<_, ParticipantWithProfile>(
            "SELECT cp.id, cp.challenge_id, cp.user_id, cp.joined_at, \
                    u.username, u.full_name, u.avatar_url \
             FROM challenge_participants cp \
             JOIN users u ON u.id = cp.user_id \
             WHERE cp.challenge_id = $1 \
             ORDER BY cp.joined_at",
        )
        .bind(challenge_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list participants", e))
    }

    /// Challenges a user has joined that are still running.
    pub async fn find_joined_by_user(&self, user_id: Uuid) -> AppResult<Vec<Challenge>> {
        sqlx::query_as::<_, Challenge>(
            "SELECT c.* FROM challenges c \
             JOIN challenge_participants cp ON cp.challenge_id = c.id \
             WHERE cp.user_id = $1 AND c.end_date > NOW() \
             ORDER BY c.end_date",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list joined challenges", e)
        })
    }
}
