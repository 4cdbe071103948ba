//! Mood entry repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use habitflow_core::error::{AppError, ErrorKind};
use habitflow_core::result::AppResult;
use habitflow_entity::mood::{MoodEntry, SubmitMood};

/// Repository for daily mood entries.
#[derive(Debug, Clone)]
pub struct MoodRepository {
    pool: PgPool,
}

impl MoodRepository {
    /// Create a new mood repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or update the user's entry for a date. One entry per user
    /// per day is enforced by the unique index; a second submission on
    /// the same day overwrites the first.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        entry_date: NaiveDate,
        data: &SubmitMood,
    ) -> AppResult<MoodEntry> {
        sqlx::query_as::<_, MoodEntry>(
            "INSERT INTO mood_entries (user_id, mood_rating, reflection, entry_date) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT mood_entries_user_date_key \
             DO UPDATE SET mood_rating = EXCLUDED.mood_rating, \
                           reflection = EXCLUDED.reflection \
             RETURNING *",
        )
        .bind(user_id)
        .bind(data.mood_rating)
        .bind(&data.reflection)
        .bind(entry_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("mood_entries_mood_rating_check") =>
            {
                AppError::validation("mood_rating must be between 1 and 5")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save mood entry", e),
        })
    }

    /// Find the user's entry for a specific date.
    pub async fn find_for_date(
        &self,
        user_id: Uuid,
        entry_date: NaiveDate,
    ) -> AppResult<Option<MoodEntry>> {
        sqlx::query_as::<_, MoodEntry>(
            "SELECT * FROM mood_entries WHERE user_id = $1 AND entry_date = $2",
        )
        .bind(user_id)
        .bind(entry_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find mood entry", e))
    }

    /// The user's most recent entries, newest first.
    pub async fn find_by_user(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<MoodEntry>> {
        sqlx::query_as::<_, MoodEntry>(
            "SELECT * FROM mood_entries WHERE user_id = $1 ORDER BY entry_date DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list mood entries", e))
    }
}
