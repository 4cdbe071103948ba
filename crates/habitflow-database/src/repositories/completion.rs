//! Habit completion repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use habitflow_core::error::{AppError, ErrorKind};
use habitflow_core::result::AppResult;
use habitflow_core::types::day_window::DayWindow;
use habitflow_core::types::pagination::{PageRequest, PageResponse};
use habitflow_entity::completion::{HabitCompletion, NewCompletion};

/// Repository for habit completion records.
#[derive(Debug, Clone)]
pub struct CompletionRepository {
    pool: PgPool,
}

impl CompletionRepository {
    /// Create a new completion repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a completion for a habit.
    pub async fn create(
        &self,
        user_id: Uuid,
        habit_id: Uuid,
        data: &NewCompletion,
    ) -> AppResult<HabitCompletion> {
        sqlx::query_as::<_, HabitCompletion>(
            "INSERT INTO habit_completions (habit_id, user_id, proof_image_path, notes, mood_rating) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(habit_id)
        .bind(user_id)
        .bind(&data.proof_image_path)
        .bind(&data.notes)
        .bind(data.mood_rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record completion", e))
    }

    /// Count completions for a habit inside a time window.
    pub async fn count_in_window(&self, habit_id: Uuid, window: &DayWindow) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM habit_completions \
             WHERE habit_id = $1 AND completed_at >= $2 AND completed_at < $3",
        )
        .bind(habit_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count completions", e))
    }

    /// List completions for a habit, newest first.
    pub async fn find_by_habit(
        &self,
        user_id: Uuid,
        habit_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<HabitCompletion>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM habit_completions WHERE habit_id = $1 AND user_id = $2",
        )
        .bind(habit_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count completions", e)
        })?;

        let items = sqlx::query_as::<_, HabitCompletion>(
            "SELECT * FROM habit_completions \
             WHERE habit_id = $1 AND user_id = $2 \
             ORDER BY completed_at DESC \
             LIMIT $3 OFFSET $4",
        )
        .bind(habit_id)
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list completions", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    /// All of a user's completions at or after `since`, oldest first.
    /// Feeds streak and dashboard computations.
    pub async fn find_by_user_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<HabitCompletion>> {
        sqlx::query_as::<_, HabitCompletion>(
            "SELECT * FROM habit_completions \
             WHERE user_id = $1 AND completed_at >= $2 \
             ORDER BY completed_at",
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list completions", e))
    }

    /// Completion timestamps for a habit, oldest first. Streak input.
    pub async fn completion_times(&self, habit_id: Uuid) -> AppResult<Vec<DateTime<Utc>>> {
        sqlx::query_scalar(
            "SELECT completed_at FROM habit_completions WHERE habit_id = $1 ORDER BY completed_at",
        )
        .bind(habit_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load completion times", e)
        })
    }

    /// Completions that carry a proof image, newest first. Backs the
    /// proof gallery.
    pub async fn find_with_proof(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<HabitCompletion>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM habit_completions \
             WHERE user_id = $1 AND proof_image_path IS NOT NULL",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count proofs", e))?;

        let items = sqlx::query_as::<_, HabitCompletion>(
            "SELECT * FROM habit_completions \
             WHERE user_id = $1 AND proof_image_path IS NOT NULL \
             ORDER BY completed_at DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list proofs", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }
}
