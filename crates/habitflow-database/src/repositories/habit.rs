//! Habit repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use habitflow_core::error::{AppError, ErrorKind};
use habitflow_core::result::AppResult;
use habitflow_core::types::pagination::{PageRequest, PageResponse};
use habitflow_entity::habit::{CreateHabit, Habit, UpdateHabit};

/// Repository for habit CRUD operations. All queries are owner-scoped.
#[derive(Debug, Clone)]
pub struct HabitRepository {
    pool: PgPool,
}

impl HabitRepository {
    /// Create a new habit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a habit by primary key, scoped to its owner.
    pub async fn find_by_id(&self, user_id: Uuid, habit_id: Uuid) -> AppResult<Option<Habit>> {
        sqlx::query_as::<_, Habit>("SELECT * FROM habits WHERE id = $1 AND user_id = $2")
            .bind(habit_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find habit", e))
    }

    /// List a user's habits, newest first. When `active_only` is set,
    /// archived habits are excluded.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        active_only: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Habit>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM habits WHERE user_id = $1 AND ($2 = FALSE OR is_active = TRUE)",
        )
        .bind(user_id)
        .bind(active_only)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count habits", e))?;

        let items = sqlx::query_as::<_, Habit>(
            "SELECT * FROM habits \
             WHERE user_id = $1 AND ($2 = FALSE OR is_active = TRUE) \
             ORDER BY created_at DESC \
             LIMIT $3 OFFSET $4",
        )
        .bind(user_id)
        .bind(active_only)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list habits", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    /// All active habits for a user, unpaginated. Used by the dashboard.
    pub async fn find_active_by_user(&self, user_id: Uuid) -> AppResult<Vec<Habit>> {
        sqlx::query_as::<_, Habit>(
            "SELECT * FROM habits WHERE user_id = $1 AND is_active = TRUE ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list active habits", e))
    }

    /// Create a habit for a user.
    pub async fn create(&self, user_id: Uuid, data: &CreateHabit) -> AppResult<Habit> {
        sqlx::query_as::<_, Habit>(
            "INSERT INTO habits (user_id, title, category, frequency, target_count, difficulty, icon, color) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(user_id)
        .bind(&data.title)
        .bind(&data.category)
        .bind(data.frequency)
        .bind(data.target_count)
        .bind(data.difficulty)
        .bind(&data.icon)
        .bind(&data.color)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create habit", e))
    }

    /// Insert several habits in one transaction. Used by habit templates,
    /// so either all habits are created or none are.
    pub async fn create_many(&self, user_id: Uuid, habits: &[CreateHabit]) -> AppResult<Vec<Habit>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut created = Vec::with_capacity(habits.len());
        for data in habits {
            let habit = sqlx::query_as::<_, Habit>(
                "INSERT INTO habits (user_id, title, category, frequency, target_count, difficulty, icon, color) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
            )
            .bind(user_id)
            .bind(&data.title)
            .bind(&data.category)
            .bind(data.frequency)
            .bind(data.target_count)
            .bind(data.difficulty)
            .bind(&data.icon)
            .bind(&data.color)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create habit from template", e)
            })?;
            created.push(habit);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit template habits", e)
        })?;
        Ok(created)
    }

    /// Partially update a habit, scoped to its owner.
    pub async fn update(
        &self,
        user_id: Uuid,
        habit_id: Uuid,
        data: &UpdateHabit,
    ) -> AppResult<Habit> {
        sqlx::query_as::<_, Habit>(
            "UPDATE habits SET \
                title = COALESCE($3, title), \
                category = COALESCE($4, category), \
                frequency = COALESCE($5, frequency), \
                target_count = COALESCE($6, target_count), \
                difficulty = COALESCE($7, difficulty), \
                is_active = COALESCE($8, is_active), \
                icon = COALESCE($9, icon), \
                color = COALESCE($10, color), \
                updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(habit_id)
        .bind(user_id)
        .bind(&data.title)
        .bind(&data.category)
        .bind(data.frequency)
        .bind(data.target_count)
        .bind(data.difficulty)
        .bind(data.is_active)
        .bind(&data.icon)
        .bind(&data.color)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update habit", e))?
        .ok_or_else(|| AppError::not_found(format!("Habit {habit_id} not found")))
    }

    /// Delete a habit and its completions, scoped to its owner.
    pub async fn delete(&self, user_id: Uuid, habit_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM habits WHERE id = $1 AND user_id = $2")
            .bind(habit_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete habit", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Habit {habit_id} not found")));
        }
        Ok(())
    }
}
