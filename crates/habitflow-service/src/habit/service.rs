//! Habit CRUD and the complete-today flow.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use habitflow_core::error::AppError;
use habitflow_core::types::day_window::DayWindow;
use habitflow_core::types::pagination::{PageRequest, PageResponse};
use habitflow_database::repositories::completion::CompletionRepository;
use habitflow_database::repositories::habit::HabitRepository;
use habitflow_database::repositories::notification::NotificationRepository;
use habitflow_entity::completion::{HabitCompletion, NewCompletion};
use habitflow_entity::habit::{CreateHabit, Habit, HabitFrequency, UpdateHabit};
use habitflow_entity::notification::NewNotification;
use habitflow_storage::proof::ProofStore;

use crate::analytics::streak::compute_streaks;
use crate::context::RequestContext;

/// Streak lengths that earn a notification.
const STREAK_MILESTONES: &[u32] = &[7, 14, 30, 60, 100];

/// Manages habits and their completion records.
#[derive(Debug, Clone)]
pub struct HabitService {
    /// Habit repository.
    habit_repo: Arc<HabitRepository>,
    /// Completion repository.
    completion_repo: Arc<CompletionRepository>,
    /// Notification repository, for streak milestones.
    notification_repo: Arc<NotificationRepository>,
    /// Proof image store.
    proof_store: Arc<ProofStore>,
}

impl HabitService {
    /// Creates a new habit service.
    pub fn new(
        habit_repo: Arc<HabitRepository>,
        completion_repo: Arc<CompletionRepository>,
        notification_repo: Arc<NotificationRepository>,
        proof_store: Arc<ProofStore>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            notification_repo,
            proof_store,
        }
    }

    /// Lists the current user's habits.
    pub async fn list_habits(
        &self,
        ctx: &RequestContext,
        active_only: bool,
        page: PageRequest,
    ) -> Result<PageResponse<Habit>, AppError> {
        self.habit_repo
            .find_by_user(ctx.user_id, active_only, &page)
            .await
    }

    /// Gets one of the current user's habits.
    pub async fn get_habit(&self, ctx: &RequestContext, habit_id: Uuid) -> Result<Habit, AppError> {
        self.habit_repo
            .find_by_id(ctx.user_id, habit_id)
            .await?
            .ok_or_else(|| AppError::not_found("Habit not found"))
    }

    /// Creates a habit.
    pub async fn create_habit(
        &self,
        ctx: &RequestContext,
        data: CreateHabit,
    ) -> Result<Habit, AppError> {
        if data.target_count < 1 {
            return Err(AppError::validation("target_count must be at least 1"));
        }

        let habit = self.habit_repo.create(ctx.user_id, &data).await?;
        info!(user_id = %ctx.user_id, habit_id = %habit.id, title = %habit.title, "Habit created");
        Ok(habit)
    }

    /// Partially updates a habit.
    pub async fn update_habit(
        &self,
        ctx: &RequestContext,
        habit_id: Uuid,
        data: UpdateHabit,
    ) -> Result<Habit, AppError> {
        if let Some(target) = data.target_count {
            if target < 1 {
                return Err(AppError::validation("target_count must be at least 1"));
            }
        }
        self.habit_repo.update(ctx.user_id, habit_id, &data).await
    }

    /// Deletes a habit and its completion history.
    pub async fn delete_habit(&self, ctx: &RequestContext, habit_id: Uuid) -> Result<(), AppError> {
        self.habit_repo.delete(ctx.user_id, habit_id).await?;
        info!(user_id = %ctx.user_id, habit_id = %habit_id, "Habit deleted");
        Ok(())
    }

    /// Records a completion for a habit.
    ///
    /// Daily habits count completions against the current UTC day,
    /// weekly habits against the current ISO week. Once the habit's
    /// target for the window is met, further completions are rejected
    /// as a conflict.
    pub async fn complete_habit(
        &self,
        ctx: &RequestContext,
        habit_id: Uuid,
        data: NewCompletion,
    ) -> Result<HabitCompletion, AppError> {
        if let Some(rating) = data.mood_rating {
            if !(1..=5).contains(&rating) {
                return Err(AppError::validation("mood_rating must be between 1 and 5"));
            }
        }

        let habit = self.get_habit(ctx, habit_id).await?;
        if !habit.is_active {
            return Err(AppError::validation("Habit is archived"));
        }

        let window = match habit.frequency {
            HabitFrequency::Daily => DayWindow::today(),
            HabitFrequency::Weekly => DayWindow::week_containing(chrono::Utc::now()),
        };
        let done = self.completion_repo.count_in_window(habit.id, &window).await?;
        if done >= habit.target_count as i64 {
            let period = match habit.frequency {
                HabitFrequency::Daily => "today",
                HabitFrequency::Weekly => "this week",
            };
            return Err(AppError::conflict(format!(
                "Habit already completed for {period}"
            )));
        }

        let completion = self
            .completion_repo
            .create(ctx.user_id, habit.id, &data)
            .await?;
        info!(
            user_id = %ctx.user_id,
            habit_id = %habit.id,
            completion_id = %completion.id,
            "Habit completed"
        );

        self.notify_streak_milestone(ctx, &habit).await?;
        Ok(completion)
    }

    /// Emits a notification when this completion pushed the habit's
    /// current streak onto a milestone.
    async fn notify_streak_milestone(
        &self,
        ctx: &RequestContext,
        habit: &Habit,
    ) -> Result<(), AppError> {
        let times = self.completion_repo.completion_times(habit.id).await?;
        let summary = compute_streaks(&times, habit.frequency, chrono::Utc::now());

        if STREAK_MILESTONES.contains(&summary.current) {
            self.notification_repo
                .create(&NewNotification::streak_milestone(
                    ctx.user_id,
                    &habit.title,
                    summary.current,
                    habit.frequency,
                ))
                .await?;
        }
        Ok(())
    }

    /// Validates and stores a proof image, returning its storage path
    /// and public URL for use in a completion.
    pub async fn upload_proof(
        &self,
        ctx: &RequestContext,
        data: Bytes,
    ) -> Result<habitflow_storage::proof::StoredProof, AppError> {
        self.proof_store.store(ctx.user_id, data).await
    }

    /// Streams a stored proof image back, owner-scoped.
    pub async fn open_proof(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<(habitflow_core::traits::storage::ByteStream, String), AppError> {
        self.proof_store.open(ctx.user_id, path).await
    }

    /// Lists completions for one habit, newest first.
    pub async fn list_completions(
        &self,
        ctx: &RequestContext,
        habit_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<HabitCompletion>, AppError> {
        // Ownership check doubles as a 404 for foreign habits.
        self.get_habit(ctx, habit_id).await?;
        self.completion_repo
            .find_by_habit(ctx.user_id, habit_id, &page)
            .await
    }

    /// Lists the user's completions across all habits at or after
    /// `since`, oldest first.
    pub async fn list_recent_completions(
        &self,
        ctx: &RequestContext,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<HabitCompletion>, AppError> {
        self.completion_repo
            .find_by_user_since(ctx.user_id, since)
            .await
    }

    /// Lists completions that carry a proof image (the proof gallery).
    pub async fn list_proofs(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<HabitCompletion>, AppError> {
        self.completion_repo.find_with_proof(ctx.user_id, &page).await
    }
}
