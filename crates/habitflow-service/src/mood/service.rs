//! Mood submission and history.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use habitflow_core::error::AppError;
use habitflow_database::repositories::mood::MoodRepository;
use habitflow_entity::mood::{MoodEntry, SubmitMood};

use crate::context::RequestContext;

/// Manages the one-entry-per-day mood journal.
#[derive(Debug, Clone)]
pub struct MoodService {
    /// Mood repository.
    mood_repo: Arc<MoodRepository>,
}

impl MoodService {
    /// Creates a new mood service.
    pub fn new(mood_repo: Arc<MoodRepository>) -> Self {
        Self { mood_repo }
    }

    /// Submits today's mood. A second submission on the same UTC day
    /// replaces the first rather than creating a duplicate.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        data: SubmitMood,
    ) -> Result<MoodEntry, AppError> {
        if !(1..=5).contains(&data.mood_rating) {
            return Err(AppError::validation("mood_rating must be between 1 and 5"));
        }

        let today = Utc::now().date_naive();
        let entry = self.mood_repo.upsert(ctx.user_id, today, &data).await?;
        info!(user_id = %ctx.user_id, rating = data.mood_rating, "Mood recorded");
        Ok(entry)
    }

    /// Today's entry, if one exists.
    pub async fn today(&self, ctx: &RequestContext) -> Result<Option<MoodEntry>, AppError> {
        self.mood_repo
            .find_for_date(ctx.user_id, Utc::now().date_naive())
            .await
    }

    /// The user's most recent entries, newest first.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        limit: i64,
    ) -> Result<Vec<MoodEntry>, AppError> {
        self.mood_repo
            .find_by_user(ctx.user_id, limit.clamp(1, 100))
            .await
    }
}
