//! Template application and goal analysis.

use std::sync::Arc;

use tracing::info;

use habitflow_core::error::AppError;
use habitflow_core::traits::suggestions::{SuggestedHabit, SuggestionProvider};
use habitflow_database::repositories::habit::HabitRepository;
use habitflow_entity::habit::{CreateHabit, Habit};

use crate::context::RequestContext;
use crate::suggestion::catalog::{self, HabitTemplate};

/// Serves the template catalog and goal suggestions, and applies
/// templates as bulk habit inserts.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    /// Habit repository for template application.
    habit_repo: Arc<HabitRepository>,
    /// Pluggable suggestion strategy.
    provider: Arc<dyn SuggestionProvider>,
}

impl SuggestionService {
    /// Creates a new suggestion service.
    pub fn new(habit_repo: Arc<HabitRepository>, provider: Arc<dyn SuggestionProvider>) -> Self {
        Self {
            habit_repo,
            provider,
        }
    }

    /// The fixed template catalog.
    pub fn list_templates(&self) -> Vec<HabitTemplate> {
        catalog::templates()
    }

    /// Applies a template: bulk-inserts its habits for the current user.
    pub async fn apply_template(
        &self,
        ctx: &RequestContext,
        template_id: &str,
    ) -> Result<Vec<Habit>, AppError> {
        let template = catalog::find_template(template_id)
            .ok_or_else(|| AppError::not_found(format!("Template '{template_id}' not found")))?;

        let creates = template
            .habits
            .iter()
            .map(to_create_habit)
            .collect::<Result<Vec<_>, _>>()?;

        let habits = self.habit_repo.create_many(ctx.user_id, &creates).await?;
        info!(
            user_id = %ctx.user_id,
            template_id,
            count = habits.len(),
            "Template applied"
        );
        Ok(habits)
    }

    /// Produces suggestions for a free-text goal.
    pub fn analyze_goal(&self, goal: &str) -> (String, Vec<SuggestedHabit>) {
        (
            self.provider.name().to_string(),
            self.provider.suggest(goal),
        )
    }
}

/// Converts catalog data into a typed habit creation record.
fn to_create_habit(suggested: &SuggestedHabit) -> Result<CreateHabit, AppError> {
    Ok(CreateHabit {
        title: suggested.title.clone(),
        category: suggested.category.clone(),
        frequency: suggested.frequency.parse()?,
        target_count: suggested.target_count,
        difficulty: suggested.difficulty.parse()?,
        icon: suggested.icon.clone(),
        color: suggested.color.clone(),
    })
}
