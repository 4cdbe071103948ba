//! Dashboard aggregation: completion rates, series, and streaks.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use habitflow_core::error::AppError;
use habitflow_core::types::day_window::DayWindow;
use habitflow_database::repositories::completion::CompletionRepository;
use habitflow_database::repositories::habit::HabitRepository;
use habitflow_entity::habit::HabitFrequency;

use crate::analytics::streak::{StreakSummary, compute_streaks};
use crate::context::RequestContext;

/// Days covered by the dashboard window.
const DASHBOARD_DAYS: i64 = 7;

/// Completions on one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyProgress {
    /// The UTC date.
    pub date: NaiveDate,
    /// Completions recorded that day.
    pub completions: u32,
}

/// Completions per habit category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    /// Habit category.
    pub category: String,
    /// Completions in the window.
    pub completions: u32,
}

/// Streak summary for one habit.
#[derive(Debug, Clone, Serialize)]
pub struct HabitStreak {
    /// The habit.
    pub habit_id: Uuid,
    /// Habit title, for display without a second fetch.
    pub title: String,
    /// Current and best streaks.
    #[serde(flatten)]
    pub streak: StreakSummary,
}

/// The aggregated dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Number of active habits.
    pub active_habits: u32,
    /// Completions recorded in the current UTC day.
    pub completed_today: u32,
    /// Share of expected completions met over the last 7 days, 0..=1.
    pub completion_rate: f64,
    /// Per-day completion counts for the last 7 days, oldest first.
    pub weekly_progress: Vec<DailyProgress>,
    /// Completions per category over the last 7 days.
    pub category_breakdown: Vec<CategoryBreakdown>,
    /// Current and best streak per active habit.
    pub streaks: Vec<HabitStreak>,
}

/// Computes dashboard aggregates from raw completion data.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    /// Habit repository.
    habit_repo: Arc<HabitRepository>,
    /// Completion repository.
    completion_repo: Arc<CompletionRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(habit_repo: Arc<HabitRepository>, completion_repo: Arc<CompletionRepository>) -> Self {
        Self {
            habit_repo,
            completion_repo,
        }
    }

    /// Builds the full dashboard for the current user.
    pub async fn dashboard(&self, ctx: &RequestContext) -> Result<Dashboard, AppError> {
        let now = Utc::now();
        let today = DayWindow::today();
        let window_start = today.start - Duration::days(DASHBOARD_DAYS - 1);

        let habits = self.habit_repo.find_active_by_user(ctx.user_id).await?;
        let completions = self
            .completion_repo
            .find_by_user_since(ctx.user_id, window_start)
            .await?;

        let completed_today = completions
            .iter()
            .filter(|c| today.contains(c.completed_at))
            .count() as u32;

        // Per-day series, oldest first.
        let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
        for completion in &completions {
            *per_day.entry(completion.completed_at.date_naive()).or_default() += 1;
        }
        let weekly_progress = (0..DASHBOARD_DAYS)
            .map(|offset| {
                let date = (window_start + Duration::days(offset)).date_naive();
                DailyProgress {
                    date,
                    completions: per_day.get(&date).copied().unwrap_or(0),
                }
            })
            .collect();

        // Category breakdown over the same window.
        let category_by_habit: HashMap<Uuid, &str> = habits
            .iter()
            .map(|h| (h.id, h.category.as_str()))
            .collect();
        let mut per_category: HashMap<&str, u32> = HashMap::new();
        for completion in &completions {
            if let Some(category) = category_by_habit.get(&completion.habit_id) {
                *per_category.entry(category).or_default() += 1;
            }
        }
        let mut category_breakdown: Vec<CategoryBreakdown> = per_category
            .into_iter()
            .map(|(category, completions)| CategoryBreakdown {
                category: category.to_string(),
                completions,
            })
            .collect();
        category_breakdown.sort_by(|a, b| b.completions.cmp(&a.completions));

        // Expected completions over the window: daily habits once per
        // day, weekly habits once per week.
        let expected: i64 = habits
            .iter()
            .map(|h| {
                let units = match h.frequency {
                    HabitFrequency::Daily => DASHBOARD_DAYS,
                    HabitFrequency::Weekly => 1,
                };
                units * i64::from(h.target_count)
            })
            .sum();
        let completion_rate = if expected > 0 {
            (completions.len() as f64 / expected as f64).min(1.0)
        } else {
            0.0
        };

        // Streaks use the habit's full history, not just the window.
        let mut streaks = Vec::with_capacity(habits.len());
        for habit in &habits {
            let times = self.completion_repo.completion_times(habit.id).await?;
            streaks.push(HabitStreak {
                habit_id: habit.id,
                title: habit.title.clone(),
                streak: compute_streaks(&times, habit.frequency, now),
            });
        }

        Ok(Dashboard {
            active_habits: habits.len() as u32,
            completed_today,
            completion_rate,
            weekly_progress,
            category_breakdown,
            streaks,
        })
    }

    /// Streak summary for a single habit.
    pub async fn habit_streak(
        &self,
        ctx: &RequestContext,
        habit_id: Uuid,
    ) -> Result<StreakSummary, AppError> {
        let habit = self
            .habit_repo
            .find_by_id(ctx.user_id, habit_id)
            .await?
            .ok_or_else(|| AppError::not_found("Habit not found"))?;

        let times = self.completion_repo.completion_times(habit.id).await?;
        Ok(compute_streaks(&times, habit.frequency, Utc::now()))
    }
}
