//! Strategy seam for habit suggestions.
//!
//! The bundled implementation is a static catalog; a real
//! recommendation engine can be substituted behind this trait without
//! touching any caller.

use serde::{Deserialize, Serialize};

/// A habit definition proposed to the user, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedHabit {
    /// Habit title.
    pub title: String,
    /// Habit category.
    pub category: String,
    /// Frequency: "daily" or "weekly".
    pub frequency: String,
    /// How many completions per frequency unit.
    pub target_count: i32,
    /// Difficulty: "easy", "medium", or "hard".
    pub difficulty: String,
    /// Display icon identifier.
    pub icon: String,
    /// Display color (hex).
    pub color: String,
}

/// Maps a free-text goal to a list of suggested habits.
pub trait SuggestionProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Provider name, surfaced in the API response.
    fn name(&self) -> &str;

    /// Produce suggestions for the given goal text.
    fn suggest(&self, goal: &str) -> Vec<SuggestedHabit>;
}
