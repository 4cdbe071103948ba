//! Static habit catalog: template bundles and the default suggestion
//! provider.
//!
//! All content here is hand-authored data, not inference. The provider
//! ignores the goal text on purpose; swapping in a real engine means
//! implementing [`SuggestionProvider`] elsewhere and wiring it into the
//! service.

use habitflow_core::traits::suggestions::{SuggestedHabit, SuggestionProvider};

/// A named bundle of habits that can be applied in one action.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HabitTemplate {
    /// Stable template identifier used in apply requests.
    pub id: &'static str,
    /// Display title.
    pub title: String,
    /// Short description of who the template is for.
    pub description: String,
    /// The habits the template creates.
    pub habits: Vec<SuggestedHabit>,
}

fn suggested(
    title: &str,
    category: &str,
    frequency: &str,
    target_count: i32,
    difficulty: &str,
    icon: &str,
    color: &str,
) -> SuggestedHabit {
    SuggestedHabit {
        title: title.to_string(),
        category: category.to_string(),
        frequency: frequency.to_string(),
        target_count,
        difficulty: difficulty.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

/// The fixed template catalog.
pub fn templates() -> Vec<HabitTemplate> {
    vec![
        HabitTemplate {
            id: "exam-preparation",
            title: "Exam Preparation".to_string(),
            description: "Structured daily routine for exam season".to_string(),
            habits: vec![
                suggested(
                    "Morning Study Session",
                    "Study",
                    "daily",
                    1,
                    "medium",
                    "book-open",
                    "#4F46E5",
                ),
                suggested(
                    "Practice Problems",
                    "Study",
                    "daily",
                    1,
                    "hard",
                    "pencil",
                    "#7C3AED",
                ),
                suggested(
                    "Review Notes",
                    "Study",
                    "daily",
                    1,
                    "easy",
                    "clipboard",
                    "#2563EB",
                ),
                suggested(
                    "Mock Test",
                    "Study",
                    "weekly",
                    1,
                    "hard",
                    "academic-cap",
                    "#DB2777",
                ),
            ],
        },
        HabitTemplate {
            id: "healthy-semester",
            title: "Healthy Semester".to_string(),
            description: "Keep body and mind in shape between deadlines".to_string(),
            habits: vec![
                suggested(
                    "Morning Exercise",
                    "Health",
                    "daily",
                    1,
                    "medium",
                    "heart",
                    "#16A34A",
                ),
                suggested(
                    "Drink Water",
                    "Health",
                    "daily",
                    8,
                    "easy",
                    "droplet",
                    "#0EA5E9",
                ),
                suggested(
                    "Sleep Before Midnight",
                    "Health",
                    "daily",
                    1,
                    "medium",
                    "moon",
                    "#6366F1",
                ),
            ],
        },
        HabitTemplate {
            id: "coding-practice",
            title: "Coding Practice".to_string(),
            description: "Daily programming fundamentals".to_string(),
            habits: vec![
                suggested(
                    "Solve One Problem",
                    "Study",
                    "daily",
                    1,
                    "medium",
                    "code",
                    "#F59E0B",
                ),
                suggested(
                    "Read Technical Articles",
                    "Study",
                    "daily",
                    1,
                    "easy",
                    "newspaper",
                    "#10B981",
                ),
                suggested(
                    "Side Project Session",
                    "Study",
                    "weekly",
                    3,
                    "hard",
                    "terminal",
                    "#EF4444",
                ),
            ],
        },
    ]
}

/// Find a template by its stable ID.
pub fn find_template(id: &str) -> Option<HabitTemplate> {
    templates().into_iter().find(|t| t.id == id)
}

/// The default [`SuggestionProvider`], backed by a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider;

impl SuggestionProvider for StaticCatalogProvider {
    fn name(&self) -> &str {
        "static-catalog"
    }

    // The goal text is intentionally unused: the catalog predates any
    // matching logic and always answers with the same list.
    fn suggest(&self, _goal: &str) -> Vec<SuggestedHabit> {
        vec![
            suggested(
                "Break Goal Into Daily Tasks",
                "Planning",
                "daily",
                1,
                "easy",
                "list-check",
                "#4F46E5",
            ),
            suggested(
                "Focused Work Block",
                "Study",
                "daily",
                1,
                "medium",
                "clock",
                "#F59E0B",
            ),
            suggested(
                "Weekly Progress Review",
                "Planning",
                "weekly",
                1,
                "easy",
                "chart-bar",
                "#16A34A",
            ),
        ]
    }
}
