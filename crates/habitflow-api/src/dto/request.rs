//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use habitflow_entity::habit::{HabitDifficulty, HabitFrequency};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Password (policy enforced server-side).
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Desired username.
    #[validate(length(min = 3, max = 30, message = "Username must be 3-30 characters"))]
    pub username: String,
    /// Full display name.
    #[validate(length(min = 1, max = 100, message = "Full name is required"))]
    pub full_name: String,
    /// Whether the user is a CSE student.
    #[serde(default)]
    pub is_cse_student: bool,
    /// Year of study, 1 through 4.
    #[validate(range(min = 1, max = 4, message = "year_of_study must be between 1 and 4"))]
    pub year_of_study: Option<i32>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Email verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    /// The verification token from the email link.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}

/// Resend-verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendVerificationRequest {
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New username.
    #[validate(length(min = 3, max = 30))]
    pub username: Option<String>,
    /// New full name.
    #[validate(length(min = 1, max = 100))]
    pub full_name: Option<String>,
    /// New avatar URL.
    pub avatar_url: Option<String>,
    /// New CSE-student flag.
    pub is_cse_student: Option<bool>,
    /// New year of study.
    #[validate(range(min = 1, max = 4, message = "year_of_study must be between 1 and 4"))]
    pub year_of_study: Option<i32>,
}

/// Create habit request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHabitRequest {
    /// Habit title.
    #[validate(length(min = 1, max = 120, message = "Title is required"))]
    pub title: String,
    /// Category.
    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: String,
    /// Frequency ("daily" or "weekly").
    pub frequency: HabitFrequency,
    /// Target completions per frequency unit.
    #[validate(range(min = 1, message = "target_count must be at least 1"))]
    pub target_count: i32,
    /// Difficulty.
    pub difficulty: HabitDifficulty,
    /// Display icon identifier.
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Display color (hex).
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_icon() -> String {
    "star".to_string()
}

fn default_color() -> String {
    "#4F46E5".to_string()
}

/// Partial habit update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateHabitRequest {
    /// New title.
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    /// New category.
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
    /// New frequency.
    pub frequency: Option<HabitFrequency>,
    /// New target count.
    #[validate(range(min = 1, message = "target_count must be at least 1"))]
    pub target_count: Option<i32>,
    /// New difficulty.
    pub difficulty: Option<HabitDifficulty>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New icon.
    pub icon: Option<String>,
    /// New color.
    pub color: Option<String>,
}

/// Complete-habit request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CompleteHabitRequest {
    /// Storage path of a previously uploaded proof image.
    pub proof_image_path: Option<String>,
    /// Free-form notes.
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    /// Mood rating at completion time, 1 through 5.
    #[validate(range(min = 1, max = 5, message = "mood_rating must be between 1 and 5"))]
    pub mood_rating: Option<i32>,
}

/// Create challenge request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateChallengeRequest {
    /// Challenge title.
    #[validate(length(min = 1, max = 120, message = "Title is required"))]
    pub title: String,
    /// Challenge description.
    #[validate(length(min = 1, max = 2000, message = "Description is required"))]
    pub description: String,
    /// Start date.
    pub start_date: DateTime<Utc>,
    /// End date.
    pub end_date: DateTime<Utc>,
    /// Optional participant capacity.
    #[validate(range(min = 1, message = "max_participants must be at least 1"))]
    pub max_participants: Option<i32>,
}

/// Mood submission request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitMoodRequest {
    /// Mood rating, 1 through 5.
    #[validate(range(min = 1, max = 5, message = "mood_rating must be between 1 and 5"))]
    pub mood_rating: i32,
    /// Optional free-form reflection.
    #[validate(length(max = 2000))]
    pub reflection: Option<String>,
}

/// Goal analysis request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeGoalRequest {
    /// Free-text goal.
    #[validate(length(min = 1, max = 500, message = "Goal text is required"))]
    pub goal: String,
}
