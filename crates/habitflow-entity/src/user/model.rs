//! User entity model.
//!
//! HabitFlow profiles are 1:1 with the authentication identity, so user
//! and profile live in a single row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered HabitFlow user with their profile data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address used for login.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Unique public handle.
    pub username: String,
    /// Full display name.
    pub full_name: String,
    /// Avatar image URL (optional).
    pub avatar_url: Option<String>,
    /// Whether the user is a CSE student.
    pub is_cse_student: bool,
    /// Year of study, 1 through 4 (optional for non-students).
    pub year_of_study: Option<i32>,
    /// Whether the email address has been confirmed.
    pub email_verified: bool,
    /// Pending email-verification token, if any.
    #[serde(skip_serializing)]
    pub verification_token: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether the user may log in (email confirmed, unless
    /// verification is disabled deployment-wide).
    pub fn can_login(&self, require_verification: bool) -> bool {
        !require_verification || self.email_verified
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Desired username.
    pub username: String,
    /// Full display name.
    pub full_name: String,
    /// Whether the user is a CSE student.
    pub is_cse_student: bool,
    /// Year of study (1..4), if a student.
    pub year_of_study: Option<i32>,
    /// Email-verification token to store alongside the new row.
    pub verification_token: String,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New username.
    pub username: Option<String>,
    /// New full name.
    pub full_name: Option<String>,
    /// New avatar URL.
    pub avatar_url: Option<String>,
    /// New CSE-student flag.
    pub is_cse_student: Option<bool>,
    /// New year of study.
    pub year_of_study: Option<i32>,
}
