//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use habitflow_core::error::{AppError, ErrorKind};
use habitflow_core::result::AppResult;
use habitflow_entity::user::{CreateUser, UpdateProfile, User};

/// Repository for user CRUD and lookup operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, username, full_name, is_cse_student, \
                                year_of_study, verification_token) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.username)
        .bind(&data.full_name)
        .bind(data.is_cse_student)
        .bind(data.year_of_study)
        .bind(&data.verification_token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email is already registered")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict(format!("Username '{}' is already taken", data.username))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_year_of_study_check") =>
            {
                AppError::validation("year_of_study must be between 1 and 4")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Update a user's profile fields. `None` fields are left unchanged.
    pub async fn update_profile(&self, user_id: Uuid, data: &UpdateProfile) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = COALESCE($2, username), \
                              full_name = COALESCE($3, full_name), \
                              avatar_url = COALESCE($4, avatar_url), \
                              is_cse_student = COALESCE($5, is_cse_student), \
                              year_of_study = COALESCE($6, year_of_study), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(&data.username)
        .bind(&data.full_name)
        .bind(&data.avatar_url)
        .bind(data.is_cse_student)
        .bind(data.year_of_study)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict("Username is already taken")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_year_of_study_check") =>
            {
                AppError::validation("year_of_study must be between 1 and 4")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update profile", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Store a fresh email-verification token.
    pub async fn set_verification_token(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        sqlx::query("UPDATE users SET verification_token = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set verification token", e)
            })?;
        Ok(())
    }

    /// Consume a verification token: marks the matching user verified
    /// and clears the token. Returns the verified user.
    pub async fn verify_email(&self, token: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email_verified = TRUE, verification_token = NULL, updated_at = NOW() \
             WHERE verification_token = $1 RETURNING *",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to verify email", e))
    }
}
