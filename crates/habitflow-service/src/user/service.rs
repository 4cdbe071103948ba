//! Profile lookup and update operations.

use std::sync::Arc;

use tracing::info;

use habitflow_core::error::AppError;
use habitflow_database::repositories::user::UserRepository;
use habitflow_entity::user::{UpdateProfile, User};

use crate::context::RequestContext;

/// Manages the authenticated user's own profile.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Gets the current user's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateProfile,
    ) -> Result<User, AppError> {
        let user = self.user_repo.update_profile(ctx.user_id, &data).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}
