//! Profile self-service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use habitflow_core::error::AppError;
use habitflow_entity::user::UpdateProfile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_profile(auth.context()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .update_profile(
            auth.context(),
            UpdateProfile {
                username: req.username,
                full_name: req.full_name,
                avatar_url: req.avatar_url,
                is_cse_student: req.is_cse_student,
                year_of_study: req.year_of_study,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
