//! Template catalog and goal suggestion handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use habitflow_core::error::AppError;
use habitflow_entity::habit::Habit;
use habitflow_service::suggestion::catalog::HabitTemplate;

use crate::dto::request::AnalyzeGoalRequest;
use crate::dto::response::{AnalyzeGoalResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/templates
pub async fn list_templates(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Json<ApiResponse<Vec<HabitTemplate>>> {
    Json(ApiResponse::ok(state.suggestion_service.list_templates()))
}

/// POST /api/templates/{id}/apply
pub async fn apply_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Habit>>>), ApiError> {
    let habits = state
        .suggestion_service
        .apply_template(auth.context(), &id)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(habits))))
}

/// POST /api/suggestions/analyze
pub async fn analyze_goal(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<AnalyzeGoalRequest>,
) -> Result<Json<ApiResponse<AnalyzeGoalResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (provider, suggestions) = state.suggestion_service.analyze_goal(&req.goal);
    Ok(Json(ApiResponse::ok(AnalyzeGoalResponse {
        provider,
        suggestions,
    })))
}
