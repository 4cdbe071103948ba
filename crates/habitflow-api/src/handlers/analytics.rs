//! Analytics and dashboard handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use habitflow_service::analytics::service::Dashboard;
use habitflow_service::analytics::streak::StreakSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/analytics/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Dashboard>>, ApiError> {
    let dashboard = state.analytics_service.dashboard(auth.context()).await?;
    Ok(Json(ApiResponse::ok(dashboard)))
}

/// GET /api/analytics/habits/{id}/streak
pub async fn habit_streak(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StreakSummary>>, ApiError> {
    let streak = state
        .analytics_service
        .habit_streak(auth.context(), id)
        .await?;
    Ok(Json(ApiResponse::ok(streak)))
}
