//! Mood journal handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use validator::Validate;

use habitflow_core::error::AppError;
use habitflow_entity::mood::{MoodEntry, SubmitMood};

use crate::dto::request::SubmitMoodRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Query parameters for mood history.
#[derive(Debug, Deserialize)]
pub struct MoodHistoryParams {
    /// Maximum entries to return (default 30).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    30
}

/// POST /api/moods
pub async fn submit_mood(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitMoodRequest>,
) -> Result<Json<ApiResponse<MoodEntry>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let entry = state
        .mood_service
        .submit(
            auth.context(),
            SubmitMood {
                mood_rating: req.mood_rating,
                reflection: req.reflection,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(entry)))
}

/// GET /api/moods/today
pub async fn today_mood(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Option<MoodEntry>>>, ApiError> {
    let entry = state.mood_service.today(auth.context()).await?;
    Ok(Json(ApiResponse::ok(entry)))
}

/// GET /api/moods
pub async fn mood_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<MoodHistoryParams>,
) -> Result<Json<ApiResponse<Vec<MoodEntry>>>, ApiError> {
    let entries = state
        .mood_service
        .history(auth.context(), params.limit)
        .await?;
    Ok(Json(ApiResponse::ok(entries)))
}
