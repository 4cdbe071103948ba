//! Habit CRUD and completion handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use habitflow_core::error::AppError;
use habitflow_entity::completion::{HabitCompletion, NewCompletion};
use habitflow_entity::habit::{CreateHabit, Habit, UpdateHabit};

use crate::dto::request::{CompleteHabitRequest, CreateHabitRequest, UpdateHabitRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Query parameters for habit listing.
///
/// Pagination fields are repeated here rather than flattened in:
/// `serde_urlencoded` cannot deserialize flattened numeric fields.
#[derive(Debug, Default, Deserialize)]
pub struct HabitListParams {
    /// When true, archived habits are excluded.
    #[serde(default)]
    pub active_only: bool,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub per_page: Option<u64>,
}

impl HabitListParams {
    fn pagination(&self) -> PaginationParams {
        let defaults = PaginationParams::default();
        PaginationParams {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
        }
    }
}

/// GET /api/habits
pub async fn list_habits(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<HabitListParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Habit>>>, ApiError> {
    let page = state
        .habit_service
        .list_habits(
            auth.context(),
            params.active_only,
            params.pagination().into_page_request(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(page.into())))
}

/// POST /api/habits
pub async fn create_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Habit>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let habit = state
        .habit_service
        .create_habit(
            auth.context(),
            CreateHabit {
                title: req.title,
                category: req.category,
                frequency: req.frequency,
                target_count: req.target_count,
                difficulty: req.difficulty,
                icon: req.icon,
                color: req.color,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(habit))))
}

/// GET /api/habits/{id}
pub async fn get_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Habit>>, ApiError> {
    let habit = state.habit_service.get_habit(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(habit)))
}

/// PUT /api/habits/{id}
pub async fn update_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateHabitRequest>,
) -> Result<Json<ApiResponse<Habit>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let habit = state
        .habit_service
        .update_habit(
            auth.context(),
            id,
            UpdateHabit {
                title: req.title,
                category: req.category,
                frequency: req.frequency,
                target_count: req.target_count,
                difficulty: req.difficulty,
                is_active: req.is_active,
                icon: req.icon,
                color: req.color,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(habit)))
}

/// DELETE /api/habits/{id}
pub async fn delete_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.habit_service.delete_habit(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Habit deleted"))))
}

/// POST /api/habits/{id}/complete
pub async fn complete_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CompleteHabitRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HabitCompletion>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let completion = state
        .habit_service
        .complete_habit(
            auth.context(),
            id,
            NewCompletion {
                proof_image_path: req.proof_image_path,
                notes: req.notes,
                mood_rating: req.mood_rating,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(completion))))
}

/// Query parameters for the cross-habit completion history.
#[derive(Debug, Deserialize)]
pub struct CompletionHistoryParams {
    /// How many days of history to return. Defaults to 30, capped at 365.
    pub days: Option<i64>,
}

/// GET /api/completions
pub async fn recent_completions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<CompletionHistoryParams>,
) -> Result<Json<ApiResponse<Vec<HabitCompletion>>>, ApiError> {
    let days = params.days.unwrap_or(30).clamp(1, 365);
    let since = chrono::Utc::now() - chrono::Duration::days(days);
    let completions = state
        .habit_service
        .list_recent_completions(auth.context(), since)
        .await?;
    Ok(Json(ApiResponse::ok(completions)))
}

/// GET /api/habits/{id}/completions
pub async fn list_completions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<HabitCompletion>>>, ApiError> {
    let page = state
        .habit_service
        .list_completions(auth.context(), id, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.into())))
}
