//! Challenge and participation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use habitflow_core::error::AppError;
use habitflow_entity::challenge::{
    Challenge, ChallengeParticipant, CreateChallenge, ParticipantWithProfile,
};

use crate::dto::request::CreateChallengeRequest;
use crate::dto::response::{ApiResponse, MessageResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/challenges
pub async fn list_challenges(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Challenge>>>, ApiError> {
    let page = state
        .challenge_service
        .list_active(auth.context(), params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.into())))
}

/// POST /api/challenges
pub async fn create_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateChallengeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Challenge>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let challenge = state
        .challenge_service
        .create_challenge(
            auth.context(),
            CreateChallenge {
                title: req.title,
                description: req.description,
                start_date: req.start_date,
                end_date: req.end_date,
                max_participants: req.max_participants,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(challenge))))
}

/// GET /api/challenges/{id}
pub async fn get_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Challenge>>, ApiError> {
    let challenge = state
        .challenge_service
        .get_challenge(auth.context(), id)
        .await?;
    Ok(Json(ApiResponse::ok(challenge)))
}

/// POST /api/challenges/{id}/join
pub async fn join_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<ChallengeParticipant>>), ApiError> {
    let participant = state.challenge_service.join(auth.context(), id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(participant))))
}

/// DELETE /api/challenges/{id}/leave
pub async fn leave_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.challenge_service.leave(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Left challenge"))))
}

/// GET /api/challenges/{id}/participants
pub async fn list_participants(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ParticipantWithProfile>>>, ApiError> {
    let participants = state
        .challenge_service
        .list_participants(auth.context(), id)
        .await?;
    Ok(Json(ApiResponse::ok(participants)))
}

/// GET /api/challenges/joined
pub async fn list_joined(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Challenge>>>, ApiError> {
    let challenges = state.challenge_service.list_joined(auth.context()).await?;
    Ok(Json(ApiResponse::ok(challenges)))
}
