//! Notification feed handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use habitflow_entity::notification::Notification;

use crate::dto::response::{ApiResponse, MessageResponse, PaginatedResponse, UnreadCountResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Notification>>>, ApiError> {
    let page = state
        .notification_service
        .list(auth.context(), params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.into())))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UnreadCountResponse>>, ApiError> {
    let unread = state.notification_service.unread_count(auth.context()).await?;
    Ok(Json(ApiResponse::ok(UnreadCountResponse { unread })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .notification_service
        .mark_read(auth.context(), id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Notification marked read",
    ))))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let changed = state
        .notification_service
        .mark_all_read(auth.context())
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "{changed} notifications marked read"
    )))))
}
