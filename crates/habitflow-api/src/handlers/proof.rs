//! Proof image upload, gallery, and serving handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use habitflow_core::error::AppError;
use habitflow_entity::completion::HabitCompletion;

use crate::dto::response::{ApiResponse, PaginatedResponse, ProofUploadResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/proofs (multipart, field name "file")
pub async fn upload_proof(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ProofUploadResponse>>), ApiError> {
    let mut file_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
            file_bytes = Some(data);
            break;
        }
    }

    let data = file_bytes.ok_or_else(|| AppError::validation("Missing 'file' field"))?;
    let stored = state.habit_service.upload_proof(auth.context(), data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ProofUploadResponse {
            path: stored.path,
            url: stored.url,
            content_type: stored.content_type,
            size_bytes: stored.size_bytes,
        })),
    ))
}

/// GET /api/proofs/gallery
pub async fn proof_gallery(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<HabitCompletion>>>, ApiError> {
    let page = state
        .habit_service
        .list_proofs(auth.context(), params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.into())))
}

/// GET /api/proofs/{*path} — streams the image back, owner-scoped.
pub async fn serve_proof(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let (stream, content_type) = state
        .habit_service
        .open_proof(auth.context(), path.trim_start_matches('/'))
        .await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Failed to build response: {e}")))?;
    Ok(response)
}
