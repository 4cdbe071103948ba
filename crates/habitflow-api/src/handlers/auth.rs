//! Auth handlers: register, login, logout, refresh, verification, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;
use validator::Validate;

use habitflow_auth::session::manager::{LoginResult, RegisterRequest as RegisterInput};
use habitflow_core::error::AppError;

use crate::dto::request::{
    LoginRequest, RefreshRequest, RegisterRequest, ResendVerificationRequest, VerifyEmailRequest,
};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

fn login_response(result: LoginResult) -> LoginResponse {
    LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        access_expires_at: result.tokens.access_expires_at,
        refresh_expires_at: result.tokens.refresh_expires_at,
        user: result.user.into(),
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .session_manager
        .register(RegisterInput {
            email: req.email,
            password: req.password,
            username: req.username,
            full_name: req.full_name,
            is_cse_student: req.is_cse_student,
            year_of_study: req.year_of_study,
        })
        .await?;

    // No mailer is wired up; the token is logged for manual delivery.
    if let Some(token) = &user.verification_token {
        info!(user_id = %user.id, token, "Verification token issued");
    }

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.session_manager.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(login_response(result))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.logout(auth.session_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Logged out successfully",
    ))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let result = state.session_manager.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok(login_response(result))))
}

/// POST /api/auth/verify-email
pub async fn verify_email(
    State(state): State<AppState>,
    Json(req): Json<VerifyEmailRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.session_manager.verify_email(&req.token).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/auth/resend-verification
pub async fn resend_verification(
    State(state): State<AppState>,
    Json(req): Json<ResendVerificationRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if let Some(token) = state.session_manager.resend_verification(&req.email).await? {
        info!(email = %req.email, token, "Verification token reissued");
    }

    // Uniform response so the endpoint does not reveal which emails exist.
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "If the address is registered and unverified, a new token has been issued",
    ))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_profile(auth.context()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
