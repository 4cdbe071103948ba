//! `AuthUser` extractor: pulls the JWT from the Authorization header,
//! validates it against the session row, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use habitflow_core::error::AppError;
use habitflow_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        // Validates signature, expiry, and that the session is live.
        let (user, claims) = state.session_manager.authenticate(token).await?;

        Ok(AuthUser(RequestContext::new(
            user.id,
            claims.session_id(),
            user.username,
        )))
    }
}
