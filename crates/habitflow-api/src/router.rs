//! Route definitions for the HabitFlow HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(habit_routes())
        .merge(challenge_routes())
        .merge(mood_routes())
        .merge(notification_routes())
        .merge(template_routes())
        .merge(analytics_routes())
        .merge(proof_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, logout, refresh, verification, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/verify-email", post(handlers::auth::verify_email))
        .route(
            "/auth/resend-verification",
            post(handlers::auth::resend_verification),
        )
        .route("/auth/me", get(handlers::auth::me))
}

/// Profile self-service endpoints
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::profile::get_profile))
        .route("/profile", put(handlers::profile::update_profile))
}

/// Habit CRUD and completions
fn habit_routes() -> Router<AppState> {
    Router::new()
        .route("/habits", get(handlers::habit::list_habits))
        .route("/habits", post(handlers::habit::create_habit))
        .route("/habits/{id}", get(handlers::habit::get_habit))
        .route("/habits/{id}", put(handlers::habit::update_habit))
        .route("/habits/{id}", delete(handlers::habit::delete_habit))
        .route(
            "/habits/{id}/complete",
            post(handlers::habit::complete_habit),
        )
        .route(
            "/habits/{id}/completions",
            get(handlers::habit::list_completions),
        )
        .route("/completions", get(handlers::habit::recent_completions))
}

/// Challenges and participation
fn challenge_routes() -> Router<AppState> {
    Router::new()
        .route("/challenges", get(handlers::challenge::list_challenges))
        .route("/challenges", post(handlers::challenge::create_challenge))
        .route("/challenges/joined", get(handlers::challenge::list_joined))
        .route("/challenges/{id}", get(handlers::challenge::get_challenge))
        .route(
            "/challenges/{id}/join",
            post(handlers::challenge::join_challenge),
        )
        .route(
            "/challenges/{id}/leave",
            delete(handlers::challenge::leave_challenge),
        )
        .route(
            "/challenges/{id}/participants",
            get(handlers::challenge::list_participants),
        )
}

/// Mood journal
fn mood_routes() -> Router<AppState> {
    Router::new()
        .route("/moods", post(handlers::mood::submit_mood))
        .route("/moods", get(handlers::mood::mood_history))
        .route("/moods/today", get(handlers::mood::today_mood))
}

/// Notification feed
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Template catalog and goal suggestions
fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(handlers::template::list_templates))
        .route(
            "/templates/{id}/apply",
            post(handlers::template::apply_template),
        )
        .route(
            "/suggestions/analyze",
            post(handlers::template::analyze_goal),
        )
}

/// Analytics and dashboard
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/dashboard", get(handlers::analytics::dashboard))
        .route(
            "/analytics/habits/{id}/streak",
            get(handlers::analytics::habit_streak),
        )
}

/// Proof image upload, gallery, and serving
fn proof_routes() -> Router<AppState> {
    Router::new()
        .route("/proofs", post(handlers::proof::upload_proof))
        .route("/proofs/gallery", get(handlers::proof::proof_gallery))
        .route("/proofs/{*path}", get(handlers::proof::serve_proof))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
