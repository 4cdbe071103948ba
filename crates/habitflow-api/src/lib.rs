//! # habitflow-api
//!
//! HTTP API layer for HabitFlow built on Axum.
//!
//! Provides all REST endpoints, middleware (auth, CORS, logging),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
