//! # habitflow-service
//!
//! Business logic for the HabitFlow platform. Services orchestrate
//! repositories, storage, and auth; HTTP concerns stay in the api crate.
//!
//! ## Modules
//!
//! - `context` — per-request identity injected into every service call
//! - `user` — profile management
//! - `habit` — habit CRUD and completion flows
//! - `challenge` — group challenges and participation
//! - `mood` — daily mood journal
//! - `notification` — stored notification feed
//! - `suggestion` — habit templates and goal-based suggestions
//! - `analytics` — streaks and the dashboard summary

pub mod analytics;
pub mod challenge;
pub mod context;
pub mod habit;
pub mod mood;
pub mod notification;
pub mod suggestion;
pub mod user;

pub use context::RequestContext;
