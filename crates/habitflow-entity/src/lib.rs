//! # habitflow-entity
//!
//! Domain entity models for HabitFlow. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod challenge;
pub mod completion;
pub mod habit;
pub mod mood;
pub mod notification;
pub mod session;
pub mod user;
