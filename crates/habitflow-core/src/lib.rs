//! # habitflow-core
//!
//! Core crate for HabitFlow. Contains traits, configuration schemas,
//! pagination and date-window types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other HabitFlow crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
