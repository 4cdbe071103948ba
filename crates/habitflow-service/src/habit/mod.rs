//! Habit CRUD and completion flows.

pub mod service;

pub use service::HabitService;
