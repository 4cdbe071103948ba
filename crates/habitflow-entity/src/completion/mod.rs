//! Habit completion entity.

pub mod model;

pub use model::{HabitCompletion, NewCompletion};
