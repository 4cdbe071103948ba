//! Shared value types used across HabitFlow crates.

pub mod day_window;
pub mod pagination;
