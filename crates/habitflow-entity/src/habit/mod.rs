//! Habit entity and enums.

pub mod difficulty;
pub mod frequency;
pub mod model;

pub use difficulty::HabitDifficulty;
pub use frequency::HabitFrequency;
pub use model::{CreateHabit, Habit, UpdateHabit};
