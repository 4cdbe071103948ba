//! Mood journal entity.

pub mod model;

pub use model::{MoodEntry, SubmitMood};
