//! Streaks and dashboard analytics.

pub mod service;
pub mod streak;

pub use service::AnalyticsService;
pub use streak::{StreakSummary, compute_streaks};
