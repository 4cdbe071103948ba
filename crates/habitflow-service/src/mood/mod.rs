//! Daily mood journal.

pub mod service;

pub use service::MoodService;
