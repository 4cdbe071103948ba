//! Habit templates and goal suggestions.

pub mod catalog;
pub mod service;

pub use catalog::StaticCatalogProvider;
pub use service::SuggestionService;
