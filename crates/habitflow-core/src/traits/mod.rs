//! Trait seams between HabitFlow crates.

pub mod storage;
pub mod suggestions;

pub use storage::StorageProvider;
pub use suggestions::SuggestionProvider;
