//! Repository implementations, one per entity.

pub mod challenge;
pub mod completion;
pub mod habit;
pub mod mood;
pub mod notification;
pub mod session;
pub mod user;
