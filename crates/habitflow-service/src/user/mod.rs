//! User profile management.

pub mod service;

pub use service::UserService;
