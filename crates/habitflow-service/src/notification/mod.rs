//! Stored notification feed.

pub mod service;

pub use service::NotificationService;
