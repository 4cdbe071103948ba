//! Notification entity.

pub mod model;

pub use model::{NewNotification, Notification};
