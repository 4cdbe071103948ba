//! HTTP request handlers, grouped by domain.

pub mod analytics;
pub mod auth;
pub mod challenge;
pub mod habit;
pub mod health;
pub mod mood;
pub mod notification;
pub mod profile;
pub mod proof;
pub mod template;
