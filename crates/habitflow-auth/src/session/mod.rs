//! Session lifecycle management: register, login, refresh, logout.

pub mod manager;

pub use manager::{LoginResult, SessionManager};
