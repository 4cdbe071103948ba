//! User profile entity.

pub mod model;

pub use model::{CreateUser, UpdateProfile, User};
