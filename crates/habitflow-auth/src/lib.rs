//! # habitflow-auth
//!
//! Authentication for the HabitFlow platform.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation, validation, and claims
//! - `password` — Argon2id password hashing and policy enforcement
//! - `session` — Session lifecycle (register, login, refresh, logout)
//! - `verification` — Email verification token handling

pub mod jwt;
pub mod password;
pub mod session;
pub mod verification;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::SessionManager;
pub use verification::generate_verification_token;
