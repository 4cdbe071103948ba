//! End-to-end API tests against a live test database.
//!
//! Requires a reachable PostgreSQL instance (see config/test.toml).
//! Tests skip themselves when the database is unavailable.

mod helpers;

mod auth_test;
mod challenge_test;
mod habit_test;
mod mood_test;
mod template_test;
