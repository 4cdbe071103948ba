//! # habitflow-database
//!
//! PostgreSQL connection pool management, embedded migrations, and one
//! repository per entity. All queries are explicitly scoped to the
//! owning user except where the data model is deliberately shared
//! (active challenges and their participant lists).

pub mod connection;
pub mod migration;
pub mod repositories;
