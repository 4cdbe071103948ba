//! # habitflow-storage
//!
//! Proof image storage for the HabitFlow platform.
//!
//! ## Modules
//!
//! - `local` — local filesystem implementation of `StorageProvider`
//! - `proof` — proof image validation, keying, and public URLs

pub mod local;
pub mod proof;

pub use local::LocalStorageProvider;
pub use proof::{ProofStore, StoredProof};
