//! Group challenges and participation.

pub mod service;

pub use service::ChallengeService;
