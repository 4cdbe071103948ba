//! Challenge and participation entities.

pub mod model;
pub mod participant;

pub use model::{Challenge, CreateChallenge};
pub use participant::{ChallengeParticipant, ParticipantWithProfile};
