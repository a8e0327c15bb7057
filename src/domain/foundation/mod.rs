//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the state machine trait and error types
//! used across the survey, recommendation and submission modules.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SubmissionId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
