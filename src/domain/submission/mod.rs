//! Submission module - lifecycle of sending answers and receiving records.

mod failure;
mod state;
mod status;

pub use failure::{SubmissionFailure, UNINTERPRETABLE_MESSAGE};
pub use state::SubmissionState;
pub use status::SubmissionStatus;
