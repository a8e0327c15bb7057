//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod submit_answers;

pub use submit_answers::{
    SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult, ABANDONED_MESSAGE,
};
