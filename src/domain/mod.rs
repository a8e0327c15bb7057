//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `survey` - Question vocabularies, answers, step validation and the wizard
//! - `recommendation` - Recommendation records and the result text parser
//! - `submission` - Submission lifecycle state and failures

pub mod foundation;
pub mod recommendation;
pub mod submission;
pub mod survey;
