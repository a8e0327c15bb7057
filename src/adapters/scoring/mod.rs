//! Scoring service adapters.
//!
//! - `HttpScoringService` - the recommendation backend over HTTP
//! - `MockScoringService` - scriptable stand-in for tests

mod http_scoring_service;
mod mock_scoring_service;

pub use http_scoring_service::{HttpScoringConfig, HttpScoringService};
pub use mock_scoring_service::MockScoringService;
