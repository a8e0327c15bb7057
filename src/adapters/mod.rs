//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `scoring` - Scoring service implementations (HTTP, mock)

pub mod scoring;

pub use scoring::{HttpScoringConfig, HttpScoringService, MockScoringService};
