//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScoringService` - submits answers and fetches raw recommendation text

mod scoring_service;

pub use scoring_service::{ScoringService, ScoringServiceError};
