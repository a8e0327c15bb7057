//! Scoring Service Port - the remote service that scores answers and
//! produces recommendation text.
//!
//! The core needs exactly two operations, always called in this order for a
//! submission attempt:
//!
//! 1. [`ScoringService::submit_answers`] - send the finalized answers.
//! 2. [`ScoringService::fetch_result_text`] - read the raw result payload.
//!
//! The result payload is only promised to be text; decoding it is the
//! job of `ResponseParser`.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedService;
//!
//! #[async_trait]
//! impl ScoringService for CannedService {
//!     async fn submit_answers(&self, _answers: &Answers) -> Result<(), ScoringServiceError> {
//!         Ok(())
//!     }
//!
//!     async fn fetch_result_text(&self) -> Result<String, ScoringServiceError> {
//!         Ok("[]".to_string())
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::survey::Answers;

/// Port for the remote scoring service.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Sends the answers and asks the service to run its model.
    async fn submit_answers(&self, answers: &Answers) -> Result<(), ScoringServiceError>;

    /// Fetches the raw result text of the latest scoring run.
    async fn fetch_result_text(&self) -> Result<String, ScoringServiceError>;
}

/// Failures of the scoring service.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringServiceError {
    /// Non-success HTTP status.
    #[error("{endpoint} failed: {status}")]
    Http {
        /// Method and path, e.g. `POST /recommendations`.
        endpoint: String,
        status: u16,
    },

    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Body could not be read or was not what the endpoint promises.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ScoringServiceError {
    /// Creates an HTTP status error.
    pub fn http(endpoint: impl Into<String>, status: u16) -> Self {
        ScoringServiceError::Http {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        ScoringServiceError::Network(message.into())
    }
}
