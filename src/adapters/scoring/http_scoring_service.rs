//! HTTP Scoring Service - `ScoringService` over the recommendation backend's
//! REST API.
//!
//! # Endpoints
//!
//! - `POST {base_url}/recommendations` - JSON answers body; the JSON reply is
//!   only checked to be JSON.
//! - `GET {base_url}/matches` - raw result text, passed through untouched.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpScoringConfig::new("https://scoring.example.com")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let service = HttpScoringService::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::domain::survey::Answers;
use crate::ports::{ScoringService, ScoringServiceError};

const SUBMIT_ENDPOINT: &str = "POST /recommendations";
const FETCH_ENDPOINT: &str = "GET /matches";

/// Configuration for the HTTP scoring service.
#[derive(Debug, Clone)]
pub struct HttpScoringConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpScoringConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(180),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ScoringConfig> for HttpScoringConfig {
    fn from(config: &ScoringConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Scoring service reached over HTTP.
pub struct HttpScoringService {
    config: HttpScoringConfig,
    client: Client,
}

impl HttpScoringService {
    /// Creates a service with its own HTTP client.
    pub fn new(config: HttpScoringConfig) -> Result<Self, ScoringServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScoringServiceError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn recommendations_url(&self) -> String {
        format!("{}/recommendations", self.config.base_url)
    }

    fn matches_url(&self) -> String {
        format!("{}/matches", self.config.base_url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ScoringServiceError {
        if e.is_timeout() {
            ScoringServiceError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ScoringServiceError::network(format!("Connection failed: {}", e))
        } else {
            ScoringServiceError::network(e.to_string())
        }
    }

    /// Turns a non-success status into an error carrying the endpoint name.
    fn check_status(endpoint: &str, response: Response) -> Result<Response, ScoringServiceError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!(endpoint, status = status.as_u16(), "Scoring service returned error status");
            Err(ScoringServiceError::http(endpoint, status.as_u16()))
        }
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn submit_answers(&self, answers: &Answers) -> Result<(), ScoringServiceError> {
        debug!(url = %self.recommendations_url(), "Submitting answers");

        let response = self
            .client
            .post(self.recommendations_url())
            .json(answers)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(SUBMIT_ENDPOINT, response)?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ScoringServiceError::InvalidResponse(e.to_string()))?;

        Ok(())
    }

    async fn fetch_result_text(&self) -> Result<String, ScoringServiceError> {
        debug!(url = %self.matches_url(), "Fetching result text");

        let response = self
            .client
            .get(self.matches_url())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(FETCH_ENDPOINT, response)?;

        response
            .text()
            .await
            .map_err(|e| ScoringServiceError::InvalidResponse(e.to_string()))
    }
}
