//! Scoring service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where the scoring backend lives and how long a request may take.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Base URL of the scoring backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ScoringConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://unityhackathonbackend.onrender.com".to_string()
}

fn default_timeout() -> u64 {
    180
}
