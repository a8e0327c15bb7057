//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Scoring base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Scoring timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
