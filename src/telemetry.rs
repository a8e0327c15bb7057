//! Tracing setup for a hosting shell.
//!
//! Library code only emits `tracing` events. Installing a subscriber is the
//! host's call, made once at startup:
//!
//! ```no_run
//! use agri_coach::config::AppConfig;
//! use agri_coach::telemetry;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! telemetry::init_tracing(&config.logging).expect("Failed to install tracing");
//! ```

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Tracing already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Installs the global subscriber. Output goes to stderr.
///
/// # Errors
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}
