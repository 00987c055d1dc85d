//! Tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use persona_quiz::config::TelemetryConfig;
//! use persona_quiz::telemetry::init_tracing;
//!
//! init_tracing(&TelemetryConfig::default()).unwrap();
//! ```

use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::TelemetryConfig;

/// The global subscriber could not be installed.
#[derive(Debug, Error)]
#[error("Failed to init tracing: {0}")]
pub struct TelemetryError(String);

/// Install the global tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays machine readable.
/// `RUST_LOG` overrides the configured filter.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| TelemetryError(e.to_string()))
}
