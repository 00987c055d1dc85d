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
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid data fetch timeout")]
    InvalidTimeout,

    #[error("Diversity boost must be a finite value >= 0, got {0}")]
    InvalidDiversityBoost(f64),

    #[error("Tuning {0} must be at least 1")]
    ZeroTuningCount(&'static str),

    #[error("Tuning {0} must be a finite value > 0")]
    NonPositiveTuningValue(&'static str),
}
