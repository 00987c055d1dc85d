//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PERSONA_QUIZ` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use persona_quiz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading quiz data from {}", config.data.dir.display());
//! ```

mod data;
mod error;
mod matching;
mod telemetry;
mod tuning;

pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use matching::MatchingConfig;
pub use telemetry::TelemetryConfig;
pub use tuning::TuningConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Quiz data file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Persona matching parameters
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Weight optimizer parameters
    #[serde(default)]
    pub tuning: TuningConfig,

    /// Logging setup
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PERSONA_QUIZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PERSONA_QUIZ__DATA__DIR=./data` -> `data.dir = ./data`
    /// - `PERSONA_QUIZ__MATCHING__DIVERSITY_BOOST=0.3` -> `matching.diversity_boost = 0.3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PERSONA_QUIZ")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.data.validate()?;
        self.matching.validate()?;
        self.tuning.validate()?;
        Ok(())
    }
}
