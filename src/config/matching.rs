//! Matching configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Persona matching configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Penalty subtracted per prior selection of a persona
    #[serde(default = "default_diversity_boost")]
    pub diversity_boost: f64,
}

impl MatchingConfig {
    /// Validate matching configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.diversity_boost.is_finite() || self.diversity_boost < 0.0 {
            return Err(ValidationError::InvalidDiversityBoost(self.diversity_boost));
        }
        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            diversity_boost: default_diversity_boost(),
        }
    }
}

fn default_diversity_boost() -> f64 {
    0.2
}
