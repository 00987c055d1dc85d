//! Weight optimizer configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::tuning::TuningParams;

/// Weight optimizer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TuningConfig {
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    #[serde(default = "default_steps_per_walk")]
    pub steps_per_walk: usize,

    #[serde(default = "default_diversity_boost")]
    pub diversity_boost: f64,

    #[serde(default = "default_step_size")]
    pub step_size: f64,

    #[serde(default = "default_min_weight")]
    pub min_weight: f64,

    /// Seed for reproducible runs; entropy-seeded when unset
    pub seed: Option<u64>,
}

impl TuningConfig {
    /// Optimizer parameters for this configuration
    pub fn params(&self) -> TuningParams {
        TuningParams {
            iterations: self.iterations,
            steps_per_walk: self.steps_per_walk,
            diversity_boost: self.diversity_boost,
            step_size: self.step_size,
            min_weight: self.min_weight,
            ..TuningParams::default()
        }
    }

    /// Validate tuning configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.iterations == 0 {
            return Err(ValidationError::ZeroTuningCount("iterations"));
        }
        if self.steps_per_walk == 0 {
            return Err(ValidationError::ZeroTuningCount("steps_per_walk"));
        }
        if !self.diversity_boost.is_finite() || self.diversity_boost < 0.0 {
            return Err(ValidationError::InvalidDiversityBoost(self.diversity_boost));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ValidationError::NonPositiveTuningValue("step_size"));
        }
        if !self.min_weight.is_finite() || self.min_weight <= 0.0 {
            return Err(ValidationError::NonPositiveTuningValue("min_weight"));
        }
        Ok(())
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            steps_per_walk: default_steps_per_walk(),
            diversity_boost: default_diversity_boost(),
            step_size: default_step_size(),
            min_weight: default_min_weight(),
            seed: None,
        }
    }
}

fn default_iterations() -> usize {
    1000
}

fn default_steps_per_walk() -> usize {
    10
}

fn default_diversity_boost() -> f64 {
    0.2
}

fn default_step_size() -> f64 {
    0.1
}

fn default_min_weight() -> f64 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_optimizer_defaults() {
        assert_eq!(TuningConfig::default().params(), TuningParams::default());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = TuningConfig {
            iterations: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::ZeroTuningCount("iterations"))
        );
    }

    #[test]
    fn test_non_positive_min_weight_rejected() {
        let config = TuningConfig {
            min_weight: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
