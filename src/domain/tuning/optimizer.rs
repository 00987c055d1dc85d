//! Weight optimizer - hill-climbs trait weights toward diverse outcomes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{diversity_score, random_walk, TuningError};
use crate::domain::foundation::{TraitName, TraitWeights};
use crate::domain::persona::PersonaRoster;
use crate::domain::quiz::{QuestionBank, RatingTable};

/// Knobs for [`optimize_weights`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningParams {
    /// Number of perturb-and-evaluate rounds.
    pub iterations: usize,
    /// Simulated quizzes per round.
    pub steps_per_walk: usize,
    /// Diversity boost used inside each walk.
    pub diversity_boost: f64,
    /// Each weight moves by at most this much per round.
    pub step_size: f64,
    /// Perturbed weights are clamped up to this floor.
    pub min_weight: f64,
    /// Starting weights are drawn uniformly from `[low, high)`.
    pub initial_low: f64,
    pub initial_high: f64,
}

impl Default for TuningParams {
    fn default() -> Self {
        Self {
            iterations: 1000,
            steps_per_walk: 10,
            diversity_boost: 0.2,
            step_size: 0.1,
            min_weight: 0.1,
            initial_low: 0.5,
            initial_high: 1.5,
        }
    }
}

impl TuningParams {
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.iterations == 0 {
            return Err(TuningError::invalid_parameter("iterations", "must be at least 1"));
        }
        if self.steps_per_walk == 0 {
            return Err(TuningError::invalid_parameter(
                "steps_per_walk",
                "must be at least 1",
            ));
        }
        if !self.diversity_boost.is_finite() || self.diversity_boost < 0.0 {
            return Err(TuningError::invalid_parameter(
                "diversity_boost",
                format!("must be a finite value >= 0, got {}", self.diversity_boost),
            ));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(TuningError::invalid_parameter(
                "step_size",
                format!("must be > 0, got {}", self.step_size),
            ));
        }
        if !self.min_weight.is_finite() || self.min_weight <= 0.0 {
            return Err(TuningError::invalid_parameter(
                "min_weight",
                format!("must be > 0, got {}", self.min_weight),
            ));
        }
        if !(self.initial_low > 0.0 && self.initial_low < self.initial_high)
            || !self.initial_high.is_finite()
        {
            return Err(TuningError::invalid_parameter(
                "initial_range",
                format!(
                    "need 0 < low < high, got [{}, {})",
                    self.initial_low, self.initial_high
                ),
            ));
        }
        Ok(())
    }
}

/// Best weights found and the diversity score they reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedWeights {
    pub weights: TraitWeights,
    pub score: f64,
}

/// Searches for trait weights that spread random quiz takers across personas.
///
/// # Algorithm
/// 1. Traits are the keys of the first persona's ratings.
/// 2. Start from weights drawn uniformly in `[initial_low, initial_high)`.
/// 3. Each round, nudge every weight by `U(-step_size, step_size)` (floored
///    at `min_weight`), run a random walk, and score it with
///    [`diversity_score`]. Keep the trial if it scores strictly higher.
pub fn optimize_weights<R: Rng + ?Sized>(
    roster: &PersonaRoster,
    bank: &QuestionBank,
    table: &RatingTable,
    params: &TuningParams,
    rng: &mut R,
) -> Result<OptimizedWeights, TuningError> {
    params.validate()?;

    let first = roster.personas().first().ok_or(TuningError::EmptyRoster)?;
    if bank.is_empty() {
        return Err(TuningError::NoQuestions);
    }
    let traits: Vec<TraitName> = first.ratings.traits().map(str::to_string).collect();

    let mut best: Vec<(TraitName, f64)> = traits
        .iter()
        .map(|t| (t.clone(), rng.gen_range(params.initial_low..params.initial_high)))
        .collect();
    let mut best_score = 0.0;

    for _ in 0..params.iterations {
        let trial: Vec<(TraitName, f64)> = best
            .iter()
            .map(|(t, w)| {
                let nudged = w + rng.gen_range(-params.step_size..params.step_size);
                (t.clone(), nudged.max(params.min_weight))
            })
            .collect();
        let trial_weights = TraitWeights::try_from_pairs(trial.iter().cloned())?;

        let counts = random_walk(
            bank,
            table,
            roster,
            &trial_weights,
            params.steps_per_walk,
            params.diversity_boost,
            &mut *rng,
        )?;
        let score = diversity_score(&counts);

        if score > best_score {
            best_score = score;
            best = trial;
        }
    }

    Ok(OptimizedWeights {
        weights: TraitWeights::try_from_pairs(best)?,
        score: best_score,
    })
}
