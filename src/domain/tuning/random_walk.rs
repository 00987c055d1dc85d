//! Random walk - simulates many quiz takers answering at random.

use rand::seq::SliceRandom;
use rand::Rng;

use super::TuningError;
use crate::domain::foundation::TraitWeights;
use crate::domain::matching::PersonaMatcher;
use crate::domain::persona::{PersonaRoster, SelectionState};
use crate::domain::quiz::{Answer, QuestionBank, RatingTable, TraitAggregator};

/// Plays `steps` simulated quizzes and returns how often each persona won.
///
/// Each step picks one uniformly random answer per question, aggregates them,
/// and selects a persona. The selection history is local to the walk, so the
/// diversity penalty accumulates across its steps only.
pub fn random_walk<R: Rng + ?Sized>(
    bank: &QuestionBank,
    table: &RatingTable,
    roster: &PersonaRoster,
    weights: &TraitWeights,
    steps: usize,
    diversity_boost: f64,
    rng: &mut R,
) -> Result<SelectionState, TuningError> {
    if roster.is_empty() {
        return Err(TuningError::EmptyRoster);
    }
    if bank.is_empty() {
        return Err(TuningError::NoQuestions);
    }

    let mut counts = SelectionState::new();
    for _ in 0..steps {
        let answers: Vec<Answer> = bank
            .iter()
            .filter_map(|question| question.answers.choose(&mut *rng).cloned())
            .collect();
        let user = TraitAggregator::aggregate(&answers, table);
        PersonaMatcher::select(&user, roster, weights, &mut counts, diversity_boost)?;
    }
    Ok(counts)
}

/// `2 * distinct + min/max`, rewarding walks that spread across personas.
///
/// The min/max consistency term is only counted once more than one persona
/// has been chosen.
pub fn diversity_score(counts: &SelectionState) -> f64 {
    let distinct = counts.distinct();
    let consistency = match (counts.min_count(), counts.max_count()) {
        (Some(min), Some(max)) if distinct > 1 && max > 0 => f64::from(min) / f64::from(max),
        _ => 0.0,
    };
    2.0 * distinct as f64 + consistency
}
