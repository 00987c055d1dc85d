//! MatchPersona - Command handler turning quiz answers into a persona.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::loading::load_match_data;
use crate::domain::foundation::{DomainError, TraitVector, TraitWeights};
use crate::domain::matching::{PersonaMatcher, PersonaScore};
use crate::domain::persona::{Persona, SharedSelectionState};
use crate::domain::quiz::{Answer, TraitAggregator};
use crate::ports::QuizDataSource;

/// Command carrying the answers of one completed quiz.
#[derive(Debug, Clone)]
pub struct MatchPersonaCommand {
    pub answers: Vec<Answer>,
}

impl MatchPersonaCommand {
    pub fn new<A: Into<Answer>>(answers: impl IntoIterator<Item = A>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of a match.
#[derive(Debug, Clone)]
pub struct MatchPersonaResult {
    pub persona: Persona,
    /// Score of the winner; `None` for the unknown-persona fallback.
    pub score: Option<PersonaScore>,
    /// The normalized trait vector the answers produced.
    pub traits: TraitVector,
    /// Answers that had no rating entry.
    pub skipped_answers: Vec<Answer>,
}

impl MatchPersonaResult {
    fn unknown() -> Self {
        Self {
            persona: Persona::unknown(),
            score: None,
            traits: TraitVector::new(),
            skipped_answers: Vec::new(),
        }
    }

    /// True if data could not be loaded and the placeholder was returned.
    pub fn is_fallback(&self) -> bool {
        self.score.is_none()
    }
}

/// Handler for matching answers to a persona.
pub struct MatchPersonaHandler {
    source: Arc<dyn QuizDataSource>,
    selections: Arc<SharedSelectionState>,
    default_weights: TraitWeights,
    diversity_boost: f64,
    fetch_timeout: Duration,
}

impl MatchPersonaHandler {
    pub fn new(source: Arc<dyn QuizDataSource>, selections: Arc<SharedSelectionState>) -> Self {
        Self {
            source,
            selections,
            default_weights: TraitWeights::defaults(),
            diversity_boost: 0.2,
            fetch_timeout: Duration::from_secs(10),
        }
    }

    /// Weights used when the data source supplies none.
    pub fn with_weights(mut self, weights: TraitWeights) -> Self {
        self.default_weights = weights;
        self
    }

    pub fn with_diversity_boost(mut self, diversity_boost: f64) -> Self {
        self.diversity_boost = diversity_boost;
        self
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub async fn handle(&self, cmd: MatchPersonaCommand) -> Result<MatchPersonaResult, DomainError> {
        // 1. Load data; the matcher never runs on partial data
        let (table, roster, weights) =
            match load_match_data(self.source.as_ref(), self.fetch_timeout).await {
                Ok(data) => data,
                Err(e) => {
                    warn!(error = %e, "Quiz data unavailable, returning unknown persona");
                    return Ok(MatchPersonaResult::unknown());
                }
            };
        let weights = weights.unwrap_or_else(|| self.default_weights.clone());

        // 2. Aggregate answers into a normalized trait vector
        let skipped_answers: Vec<Answer> = TraitAggregator::unrated(&cmd.answers, &table)
            .into_iter()
            .cloned()
            .collect();
        for answer in &skipped_answers {
            warn!(answer = %answer, "No rating entry for answer, skipping");
        }
        let traits = TraitAggregator::aggregate(&cmd.answers, &table);
        debug!(traits = ?traits, answers = cmd.answers.len(), "Aggregated trait vector");

        // 3. Select under the lock so the count read and increment are atomic
        let (persona, score) = self.selections.with_state(|state| {
            PersonaMatcher::select_inspecting(
                &traits,
                &roster,
                &weights,
                state,
                self.diversity_boost,
                |candidate| {
                    debug!(
                        persona = %candidate.name,
                        similarity = candidate.similarity,
                        adjusted = candidate.adjusted,
                        "Scored persona"
                    );
                },
            )
            .map(|selection| (selection.persona.clone(), selection.score))
        })?;

        info!(
            persona = %persona.name,
            similarity = score.similarity,
            penalty = score.penalty,
            "Persona selected"
        );

        Ok(MatchPersonaResult {
            persona,
            score: Some(score),
            traits,
            skipped_answers,
        })
    }
}
