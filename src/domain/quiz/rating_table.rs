//! Answer-to-trait rating lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Answer;
use crate::domain::foundation::TraitVector;

/// How strongly each answer expresses each trait.
///
/// Deserializes from a JSON object whose keys are answer strings and whose
/// values are trait-to-number objects. Loaded once and never mutated while
/// a quiz is being scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingTable(HashMap<String, TraitVector>);

impl RatingTable {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Returns the trait ratings for an answer, if the table has an entry.
    pub fn ratings_for(&self, answer: &Answer) -> Option<&TraitVector> {
        self.0.get(answer.as_str())
    }

    /// Returns true if the answer has a rating entry.
    pub fn contains(&self, answer: &Answer) -> bool {
        self.0.contains_key(answer.as_str())
    }

    /// Adds or replaces the ratings for an answer.
    pub fn insert(&mut self, answer: impl Into<Answer>, ratings: TraitVector) {
        let answer: Answer = answer.into();
        self.0.insert(answer.as_str().to_string(), ratings);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: Into<Answer>> FromIterator<(A, TraitVector)> for RatingTable {
    fn from_iter<I: IntoIterator<Item = (A, TraitVector)>>(iter: I) -> Self {
        let mut table = RatingTable::new();
        for (answer, ratings) in iter {
            table.insert(answer, ratings);
        }
        table
    }
}
