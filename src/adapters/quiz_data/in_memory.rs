//! In-Memory Quiz Data Adapter
//!
//! Serves quiz data held in memory. Useful for testing and for embedding
//! the matcher where the data is compiled in or fetched elsewhere.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::TraitWeights;
use crate::domain::persona::PersonaRoster;
use crate::domain::quiz::{QuestionBank, RatingTable};
use crate::ports::{DataFetchError, QuizDataSource};

#[derive(Debug, Default)]
struct Contents {
    questions: Option<QuestionBank>,
    ratings: Option<RatingTable>,
    roster: Option<PersonaRoster>,
    weights: Option<TraitWeights>,
}

/// In-memory quiz data; unset data sets report `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizDataSource {
    contents: Arc<RwLock<Contents>>,
}

impl InMemoryQuizDataSource {
    /// Create a source holding all three data sets
    pub fn new(questions: QuestionBank, ratings: RatingTable, roster: PersonaRoster) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Contents {
                questions: Some(questions),
                ratings: Some(ratings),
                roster: Some(roster),
                weights: None,
            })),
        }
    }

    /// Create an empty source
    pub fn empty() -> Self {
        Self::default()
    }

    pub async fn set_questions(&self, questions: QuestionBank) {
        self.contents.write().await.questions = Some(questions);
    }

    pub async fn set_ratings(&self, ratings: RatingTable) {
        self.contents.write().await.ratings = Some(ratings);
    }

    pub async fn set_roster(&self, roster: PersonaRoster) {
        self.contents.write().await.roster = Some(roster);
    }

    pub async fn set_weights(&self, weights: TraitWeights) {
        self.contents.write().await.weights = Some(weights);
    }

    /// Remove all stored data (useful for tests)
    pub async fn clear(&self) {
        *self.contents.write().await = Contents::default();
    }
}

#[async_trait]
impl QuizDataSource for InMemoryQuizDataSource {
    async fn load_questions(&self) -> Result<QuestionBank, DataFetchError> {
        self.contents
            .read()
            .await
            .questions
            .clone()
            .ok_or_else(|| DataFetchError::NotFound("questions".to_string()))
    }

    async fn load_ratings(&self) -> Result<RatingTable, DataFetchError> {
        self.contents
            .read()
            .await
            .ratings
            .clone()
            .ok_or_else(|| DataFetchError::NotFound("ratings".to_string()))
    }

    async fn load_roster(&self) -> Result<PersonaRoster, DataFetchError> {
        self.contents
            .read()
            .await
            .roster
            .clone()
            .ok_or_else(|| DataFetchError::NotFound("roster".to_string()))
    }

    async fn load_weights(&self) -> Result<Option<TraitWeights>, DataFetchError> {
        Ok(self.contents.read().await.weights.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_source_reports_not_found() {
        let source = InMemoryQuizDataSource::empty();
        assert_eq!(
            source.load_roster().await,
            Err(DataFetchError::NotFound("roster".to_string()))
        );
    }

    #[tokio::test]
    async fn setters_fill_an_empty_source() {
        let source = InMemoryQuizDataSource::empty();
        assert!(source.load_questions().await.is_err());

        source.set_questions(QuestionBank::default()).await;
        source.set_roster(PersonaRoster::default()).await;

        assert_eq!(source.load_questions().await, Ok(QuestionBank::default()));
        assert_eq!(source.load_roster().await, Ok(PersonaRoster::default()));
    }

    #[tokio::test]
    async fn set_then_clear() {
        let source = InMemoryQuizDataSource::empty();
        source.set_ratings(RatingTable::new()).await;
        assert!(source.load_ratings().await.is_ok());

        source.clear().await;
        assert!(source.load_ratings().await.is_err());
    }
}
