//! QuizDataSource port for loading the question bank, ratings, and roster.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, TraitWeights};
use crate::domain::persona::PersonaRoster;
use crate::domain::quiz::{QuestionBank, RatingTable};

/// Errors that can occur while fetching quiz data.
///
/// When any of these is returned the matcher must not run on partial data;
/// callers substitute the unknown persona instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataFetchError {
    /// The named source does not exist.
    #[error("Quiz data not found: {0}")]
    NotFound(String),

    /// Reading the source failed.
    #[error("IO error reading {source_name}: {reason}")]
    Io { source_name: String, reason: String },

    /// The source was read but its contents do not match the data contract.
    #[error("Malformed quiz data in {source_name}: {reason}")]
    Malformed { source_name: String, reason: String },

    /// Loading did not finish before the deadline.
    #[error("Timed out after {0:?} loading quiz data")]
    Timeout(Duration),
}

impl DataFetchError {
    pub fn io(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        DataFetchError::Io {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        DataFetchError::Malformed {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DataFetchError::NotFound(_) => ErrorCode::DataNotFound,
            DataFetchError::Io { .. } => ErrorCode::InternalError,
            DataFetchError::Malformed { .. } => ErrorCode::DataMalformed,
            DataFetchError::Timeout(_) => ErrorCode::DataTimeout,
        }
    }
}

impl From<DataFetchError> for DomainError {
    fn from(err: DataFetchError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            DataFetchError::NotFound(source_name) => domain.with_detail("source", source_name),
            DataFetchError::Io {
                source_name,
                reason,
            }
            | DataFetchError::Malformed {
                source_name,
                reason,
            } => domain
                .with_detail("source", source_name)
                .with_detail("reason", reason),
            DataFetchError::Timeout(after) => {
                domain.with_detail("timeout_ms", after.as_millis().to_string())
            }
        }
    }
}

/// Read-only access to the three quiz data sets.
///
/// Implementations return fully validated values; a roster with duplicate
/// names or a question without four answers is reported as `Malformed`.
#[async_trait]
pub trait QuizDataSource: Send + Sync {
    /// Load the ordered question bank.
    async fn load_questions(&self) -> Result<QuestionBank, DataFetchError>;

    /// Load the answer-to-trait rating table.
    async fn load_ratings(&self) -> Result<RatingTable, DataFetchError>;

    /// Load the persona roster.
    async fn load_roster(&self) -> Result<PersonaRoster, DataFetchError>;

    /// Load externally supplied trait weights, if this source has any.
    async fn load_weights(&self) -> Result<Option<TraitWeights>, DataFetchError> {
        Ok(None)
    }
}
