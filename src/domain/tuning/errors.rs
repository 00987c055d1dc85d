//! Tuning-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::matching::MatchError;

/// Errors raised by the weight optimizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("Cannot tune weights without personas")]
    EmptyRoster,

    #[error("Cannot tune weights without questions")]
    NoQuestions,

    #[error("Invalid tuning parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Produced invalid weights: {0}")]
    InvalidWeights(#[from] ValidationError),

    #[error("Matching failed during random walk: {0}")]
    Match(#[from] MatchError),
}

impl TuningError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        TuningError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TuningError::EmptyRoster | TuningError::Match(_) => ErrorCode::EmptyRoster,
            TuningError::NoQuestions => ErrorCode::DataMalformed,
            TuningError::InvalidParameter { .. } | TuningError::InvalidWeights(_) => {
                ErrorCode::ValidationFailed
            }
        }
    }
}

impl From<TuningError> for DomainError {
    fn from(err: TuningError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
