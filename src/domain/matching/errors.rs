//! Matching-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while selecting a persona.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// There are no personas to compare against.
    #[error("Persona roster is empty")]
    EmptyRoster,
}

impl MatchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MatchError::EmptyRoster => ErrorCode::EmptyRoster,
        }
    }
}

impl From<MatchError> for DomainError {
    fn from(err: MatchError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
