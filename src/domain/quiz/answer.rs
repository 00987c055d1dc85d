//! Answer value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The literal text of one chosen option.
///
/// Answers are only unique within a question. Rating lookups are keyed by the
/// text alone, so the same string chosen on two different questions resolves
/// to the same rating entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(String);

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
