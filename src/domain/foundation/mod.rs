//! Foundation module - Shared domain primitives.
//!
//! Contains the trait vocabulary and error types that the quiz,
//! persona, and matching modules are built on.

mod errors;
mod traits;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use traits::{TraitName, TraitVector, TraitWeights};
