//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (trait vectors, weights, errors)
//! - `quiz` - Answers, question bank, rating table, and the trait aggregator
//! - `persona` - Persona roster and selection history
//! - `matching` - Weighted cosine similarity and persona selection
//! - `tuning` - Offline trait weight optimizer

pub mod foundation;
pub mod matching;
pub mod persona;
pub mod quiz;
pub mod tuning;
