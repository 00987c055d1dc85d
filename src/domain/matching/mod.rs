//! Matching module - scores personas against a user's trait vector.
//!
//! # Components
//!
//! - `weighted_cosine_similarity` - Per-trait weighted cosine, asymmetric over the user's traits
//! - `PersonaMatcher` - Roster scan with the diversity penalty and selection bookkeeping
//!
//! Everything here is synchronous and does no I/O. The only side effect is
//! the increment of the caller-supplied [`SelectionState`](crate::domain::persona::SelectionState).

mod errors;
mod matcher;
mod similarity;

pub use errors::MatchError;
pub use matcher::{PersonaMatcher, PersonaScore, Selection};
pub use similarity::weighted_cosine_similarity;
