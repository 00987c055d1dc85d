//! Tuning module - offline search for trait weights.
//!
//! Simulates random quiz takers and hill-climbs the [`TraitWeights`](crate::domain::foundation::TraitWeights)
//! so that outcomes spread across the whole roster instead of collapsing onto
//! a few personas. Randomness is injected so runs can be seeded.

mod errors;
mod optimizer;
mod random_walk;

pub use errors::TuningError;
pub use optimizer::{optimize_weights, OptimizedWeights, TuningParams};
pub use random_walk::{diversity_score, random_walk};
