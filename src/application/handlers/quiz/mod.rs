//! Quiz application handlers.
//!
//! Command handlers that load quiz data through the
//! [`QuizDataSource`](crate::ports::QuizDataSource) port and run the domain.

mod loading;
mod match_persona;
mod optimize_weights;

pub use match_persona::{MatchPersonaCommand, MatchPersonaHandler, MatchPersonaResult};
pub use optimize_weights::{OptimizeWeightsCommand, OptimizeWeightsHandler};
