//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod quiz;

pub use quiz::{
    MatchPersonaCommand, MatchPersonaHandler, MatchPersonaResult, OptimizeWeightsCommand,
    OptimizeWeightsHandler,
};
