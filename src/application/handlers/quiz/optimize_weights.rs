//! OptimizeWeights - Command handler running the offline weight search.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use super::loading::load_tuning_data;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::tuning::{optimize_weights, OptimizedWeights, TuningParams};
use crate::ports::QuizDataSource;

/// Command to search for trait weights.
#[derive(Debug, Clone, Default)]
pub struct OptimizeWeightsCommand {
    pub params: TuningParams,
    /// Seed for a reproducible run; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

/// Handler for the weight optimizer.
pub struct OptimizeWeightsHandler {
    source: Arc<dyn QuizDataSource>,
    fetch_timeout: Duration,
}

impl OptimizeWeightsHandler {
    pub fn new(source: Arc<dyn QuizDataSource>) -> Self {
        Self {
            source,
            fetch_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub async fn handle(&self, cmd: OptimizeWeightsCommand) -> Result<OptimizedWeights, DomainError> {
        // 1. Load the full data set; tuning needs the question bank too
        let (bank, table, roster) =
            load_tuning_data(self.source.as_ref(), self.fetch_timeout).await?;

        info!(
            questions = bank.len(),
            personas = roster.len(),
            iterations = cmd.params.iterations,
            "Starting weight optimization"
        );

        // 2. The search is CPU bound; keep it off the async workers
        let result = tokio::task::spawn_blocking(move || {
            let mut rng = match cmd.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            optimize_weights(&roster, &bank, &table, &cmd.params, &mut rng)
        })
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Optimizer task failed: {}", e))
        })??;

        info!(score = result.score, "Weight optimization finished");
        Ok(result)
    }
}
