//! Deadline-bounded loading of quiz data.

use std::future::Future;
use std::time::Duration;

use crate::domain::foundation::TraitWeights;
use crate::domain::persona::PersonaRoster;
use crate::domain::quiz::{QuestionBank, RatingTable};
use crate::ports::{DataFetchError, QuizDataSource};

/// Everything the matcher reads.
pub(super) type MatchData = (RatingTable, PersonaRoster, Option<TraitWeights>);

/// Everything the optimizer reads.
pub(super) type TuningData = (QuestionBank, RatingTable, PersonaRoster);

/// Runs a load future under a deadline.
pub(super) async fn with_deadline<T, F>(timeout: Duration, load: F) -> Result<T, DataFetchError>
where
    F: Future<Output = Result<T, DataFetchError>>,
{
    tokio::time::timeout(timeout, load)
        .await
        .map_err(|_| DataFetchError::Timeout(timeout))?
}

/// Loads ratings, roster, and any weight override concurrently.
pub(super) async fn load_match_data(
    source: &dyn QuizDataSource,
    timeout: Duration,
) -> Result<MatchData, DataFetchError> {
    with_deadline(timeout, async {
        futures::try_join!(
            source.load_ratings(),
            source.load_roster(),
            source.load_weights()
        )
    })
    .await
}

/// Loads questions, ratings, and roster concurrently.
pub(super) async fn load_tuning_data(
    source: &dyn QuizDataSource,
    timeout: Duration,
) -> Result<TuningData, DataFetchError> {
    with_deadline(timeout, async {
        futures::try_join!(
            source.load_questions(),
            source.load_ratings(),
            source.load_roster()
        )
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deadline_reports_the_exact_timeout() {
        let deadline = Duration::from_millis(20);
        let result: Result<(), DataFetchError> =
            with_deadline(deadline, std::future::pending()).await;

        assert_eq!(result, Err(DataFetchError::Timeout(deadline)));
    }

    #[tokio::test]
    async fn deadline_passes_through_completed_loads() {
        let result = with_deadline(Duration::from_millis(20), async { Ok(7) }).await;
        assert_eq!(result, Ok(7));
    }
}
