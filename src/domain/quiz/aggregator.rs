//! Trait Aggregator - folds raw answer ratings into a normalized trait vector.

use std::collections::BTreeMap;

use super::{Answer, RatingTable};
use crate::domain::foundation::{TraitName, TraitVector};

/// Running statistics for one trait across the consumed answers.
#[derive(Debug, Clone, Copy)]
struct TraitStats {
    sum: f64,
    count: u32,
    min: f64,
    max: f64,
}

impl TraitStats {
    fn new() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn observe(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Mean rescaled into the observed `[min, max]` bracket.
    ///
    /// A zero range means every value equalled `min`, so the result is
    /// exactly `0` regardless of rounding in the mean.
    fn normalized(&self) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let mean = self.sum / f64::from(self.count);
        (mean - self.min) / range
    }
}

/// Trait aggregation functions.
pub struct TraitAggregator;

impl TraitAggregator {
    /// Aggregates answers into a normalized trait vector.
    ///
    /// # Algorithm
    /// For each trait touched by a rated answer:
    /// `(mean - min) / (max - min)`, with a range of `1` when every observed
    /// value was identical.
    ///
    /// # Edge Cases
    /// - No answers: Returns an empty vector
    /// - Answer missing from the table: Skipped
    /// - Trait never rated: Absent from the output (not zero)
    pub fn aggregate(answers: &[Answer], table: &RatingTable) -> TraitVector {
        let mut stats: BTreeMap<&TraitName, TraitStats> = BTreeMap::new();

        for ratings in answers.iter().filter_map(|a| table.ratings_for(a)) {
            for (name, &value) in ratings {
                stats.entry(name).or_insert_with(TraitStats::new).observe(value);
            }
        }

        stats
            .into_iter()
            .map(|(name, s)| (name.clone(), s.normalized()))
            .collect()
    }

    /// Answers that have no rating entry and would be skipped.
    pub fn unrated<'a>(answers: &'a [Answer], table: &RatingTable) -> Vec<&'a Answer> {
        answers.iter().filter(|a| !table.contains(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(entries: Vec<(&str, Vec<(&str, f64)>)>) -> RatingTable {
        entries
            .into_iter()
            .map(|(answer, ratings)| (answer, ratings.into_iter().collect::<TraitVector>()))
            .collect()
    }

    fn answers(texts: &[&str]) -> Vec<Answer> {
        texts.iter().map(|t| Answer::from(*t)).collect()
    }

    #[test]
    fn aggregate_normalizes_mean_into_observed_range() {
        let table = table(vec![("A", vec![("x", 1.0)]), ("B", vec![("x", 5.0)])]);
        let result = TraitAggregator::aggregate(&answers(&["A", "B"]), &table);

        // sum=6, count=2, mean=3, min=1, max=5 -> (3-1)/4
        assert_eq!(result.get("x"), Some(0.5));
    }

    #[test]
    fn aggregate_of_no_answers_is_empty() {
        let table = table(vec![("A", vec![("x", 1.0)])]);
        assert!(TraitAggregator::aggregate(&[], &table).is_empty());
    }

    #[test]
    fn aggregate_skips_unknown_answers() {
        let table = table(vec![("A", vec![("x", 2.0)]), ("B", vec![("x", 4.0)])]);
        let with_unknown = TraitAggregator::aggregate(&answers(&["A", "??", "B"]), &table);
        let without = TraitAggregator::aggregate(&answers(&["A", "B"]), &table);
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn aggregate_uses_unit_range_when_all_values_equal() {
        let table = table(vec![("A", vec![("x", 3.0)]), ("B", vec![("x", 3.0)])]);
        let result = TraitAggregator::aggregate(&answers(&["A", "B"]), &table);
        assert_eq!(result.get("x"), Some(0.0));
    }

    #[test]
    fn aggregate_of_repeated_inexact_rating_is_exactly_zero() {
        // 0.1 * 3 / 3 does not round-trip to 0.1 in binary floating point.
        let table = table(vec![("a", vec![("x", 0.1)])]);
        let result = TraitAggregator::aggregate(&answers(&["a", "a", "a"]), &table);
        assert_eq!(result.get("x"), Some(0.0));
    }

    #[test]
    fn aggregate_omits_traits_without_contributions() {
        let table = table(vec![("A", vec![("x", 1.0)]), ("B", vec![("y", 2.0)])]);
        let result = TraitAggregator::aggregate(&answers(&["A"]), &table);
        assert!(result.contains("x"));
        assert!(!result.contains("y"));
    }

    #[test]
    fn aggregate_counts_zero_ratings() {
        // A leading zero must not reset the running statistics.
        let table = table(vec![("A", vec![("x", 0.0)]), ("B", vec![("x", 4.0)])]);
        let result = TraitAggregator::aggregate(&answers(&["A", "B"]), &table);
        assert_eq!(result.get("x"), Some(0.5));
    }

    #[test]
    fn aggregate_counts_repeated_answers_each_time() {
        let table = table(vec![("A", vec![("x", 0.0)]), ("B", vec![("x", 4.0)])]);
        let result = TraitAggregator::aggregate(&answers(&["A", "A", "A", "B"]), &table);
        // mean = 1, min = 0, range = 4
        assert_eq!(result.get("x"), Some(0.25));
    }

    #[test]
    fn unrated_lists_answers_missing_from_table() {
        let table = table(vec![("A", vec![("x", 1.0)])]);
        let given = answers(&["A", "Z"]);
        let missing = TraitAggregator::unrated(&given, &table);
        assert_eq!(missing, vec![&Answer::from("Z")]);
    }

    fn rated_answers() -> impl Strategy<Value = (RatingTable, Vec<Answer>)> {
        let traits = prop::sample::subsequence(vec!["humor", "boldness", "social"], 1..=3);
        let entry = (traits, prop::collection::vec(-10.0f64..10.0, 3));
        prop::collection::vec(entry, 1..8).prop_map(|entries| {
            let mut table = RatingTable::new();
            let mut given = Vec::new();
            for (i, (names, values)) in entries.into_iter().enumerate() {
                let text = format!("answer-{}", i);
                table.insert(
                    text.as_str(),
                    names.into_iter().zip(values).collect::<TraitVector>(),
                );
                given.push(Answer::new(text));
            }
            (table, given)
        })
    }

    proptest! {
        #[test]
        fn aggregate_values_stay_in_unit_interval((table, given) in rated_answers()) {
            let result = TraitAggregator::aggregate(&given, &table);
            prop_assert!(!result.is_empty());
            for (name, value) in &result {
                prop_assert!(
                    (-1e-9..=1.0 + 1e-9).contains(value),
                    "trait {} out of range: {}", name, value
                );
            }
        }

        #[test]
        fn aggregate_of_identical_ratings_is_zero(
            value in -100.0f64..100.0,
            repeats in 1usize..6,
        ) {
            let mut table = RatingTable::new();
            table.insert("same", [("x", value)].into_iter().collect());
            let given = vec![Answer::from("same"); repeats];

            let result = TraitAggregator::aggregate(&given, &table);
            prop_assert_eq!(result.get("x"), Some(0.0));
        }
    }
}
