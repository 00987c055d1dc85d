//! Trait vectors and trait weights.
//!
//! Both user answers and persona profiles are described by open, string-keyed
//! maps of trait name to real number. Keys are kept in a `BTreeMap` so that
//! iteration (and therefore floating point summation order) is stable.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

use super::ValidationError;

/// Name of a personality trait such as `"humor"` or `"boldness"`.
pub type TraitName = String;

/// Mapping of trait name to a real value.
///
/// Used both for raw ratings (answer ratings, persona profiles) and for the
/// normalized `[0, 1]` user vector produced by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitVector(BTreeMap<TraitName, f64>);

impl TraitVector {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the value for a trait, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Sets the value for a trait, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<TraitName>, value: f64) {
        self.0.insert(name.into(), value);
    }

    /// Returns true if the trait has a value.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(trait, value)` pairs in trait-name order.
    pub fn iter(&self) -> btree_map::Iter<'_, TraitName, f64> {
        self.0.iter()
    }

    /// Iterates over trait names in order.
    pub fn traits(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<TraitName>> FromIterator<(K, f64)> for TraitVector {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a TraitVector {
    type Item = (&'a TraitName, &'a f64);
    type IntoIter = btree_map::Iter<'a, TraitName, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Fixed per-trait multipliers applied during similarity scoring.
///
/// Traits without an entry weigh `1.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<TraitName, f64>", into = "BTreeMap<TraitName, f64>")]
pub struct TraitWeights(BTreeMap<TraitName, f64>);

impl TraitWeights {
    /// Creates an empty weight table (every trait weighs 1).
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds a weight table, rejecting non-finite or non-positive weights.
    pub fn try_from_pairs<K, I>(pairs: I) -> Result<Self, ValidationError>
    where
        K: Into<TraitName>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut map = BTreeMap::new();
        for (name, weight) in pairs {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("weights.trait"));
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ValidationError::not_positive(
                    format!("weights.{}", name),
                    weight,
                ));
            }
            map.insert(name, weight);
        }
        Ok(Self(map))
    }

    /// The ten-trait table tuned for the bundled roster.
    pub fn defaults() -> Self {
        DEFAULT_TRAIT_WEIGHTS.clone()
    }

    /// Returns the multiplier for a trait, `1.0` when absent.
    pub fn weight_of(&self, name: &str) -> f64 {
        self.0.get(name).copied().unwrap_or(1.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, TraitName, f64> {
        self.0.iter()
    }
}

impl TryFrom<BTreeMap<TraitName, f64>> for TraitWeights {
    type Error = ValidationError;

    fn try_from(map: BTreeMap<TraitName, f64>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(map)
    }
}

impl From<TraitWeights> for BTreeMap<TraitName, f64> {
    fn from(weights: TraitWeights) -> Self {
        weights.0
    }
}

static DEFAULT_TRAIT_WEIGHTS: Lazy<TraitWeights> = Lazy::new(|| {
    TraitWeights(
        [
            ("confidence", 0.876850850367134),
            ("humor", 1.3590308797724668),
            ("creativity", 0.9581770002100758),
            ("social", 0.645137516459086),
            ("intensity", 1.0664124278538842),
            ("honesty", 0.9459812098220566),
            ("strategy", 1.06531586911321),
            ("boldness", 1.4466557042696735),
            ("competitiveness", 1.1858407552064394),
            ("relatability", 0.7701276891331693),
        ]
        .into_iter()
        .map(|(name, weight)| (name.to_string(), weight))
        .collect(),
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_vector_iterates_in_name_order() {
        let v: TraitVector = [("humor", 0.2), ("boldness", 0.9), ("confidence", 0.5)]
            .into_iter()
            .collect();
        let names: Vec<&str> = v.traits().collect();
        assert_eq!(names, vec!["boldness", "confidence", "humor"]);
    }

    #[test]
    fn trait_vector_deserializes_from_plain_object() {
        let v: TraitVector = serde_json::from_str(r#"{"humor": 3, "social": -1.5}"#).unwrap();
        assert_eq!(v.get("humor"), Some(3.0));
        assert_eq!(v.get("social"), Some(-1.5));
        assert_eq!(v.get("boldness"), None);
    }

    #[test]
    fn weight_of_defaults_to_one_for_unknown_trait() {
        let weights = TraitWeights::new();
        assert_eq!(weights.weight_of("humor"), 1.0);
    }

    #[test]
    fn default_weights_cover_ten_traits() {
        let weights = TraitWeights::defaults();
        assert_eq!(weights.len(), 10);
        assert!((weights.weight_of("boldness") - 1.4466557042696735).abs() < 1e-12);
        assert_eq!(weights.weight_of("not-a-trait"), 1.0);
    }

    #[test]
    fn try_from_pairs_rejects_non_positive_weight() {
        let result = TraitWeights::try_from_pairs([("humor", 0.0)]);
        assert!(matches!(result, Err(ValidationError::NotPositive { .. })));

        let result = TraitWeights::try_from_pairs([("humor", f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn try_from_pairs_rejects_blank_trait_name() {
        let result = TraitWeights::try_from_pairs([("  ", 1.0)]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn weights_deserialize_with_validation() {
        let ok: TraitWeights = serde_json::from_str(r#"{"humor": 1.5}"#).unwrap();
        assert_eq!(ok.weight_of("humor"), 1.5);

        let bad: Result<TraitWeights, _> = serde_json::from_str(r#"{"humor": -2}"#);
        assert!(bad.is_err());
    }
}
