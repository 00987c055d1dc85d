//! Weighted cosine similarity between trait vectors.

use crate::domain::foundation::{TraitVector, TraitWeights};

/// Weighted cosine similarity of `user` against `persona`.
///
/// Only the user's traits are visited: a persona trait the user never touched
/// contributes nothing, while a user trait the persona lacks counts as a
/// persona value of `0`. Each component is scaled by its trait weight
/// (default `1`) before the dot product and norms are taken.
///
/// Returns `0.0` when either weighted norm is zero.
pub fn weighted_cosine_similarity(
    user: &TraitVector,
    persona: &TraitVector,
    weights: &TraitWeights,
) -> f64 {
    let mut dot = 0.0;
    let mut norm_user = 0.0;
    let mut norm_persona = 0.0;

    for (name, &value) in user {
        let weight = weights.weight_of(name);
        let u = value * weight;
        let p = persona.get(name).unwrap_or(0.0) * weight;

        dot += u * p;
        norm_user += u * u;
        norm_persona += p * p;
    }

    let norm_user = norm_user.sqrt();
    let norm_persona = norm_persona.sqrt();

    if norm_user != 0.0 && norm_persona != 0.0 {
        dot / (norm_user * norm_persona)
    } else {
        0.0
    }
}
