//! Persona Matcher - picks the best-fitting persona with a repetition penalty.

use serde::Serialize;

use super::{weighted_cosine_similarity, MatchError};
use crate::domain::foundation::{TraitVector, TraitWeights};
use crate::domain::persona::{Persona, PersonaRoster, SelectionState};

/// Score breakdown for one persona.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaScore {
    pub name: String,
    /// Weighted cosine similarity against the user vector.
    pub similarity: f64,
    /// `diversity_boost * times_selected`.
    pub penalty: f64,
    /// `similarity - penalty`; the value candidates compete on.
    pub adjusted: f64,
}

/// The winning persona together with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'r> {
    pub persona: &'r Persona,
    pub score: PersonaScore,
}

/// Persona matching functions.
pub struct PersonaMatcher;

impl PersonaMatcher {
    /// Scores every persona in roster order without touching the state.
    pub fn rank(
        user: &TraitVector,
        roster: &PersonaRoster,
        weights: &TraitWeights,
        state: &SelectionState,
        diversity_boost: f64,
    ) -> Vec<PersonaScore> {
        roster
            .iter()
            .map(|persona| Self::score(user, persona, weights, state, diversity_boost))
            .collect()
    }

    /// Selects the persona with the highest adjusted score and records it.
    ///
    /// # Algorithm
    /// For each persona: `similarity - diversity_boost * state[name]`.
    /// Only a strictly greater score replaces the running best, so ties go to
    /// the earlier persona. The winner's count in `state` is then incremented.
    ///
    /// # Edge Cases
    /// - Empty roster: `MatchError::EmptyRoster`, state untouched
    /// - Empty user vector: every similarity is 0, the penalty alone decides
    pub fn select<'r>(
        user: &TraitVector,
        roster: &'r PersonaRoster,
        weights: &TraitWeights,
        state: &mut SelectionState,
        diversity_boost: f64,
    ) -> Result<&'r Persona, MatchError> {
        Self::select_scored(user, roster, weights, state, diversity_boost)
            .map(|selection| selection.persona)
    }

    /// Same as [`select`](Self::select), also returning the winning score.
    pub fn select_scored<'r>(
        user: &TraitVector,
        roster: &'r PersonaRoster,
        weights: &TraitWeights,
        state: &mut SelectionState,
        diversity_boost: f64,
    ) -> Result<Selection<'r>, MatchError> {
        Self::select_inspecting(user, roster, weights, state, diversity_boost, |_| {})
    }

    /// Same as [`select_scored`](Self::select_scored), handing every
    /// persona's score to `inspect` in roster order as it is computed.
    pub fn select_inspecting<'r, F>(
        user: &TraitVector,
        roster: &'r PersonaRoster,
        weights: &TraitWeights,
        state: &mut SelectionState,
        diversity_boost: f64,
        mut inspect: F,
    ) -> Result<Selection<'r>, MatchError>
    where
        F: FnMut(&PersonaScore),
    {
        let mut best: Option<Selection<'r>> = None;
        let mut highest = f64::NEG_INFINITY;

        for persona in roster.iter() {
            let score = Self::score(user, persona, weights, state, diversity_boost);
            inspect(&score);
            if score.adjusted > highest {
                highest = score.adjusted;
                best = Some(Selection { persona, score });
            }
        }

        // Only reachable with a non-empty roster when every score is NaN or -inf.
        let selection = match best {
            Some(selection) => selection,
            None => {
                let persona = roster.personas().first().ok_or(MatchError::EmptyRoster)?;
                let score = Self::score(user, persona, weights, state, diversity_boost);
                Selection { persona, score }
            }
        };

        state.record(&selection.persona.name);
        Ok(selection)
    }

    fn score(
        user: &TraitVector,
        persona: &Persona,
        weights: &TraitWeights,
        state: &SelectionState,
        diversity_boost: f64,
    ) -> PersonaScore {
        let similarity = weighted_cosine_similarity(user, &persona.ratings, weights);
        let penalty = diversity_boost * f64::from(state.count(&persona.name));
        PersonaScore {
            name: persona.name.clone(),
            similarity,
            penalty,
            adjusted: similarity - penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn persona(name: &str, ratings: &[(&str, f64)]) -> Persona {
        Persona::new(
            name,
            format!("images/{}.jpg", name),
            format!("{} description", name),
            ratings.iter().map(|(k, v)| (*k, *v)).collect(),
        )
        .unwrap()
    }

    fn user(pairs: &[(&str, f64)]) -> TraitVector {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn select_returns_most_similar_and_records_it() {
        let roster = PersonaRoster::new(vec![
            persona("P1", &[("x", 1.0)]),
            persona("P2", &[("x", 0.0)]),
        ])
        .unwrap();
        let mut state = SelectionState::new();

        let chosen = PersonaMatcher::select(
            &user(&[("x", 1.0)]),
            &roster,
            &TraitWeights::new(),
            &mut state,
            0.2,
        )
        .unwrap();

        assert_eq!(chosen.name, "P1");
        assert_eq!(state.count("P1"), 1);
        assert_eq!(state.count("P2"), 0);
    }

    #[test]
    fn select_on_empty_roster_fails_without_touching_state() {
        let roster = PersonaRoster::default();
        let mut state = SelectionState::new();

        let result = PersonaMatcher::select(
            &user(&[("x", 1.0)]),
            &roster,
            &TraitWeights::new(),
            &mut state,
            0.2,
        );

        assert_eq!(result, Err(MatchError::EmptyRoster));
        assert!(state.is_empty());
    }

    #[test]
    fn ties_go_to_the_earlier_persona() {
        let roster = PersonaRoster::new(vec![
            persona("First", &[("x", 2.0)]),
            persona("Second", &[("x", 4.0)]),
        ])
        .unwrap();
        let mut state = SelectionState::new();

        // Both are parallel to the user vector, so both score exactly 1.
        let chosen = PersonaMatcher::select(
            &user(&[("x", 1.0)]),
            &roster,
            &TraitWeights::new(),
            &mut state,
            0.0,
        )
        .unwrap();
        assert_eq!(chosen.name, "First");
    }

    #[test]
    fn empty_user_vector_rotates_through_roster() {
        let roster = PersonaRoster::new(vec![
            persona("A", &[("x", 1.0)]),
            persona("B", &[("x", 1.0)]),
            persona("C", &[("x", 1.0)]),
        ])
        .unwrap();
        let mut state = SelectionState::new();
        let empty = TraitVector::new();

        let picks: Vec<String> = (0..4)
            .map(|_| {
                PersonaMatcher::select(&empty, &roster, &TraitWeights::new(), &mut state, 0.2)
                    .unwrap()
                    .name
                    .clone()
            })
            .collect();

        assert_eq!(picks, vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn repeated_selection_penalty_hands_win_to_runner_up() {
        let roster = PersonaRoster::new(vec![
            persona("Top", &[("x", 1.0), ("y", 0.0)]),
            persona("Close", &[("x", 1.0), ("y", 0.5)]),
        ])
        .unwrap();
        let u = user(&[("x", 1.0), ("y", 0.0)]);
        let weights = TraitWeights::new();

        let ranks = PersonaMatcher::rank(&u, &roster, &weights, &SelectionState::new(), 0.0);
        let gap = ranks[0].similarity - ranks[1].similarity;
        assert!(gap > 0.0);

        // Penalty below the gap keeps the favourite.
        let mut state = SelectionState::new();
        PersonaMatcher::select(&u, &roster, &weights, &mut state, gap / 2.0).unwrap();
        let again = PersonaMatcher::select(&u, &roster, &weights, &mut state, gap / 2.0).unwrap();
        assert_eq!(again.name, "Top");

        // Once the penalty exceeds the gap the runner-up wins.
        let mut state = SelectionState::new();
        PersonaMatcher::select(&u, &roster, &weights, &mut state, gap * 2.0).unwrap();
        let again = PersonaMatcher::select(&u, &roster, &weights, &mut state, gap * 2.0).unwrap();
        assert_eq!(again.name, "Close");
    }

    #[test]
    fn select_scored_reports_penalty_breakdown() {
        let roster = PersonaRoster::new(vec![persona("Solo", &[("x", 1.0)])]).unwrap();
        let mut state = SelectionState::new();
        state.record("Solo");
        state.record("Solo");

        let selection = PersonaMatcher::select_scored(
            &user(&[("x", 1.0)]),
            &roster,
            &TraitWeights::new(),
            &mut state,
            0.25,
        )
        .unwrap();

        assert_eq!(selection.score.name, "Solo");
        assert!((selection.score.similarity - 1.0).abs() < 1e-12);
        assert!((selection.score.penalty - 0.5).abs() < 1e-12);
        assert!((selection.score.adjusted - 0.5).abs() < 1e-12);
        assert_eq!(state.count("Solo"), 3);
    }

    #[test]
    fn select_inspecting_sees_each_score_once_in_roster_order() {
        let roster = PersonaRoster::new(vec![
            persona("P1", &[("x", 1.0)]),
            persona("P2", &[("x", 0.0)]),
            persona("P3", &[("x", -0.5)]),
        ])
        .unwrap();
        let u = user(&[("x", 1.0)]);
        let weights = TraitWeights::new();
        let mut state = SelectionState::new();
        state.record("P1");
        let expected = PersonaMatcher::rank(&u, &roster, &weights, &state, 0.2);

        let mut seen = Vec::new();
        let selection = PersonaMatcher::select_inspecting(
            &u,
            &roster,
            &weights,
            &mut state,
            0.2,
            |score| seen.push(score.clone()),
        )
        .unwrap();

        assert_eq!(seen, expected);
        assert_eq!(selection.persona.name, "P1");
        assert_eq!(state.count("P1"), 2);
    }

    #[test]
    fn rank_does_not_mutate_state() {
        let roster = PersonaRoster::new(vec![persona("A", &[("x", 1.0)])]).unwrap();
        let state = SelectionState::new();
        let scores =
            PersonaMatcher::rank(&user(&[("x", 1.0)]), &roster, &TraitWeights::new(), &state, 0.2);
        assert_eq!(scores.len(), 1);
        assert!(state.is_empty());
    }

    proptest! {
        #[test]
        fn single_persona_roster_always_wins(
            user_values in prop::collection::vec(-5.0f64..5.0, 0..4),
            prior in 0u32..20,
            boost in 0.0f64..3.0,
        ) {
            let roster = PersonaRoster::new(vec![persona("Only", &[("a", 1.0), ("b", -2.0)])]).unwrap();
            let u: TraitVector = ["a", "b", "c", "d"].iter().copied().zip(user_values).collect();
            let mut state = SelectionState::new();
            for _ in 0..prior {
                state.record("Only");
            }

            let chosen = PersonaMatcher::select(&u, &roster, &TraitWeights::new(), &mut state, boost).unwrap();
            prop_assert_eq!(&chosen.name, "Only");
            prop_assert_eq!(state.count("Only"), prior + 1);
        }

        #[test]
        fn select_increments_exactly_one_entry(
            values in prop::collection::vec(0.0f64..1.0, 3),
            prior_a in 0u32..5,
            prior_b in 0u32..5,
        ) {
            let roster = PersonaRoster::new(vec![
                persona("A", &[("x", 1.0), ("y", 0.2)]),
                persona("B", &[("y", 1.0), ("z", 0.3)]),
                persona("C", &[("z", 1.0), ("x", 0.1)]),
            ]).unwrap();
            let u: TraitVector = ["x", "y", "z"].iter().copied().zip(values).collect();
            let mut state = SelectionState::new();
            for _ in 0..prior_a { state.record("A"); }
            for _ in 0..prior_b { state.record("B"); }
            let before = state.clone();

            let chosen = PersonaMatcher::select(&u, &roster, &TraitWeights::defaults(), &mut state, 0.2)
                .unwrap()
                .name
                .clone();

            for name in ["A", "B", "C"] {
                let expected = before.count(name) + u32::from(name == chosen);
                prop_assert_eq!(state.count(name), expected);
            }
        }
    }
}
