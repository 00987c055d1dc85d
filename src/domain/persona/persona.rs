//! Persona profiles and the roster they are matched against.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{TraitVector, ValidationError};

/// Name shown when the roster or ratings could not be loaded.
pub const UNKNOWN_PERSONA_NAME: &str = "Unknown Persona";

/// A labeled profile the user can be matched to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Unique key within a roster.
    pub name: String,
    /// Path or URL of the persona's picture.
    pub image: String,
    pub description: String,
    /// The persona's own trait profile (not necessarily normalized).
    #[serde(default)]
    pub ratings: TraitVector,
}

impl Persona {
    /// Creates a persona, returning error if the name is empty.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        ratings: TraitVector,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            name,
            image: image.into(),
            description: description.into(),
            ratings,
        })
    }

    /// Placeholder result for when the quiz data could not be fetched.
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_PERSONA_NAME.to_string(),
            image: "images/placeholder.jpg".to_string(),
            description: "An enigma wrapped in mystery. We couldn't find your match, \
                          but you're still one of a kind."
                .to_string(),
            ratings: TraitVector::new(),
        }
    }

    /// Returns true if this is the placeholder persona.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_PERSONA_NAME && self.ratings.is_empty()
    }
}

/// Ordered personas, read-only while matching.
///
/// Deserializes from the roster file shape `{ "results": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonaRoster {
    #[serde(rename = "results")]
    personas: Vec<Persona>,
}

impl PersonaRoster {
    /// Creates a roster, validating names.
    pub fn new(personas: Vec<Persona>) -> Result<Self, ValidationError> {
        let roster = Self { personas };
        roster.validate()?;
        Ok(roster)
    }

    /// Checks that every persona has a non-empty, unique name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for (index, persona) in self.personas.iter().enumerate() {
            if persona.name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("results[{}].name", index)));
            }
            if !seen.insert(persona.name.as_str()) {
                return Err(ValidationError::invalid_format(
                    format!("results[{}].name", index),
                    format!("duplicate persona name '{}'", persona.name),
                ));
            }
        }
        Ok(())
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Persona> {
        self.personas.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(name: &str) -> Persona {
        Persona::new(name, "img.jpg", "desc", TraitVector::new()).unwrap()
    }

    #[test]
    fn persona_rejects_empty_name() {
        let result = Persona::new("", "img.jpg", "desc", TraitVector::new());
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn roster_deserializes_from_results_array() {
        let json = r#"{"results": [
            {"name": "Rookie", "image": "r.jpg", "description": "Fresh", "ratings": {"boldness": 8}},
            {"name": "Veteran", "image": "v.jpg", "description": "Wise", "ratings": {"strategy": 9}}
        ]}"#;
        let roster: PersonaRoster = serde_json::from_str(json).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.personas()[0].name, "Rookie");
        assert_eq!(roster.personas()[1].ratings.get("strategy"), Some(9.0));
    }

    #[test]
    fn roster_rejects_duplicate_names() {
        let result = PersonaRoster::new(vec![persona("A"), persona("B"), persona("A")]);
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "results[2].name"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_persona_is_recognizable() {
        let unknown = Persona::unknown();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.image, "images/placeholder.jpg");
        assert!(!persona("A").is_unknown());
    }
}
