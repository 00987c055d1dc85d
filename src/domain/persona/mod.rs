//! Persona module - the candidate profiles and their selection history.

mod persona;
mod selection_state;

pub use persona::{Persona, PersonaRoster, UNKNOWN_PERSONA_NAME};
pub use selection_state::{SelectionState, SharedSelectionState};
