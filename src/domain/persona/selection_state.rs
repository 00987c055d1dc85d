//! Selection history used by the diversity penalty.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// How many times each persona has been selected.
///
/// Lives for one process (or one session) and is never persisted. Counts only
/// ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState(HashMap<String, u32>);

impl SelectionState {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Times the persona has been selected, zero if never.
    pub fn count(&self, name: &str) -> u32 {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// Records one more selection and returns the new count.
    pub fn record(&mut self, name: &str) -> u32 {
        let count = self.0.entry(name.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Number of distinct personas selected at least once.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Smallest non-zero count, if anything was selected.
    pub fn min_count(&self) -> Option<u32> {
        self.0.values().copied().min()
    }

    /// Largest count, if anything was selected.
    pub fn max_count(&self) -> Option<u32> {
        self.0.values().copied().max()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

/// Selection state shared by concurrent quiz sessions in one process.
///
/// The lock is held for the whole read-score-increment cycle so two
/// sessions cannot both observe the same count.
#[derive(Debug, Default)]
pub struct SharedSelectionState {
    inner: Mutex<SelectionState>,
}

impl SharedSelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the state.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut SelectionState) -> R) -> R {
        // A panic mid-update leaves counts that are still valid integers.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    /// Copy of the current counts.
    pub fn snapshot(&self) -> SelectionState {
        self.with_state(|state| state.clone())
    }
}

impl From<SelectionState> for SharedSelectionState {
    fn from(state: SelectionState) -> Self {
        Self {
            inner: Mutex::new(state),
        }
    }
}
