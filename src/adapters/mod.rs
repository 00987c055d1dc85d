//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `quiz_data` - Quiz data sources (JSON files, in-memory)

pub mod quiz_data;

pub use quiz_data::{FsQuizDataSource, InMemoryQuizDataSource, QuizDataFiles};
