//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuizDataSource` - Loads the question bank, rating table, and persona roster

mod quiz_data_source;

pub use quiz_data_source::{DataFetchError, QuizDataSource};
