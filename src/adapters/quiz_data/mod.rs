//! Quiz data adapters

mod filesystem;
mod in_memory;

pub use filesystem::{FsQuizDataSource, QuizDataFiles};
pub use in_memory::InMemoryQuizDataSource;
