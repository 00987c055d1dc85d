//! Quiz module - answers, the rating lookup, and trait aggregation.
//!
//! A quiz is a fixed bank of four-option questions. The user's chosen
//! answers are resolved through the [`RatingTable`] and folded by the
//! [`TraitAggregator`] into a normalized [`TraitVector`](crate::domain::foundation::TraitVector).

mod aggregator;
mod answer;
mod question_bank;
mod rating_table;

pub use aggregator::TraitAggregator;
pub use answer::Answer;
pub use question_bank::{Question, QuestionBank, ANSWERS_PER_QUESTION};
pub use rating_table::RatingTable;
