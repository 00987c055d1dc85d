//! Question bank - the ordered list of multiple-choice questions.

use serde::{Deserialize, Serialize};

use super::Answer;
use crate::domain::foundation::ValidationError;

/// Number of options every question offers.
pub const ANSWERS_PER_QUESTION: usize = 4;

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answers: Vec<Answer>,
    pub image: String,
}

impl Question {
    /// Creates a question, validating text and option count.
    pub fn new(
        question: impl Into<String>,
        answers: Vec<Answer>,
        image: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let q = Self {
            question: question.into(),
            answers,
            image: image.into(),
        };
        q.validate()?;
        Ok(q)
    }

    /// Checks that the prompt is non-empty and there are exactly four options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        if self.answers.len() != ANSWERS_PER_QUESTION {
            return Err(ValidationError::wrong_length(
                "answers",
                ANSWERS_PER_QUESTION,
                self.answers.len(),
            ));
        }
        Ok(())
    }
}

/// Ordered questions as shipped in the question file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Creates a bank, validating every question.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        let bank = Self { questions };
        bank.validate()?;
        Ok(bank)
    }

    /// Validates every question, reporting the first offender.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, question) in self.questions.iter().enumerate() {
            question.validate().map_err(|e| {
                ValidationError::invalid_format(format!("questions[{}]", index), e.to_string())
            })?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}
