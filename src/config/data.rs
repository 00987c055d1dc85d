//! Data file configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::QuizDataFiles;

/// Location of the quiz data files
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Base directory holding the JSON files
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Question bank file name
    #[serde(default = "default_questions_file")]
    pub questions_file: String,

    /// Answer rating table file name
    #[serde(default = "default_ratings_file")]
    pub ratings_file: String,

    /// Persona roster file name
    #[serde(default = "default_roster_file")]
    pub roster_file: String,

    /// Optional trait weight override file name
    pub weights_file: Option<String>,

    /// Deadline for loading all data, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl DataConfig {
    /// File names as understood by the filesystem adapter
    pub fn files(&self) -> QuizDataFiles {
        QuizDataFiles {
            questions: self.questions_file.clone(),
            ratings: self.ratings_file.clone(),
            roster: self.roster_file.clone(),
            weights: self.weights_file.clone(),
        }
    }

    /// Get the fetch deadline as a duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.questions_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("data.questions_file"));
        }
        if self.ratings_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("data.ratings_file"));
        }
        if self.roster_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("data.roster_file"));
        }
        if matches!(&self.weights_file, Some(f) if f.trim().is_empty()) {
            return Err(ValidationError::MissingRequired("data.weights_file"));
        }
        if self.fetch_timeout_secs == 0 || self.fetch_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            questions_file: default_questions_file(),
            ratings_file: default_ratings_file(),
            roster_file: default_roster_file(),
            weights_file: None,
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_questions_file() -> String {
    "question-1.json".to_string()
}

fn default_ratings_file() -> String {
    "rating-questions.json".to_string()
}

fn default_roster_file() -> String {
    "lebrons.json".to_string()
}

fn default_fetch_timeout() -> u64 {
    10
}
