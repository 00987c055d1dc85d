//! Filesystem adapter reading the quiz data from JSON files

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::TraitWeights;
use crate::domain::persona::PersonaRoster;
use crate::domain::quiz::{QuestionBank, RatingTable};
use crate::ports::{DataFetchError, QuizDataSource};

/// File names of the three data sets, relative to a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDataFiles {
    pub questions: String,
    pub ratings: String,
    pub roster: String,
    /// Optional trait weight override; the built-in table is used when unset.
    pub weights: Option<String>,
}

impl Default for QuizDataFiles {
    fn default() -> Self {
        Self {
            questions: "question-1.json".to_string(),
            ratings: "rating-questions.json".to_string(),
            roster: "lebrons.json".to_string(),
            weights: None,
        }
    }
}

/// Filesystem-based quiz data source
///
/// Reads `{base_dir}/{file}` for each data set and validates the parsed
/// values before handing them out.
pub struct FsQuizDataSource {
    base_dir: PathBuf,
    files: QuizDataFiles,
}

impl FsQuizDataSource {
    /// Create a data source with the default file names
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self::with_files(base_dir, QuizDataFiles::default())
    }

    /// Create a data source with custom file names
    pub fn with_files(base_dir: impl AsRef<Path>, files: QuizDataFiles) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            files,
        }
    }

    /// Get full path to a data file
    fn get_file_path(&self, file: &str) -> PathBuf {
        self.base_dir.join(file)
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, DataFetchError> {
        let path = self.get_file_path(file);

        let content = fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DataFetchError::NotFound(path.display().to_string())
            } else {
                DataFetchError::io(path.display().to_string(), e.to_string())
            }
        })?;

        serde_json::from_str(&content)
            .map_err(|e| DataFetchError::malformed(path.display().to_string(), e.to_string()))
    }
}

#[async_trait]
impl QuizDataSource for FsQuizDataSource {
    async fn load_questions(&self) -> Result<QuestionBank, DataFetchError> {
        let bank: QuestionBank = self.read_json(&self.files.questions).await?;
        bank.validate()
            .map_err(|e| DataFetchError::malformed(&self.files.questions, e.to_string()))?;
        Ok(bank)
    }

    async fn load_ratings(&self) -> Result<RatingTable, DataFetchError> {
        self.read_json(&self.files.ratings).await
    }

    async fn load_roster(&self) -> Result<PersonaRoster, DataFetchError> {
        let roster: PersonaRoster = self.read_json(&self.files.roster).await?;
        roster
            .validate()
            .map_err(|e| DataFetchError::malformed(&self.files.roster, e.to_string()))?;
        Ok(roster)
    }

    async fn load_weights(&self) -> Result<Option<TraitWeights>, DataFetchError> {
        match &self.files.weights {
            Some(file) => self.read_json(file).await.map(Some),
            None => Ok(None),
        }
    }
}
