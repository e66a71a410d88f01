//! TOML seed data
//!
//! Categories are created outside the API, so the server is seeded from a
//! TOML file on startup:
//!
//! ```toml
//! [[categories]]
//! id = 1
//! type = "Science"
//!
//! [[questions]]
//! id = 20
//! question = "What is the heaviest organ in the human body?"
//! answer = "The Liver"
//! category = 1
//! difficulty = 4
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{Category, Question};

/// Errors that can occur when loading seed data
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("failed to read seed file {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The seed file is not valid TOML for this schema
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two categories share an id
    #[error("duplicate category id: {0}")]
    DuplicateCategory(i64),

    /// Two questions share an id
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(i64),

    /// A question id is too large to leave room for new questions
    #[error("question id {0} leaves no room for new ids")]
    IdOutOfRange(i64),
}

/// Categories and questions to preload into a store
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Seeded categories
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Seeded questions
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl SeedData {
    /// Parse seed data from TOML text
    pub fn parse(content: &str) -> Result<Self, SeedError> {
        let seed: Self = toml::from_str(content)?;
        seed.check_unique_ids()?;
        Ok(seed)
    }

    /// Load seed data from a TOML file
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    fn check_unique_ids(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id) {
                return Err(SeedError::DuplicateCategory(category.id));
            }
        }
        seen.clear();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(SeedError::DuplicateQuestion(question.id));
            }
        }
        Ok(())
    }
}
