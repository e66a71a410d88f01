//! Output formatting for human and JSON modes
//!
//! CLI commands report their results either as human-readable text or as
//! machine-parseable JSON.

use serde::Serialize;

use crate::adapters::SeedData;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a seed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Number of categories
    pub categories: usize,
    /// Number of questions
    pub questions: usize,
    /// Ids of questions whose category is not in the seed
    pub orphaned_questions: Vec<i64>,
}

impl SeedSummary {
    /// Summarize loaded seed data
    #[must_use]
    pub fn of(seed: &SeedData) -> Self {
        let orphaned_questions = seed
            .questions
            .iter()
            .filter(|q| !seed.categories.iter().any(|c| c.id == q.category))
            .map(|q| q.id)
            .collect();
        Self {
            categories: seed.categories.len(),
            questions: seed.questions.len(),
            orphaned_questions,
        }
    }

    /// Render the summary in the given mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<String> {
        match mode {
            OutputMode::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputMode::Human => {
                let mut out = format!(
                    "{} categories, {} questions",
                    self.categories, self.questions
                );
                if !self.orphaned_questions.is_empty() {
                    let ids: Vec<String> =
                        self.orphaned_questions.iter().map(ToString::to_string).collect();
                    out.push_str(&format!("\nQuestions with unknown category: {}", ids.join(", ")));
                }
                Ok(out)
            },
        }
    }
}
