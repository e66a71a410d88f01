//! Question text search
//!
//! Case-insensitive substring containment over the question text only.

use super::super::models::Question;

/// Predicate selecting questions whose text contains a search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Build a filter for `term`
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// The lowercased term this filter looks for
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether `question` contains the term
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        question.question.to_lowercase().contains(&self.needle)
    }
}
