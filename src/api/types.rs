//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use crate::core::models::{FieldValue, Question};

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for searching questions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Text to look for in question text
    #[serde(default)]
    pub search_term: Option<String>,
}

/// Category selector inside a quiz request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    /// Category id
    #[serde(default)]
    pub id: Option<FieldValue>,
    /// Category name, sent by clients for display only
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Request body for drawing the next quiz question
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    /// Category to draw from
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    /// Ids of the questions already asked
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Result of a quiz draw: the next question, or `{}` once the category is exhausted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuizOutcome {
    /// A question that has not been asked yet
    Next(Question),
    /// Every question in the category has been asked
    Exhausted(Empty),
}

impl QuizOutcome {
    /// The drawn question, if any
    #[must_use]
    pub const fn question(&self) -> Option<&Question> {
        match self {
            Self::Next(question) => Some(question),
            Self::Exhausted(_) => None,
        }
    }
}

impl From<Option<Question>> for QuizOutcome {
    fn from(question: Option<Question>) -> Self {
        question.map_or(Self::Exhausted(Empty {}), Self::Next)
    }
}

/// An empty JSON object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}
