//! Question draft
//!
//! The unvalidated shape of a question submitted for creation. Every field
//! is optional here; the validator decides which ones are required.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar field value as submitted by a client
///
/// Clients send numeric fields either as JSON integers or as strings
/// (`"category": 1` and `"category": "1"` are both accepted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON integer
    Integer(i64),
    /// A JSON string
    Text(String),
}

impl FieldValue {
    /// Interpret the value as an integer, parsing text if needed
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Interpret the value as text
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Request body for creating a question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    /// Question text
    #[serde(default)]
    pub question: Option<FieldValue>,
    /// Answer text
    #[serde(default)]
    pub answer: Option<FieldValue>,
    /// Category id
    #[serde(default)]
    pub category: Option<FieldValue>,
    /// Difficulty rating
    #[serde(default)]
    pub difficulty: Option<FieldValue>,
}
