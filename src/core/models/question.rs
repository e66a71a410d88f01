//! Question model
//!
//! A question belongs to one category and carries a difficulty rating.
//! Neither the category reference nor the difficulty range is enforced.

use serde::{Deserialize, Serialize};

/// A stored trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier
    pub id: i64,

    /// The question text
    pub question: String,

    /// The expected answer
    pub answer: String,

    /// Id of the owning category
    pub category: i64,

    /// Difficulty rating
    pub difficulty: i64,
}

/// A validated question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// The question text
    pub question: String,

    /// The expected answer
    pub answer: String,

    /// Id of the owning category
    pub category: i64,

    /// Difficulty rating
    pub difficulty: i64,
}

impl NewQuestion {
    /// Attach a store-assigned id
    #[must_use]
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
