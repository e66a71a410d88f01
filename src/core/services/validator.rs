//! Question payload validation
//!
//! A field is missing only when it is absent or null. Empty strings count
//! as present.

use thiserror::Error;

use super::super::models::{FieldValue, NewQuestion, QuestionDraft};

/// Why a draft could not be turned into a question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// One or more required fields were absent or null
    #[error("Make sure that {} are not null.", .0.join(" - "))]
    Missing(Vec<&'static str>),

    /// A numeric field held text that is not an integer
    #[error("{0} must be an integer.")]
    NotAnInteger(&'static str),
}

/// Names of the required fields that are absent, in declaration order
#[must_use]
pub fn missing_fields(draft: &QuestionDraft) -> Vec<&'static str> {
    [
        ("question", &draft.question),
        ("answer", &draft.answer),
        ("category", &draft.category),
        ("difficulty", &draft.difficulty),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_none())
    .map(|(name, _)| name)
    .collect()
}

/// Validate a draft and convert it into a storable question
pub fn validate(draft: QuestionDraft) -> Result<NewQuestion, DraftError> {
    let missing = missing_fields(&draft);
    match (draft.question, draft.answer, draft.category, draft.difficulty) {
        (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
            question: question.into_text(),
            answer: answer.into_text(),
            category: integer_field("category", &category)?,
            difficulty: integer_field("difficulty", &difficulty)?,
        }),
        _ => Err(DraftError::Missing(missing)),
    }
}

fn integer_field(name: &'static str, value: &FieldValue) -> Result<i64, DraftError> {
    value.as_integer().ok_or(DraftError::NotAnInteger(name))
}
