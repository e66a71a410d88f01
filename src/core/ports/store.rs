//! Trivia store port
//!
//! Defines the interface for reading and writing categories and questions.

use super::super::models::{Category, NewQuestion, Question};

/// Storage backend for the trivia bank
///
/// Implementations return categories and questions ordered by id and
/// assign ids on insertion. Every call is synchronous from the caller's
/// point of view.
pub trait TriviaStore: Send + Sync {
    /// List all categories
    fn categories(&self) -> anyhow::Result<Vec<Category>>;

    /// Look up a category by id
    fn category(&self, id: i64) -> anyhow::Result<Option<Category>>;

    /// List all questions
    fn questions(&self) -> anyhow::Result<Vec<Question>>;

    /// Look up a question by id
    fn question(&self, id: i64) -> anyhow::Result<Option<Question>>;

    /// List the questions accepted by `predicate`
    fn questions_where(
        &self,
        predicate: &dyn Fn(&Question) -> bool,
    ) -> anyhow::Result<Vec<Question>>;

    /// List the questions belonging to a category
    fn questions_in_category(&self, category_id: i64) -> anyhow::Result<Vec<Question>> {
        self.questions_where(&|q| q.category == category_id)
    }

    /// Store a new question
    ///
    /// Returns the stored question with its assigned id.
    fn insert_question(&self, question: NewQuestion) -> anyhow::Result<Question>;

    /// Delete a question by id
    ///
    /// Returns `false` if no question had that id.
    fn delete_question(&self, id: i64) -> anyhow::Result<bool>;
}
