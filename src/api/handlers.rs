//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::core::models::{Category, Question, QuestionDraft};
use crate::core::ports::TriviaStore;
use crate::core::services::{
    DEFAULT_PAGE_SIZE, DraftError, RandomSource, SearchFilter, ThreadRandom, paginate,
    select_next, validate,
};

use super::error::ApiError;
use super::types::{Empty, QuizOutcome, QuizRequest, SearchRequest};

/// Everything the handlers need, passed in explicitly
#[derive(Clone)]
pub struct ApiConfig {
    /// Items per page on list endpoints
    pub page_size: usize,
    /// Backing store
    pub store: Arc<dyn TriviaStore>,
    /// Source of randomness for quiz draws
    pub random: Arc<dyn RandomSource>,
}

impl ApiConfig {
    /// Default page size and thread-local randomness over `store`
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            store,
            random: Arc::new(ThreadRandom),
        }
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the random source
    #[must_use]
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// The trivia API: one method per endpoint
///
/// Holds no per-request state, so a single instance can serve concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct TriviaApi {
    config: ApiConfig,
}

impl TriviaApi {
    /// Create the API from its configuration
    #[must_use]
    pub const fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Configured page size
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.config.page_size
    }

    fn store(&self) -> &dyn TriviaStore {
        self.config.store.as_ref()
    }

    fn page<T>(&self, items: Vec<T>, page: i64) -> Vec<T> {
        paginate(items, page, self.config.page_size)
    }

    // =========================================================================
    // CATEGORIES
    // =========================================================================

    /// List one page of categories
    pub fn list_categories(&self, page: i64) -> Result<Vec<Category>, ApiError> {
        let categories = self.store().categories()?;
        Ok(self.page(categories, page))
    }

    /// Get a single category by id
    pub fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        self.store()
            .category(id)?
            .ok_or_else(|| ApiError::not_found(format!("Could not find a category with id={id}.")))
    }

    /// List one page of the questions in a category
    ///
    /// An unknown category yields an empty page, not an error.
    pub fn category_questions(&self, category_id: i64, page: i64) -> Result<Vec<Question>, ApiError> {
        let questions = self.store().questions_in_category(category_id)?;
        Ok(self.page(questions, page))
    }

    // =========================================================================
    // QUESTIONS
    // =========================================================================

    /// List one page of questions
    pub fn list_questions(&self, page: i64) -> Result<Vec<Question>, ApiError> {
        let questions = self.store().questions()?;
        Ok(self.page(questions, page))
    }

    /// Get a single question by id
    pub fn get_question(&self, id: i64) -> Result<Question, ApiError> {
        self.store()
            .question(id)?
            .ok_or_else(|| ApiError::not_found(format!("Could not find a question with id={id}.")))
    }

    /// Validate a draft and store it as a new question
    ///
    /// Nothing is written unless every field is present and well-formed.
    pub fn create_question(&self, draft: QuestionDraft) -> Result<Question, ApiError> {
        let new_question = validate(draft).map_err(|err: DraftError| {
            log::warn!("Rejected question draft: {err}");
            ApiError::unprocessable(err.to_string())
        })?;

        let question = self.store().insert_question(new_question)?;
        log::info!("Created question {}", question.id);
        Ok(question)
    }

    /// Delete a question by id
    pub fn delete_question(&self, id: i64) -> Result<Empty, ApiError> {
        if self.store().delete_question(id)? {
            log::info!("Deleted question {id}");
            Ok(Empty {})
        } else {
            Err(ApiError::not_found(format!("Could not find a question with id={id}.")))
        }
    }

    /// Search question text for a term and return one page of matches
    ///
    /// A missing body or a null term is a bad request; the store is not
    /// queried in that case.
    pub fn search_questions(
        &self,
        request: Option<&SearchRequest>,
        page: i64,
    ) -> Result<Vec<Question>, ApiError> {
        let Some(term) = request.and_then(|r| r.search_term.as_deref()) else {
            log::warn!("Search request without a search_term");
            return Err(ApiError::bad_request("Make sure that search_term are not null."));
        };
        let filter = SearchFilter::new(term);
        log::debug!("Searching questions for '{}'", filter.needle());
        let matches = self.store().questions_where(&|q| filter.matches(q))?;
        Ok(self.page(matches, page))
    }

    // =========================================================================
    // QUIZZES
    // =========================================================================

    /// Draw the next quiz question from a category
    ///
    /// Fails with not found when the category has no questions at all, and
    /// succeeds with an empty outcome once every question has been asked.
    pub fn next_quiz_question(&self, request: &QuizRequest) -> Result<QuizOutcome, ApiError> {
        let category = request.quiz_category.as_ref().and_then(|c| c.id.as_ref());
        let (Some(category), Some(previous)) = (category, request.previous_questions.as_ref())
        else {
            log::warn!("Quiz request without quiz_category or previous_questions");
            return Err(ApiError::unprocessable(
                "Make sure that quiz_category - previous_questions are not null.",
            ));
        };
        let Some(category_id) = category.as_integer() else {
            log::warn!("Quiz category id '{category}' is not an integer");
            return Err(ApiError::unprocessable("quiz_category id must be an integer."));
        };

        let candidates = self.store().questions_in_category(category_id)?;
        if candidates.is_empty() {
            return Err(ApiError::not_found(format!(
                "Could not find any category with id={category_id}."
            )));
        }
        log::debug!(
            "Quiz category {category_id}: {} candidates, {} already asked",
            candidates.len(),
            previous.len()
        );

        let excluded: HashSet<i64> = previous.iter().copied().collect();
        Ok(select_next(candidates, &excluded, self.config.random.as_ref()).into())
    }
}
