//! Shared test fixtures and helpers
//!
//! Builds a seeded in-memory store and an API over it.

use std::sync::Arc;

use trivia::adapters::{MemoryStore, SeedData};
use trivia::api::{ApiConfig, TriviaApi};
use trivia::core::models::{Category, Question};
use trivia::core::services::RandomSource;

/// Random source that always picks the same index (clamped to the range)
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {id}"),
        category,
        difficulty: 1 + id % 5,
    }
}

/// Seed with three categories:
/// - 1 "Science": 12 questions (ids 1..=12)
/// - 2 "Art": 2 questions (ids 13, 14)
/// - 3 "Geography": no questions
pub fn seed() -> SeedData {
    let mut questions: Vec<Question> = (1..=12)
        .map(|id| question(id, &format!("Science question number {id}"), 1))
        .collect();
    questions.push(question(13, "Who painted the Mona Lisa?", 2));
    questions.push(question(14, "What is the TITLE of Munch's famous painting?", 2));

    SeedData {
        categories: vec![
            Category::new(1, "Science"),
            Category::new(2, "Art"),
            Category::new(3, "Geography"),
        ],
        questions,
    }
}

/// An API over a freshly seeded store with thread-local randomness
pub fn api() -> TriviaApi {
    TriviaApi::new(ApiConfig::new(Arc::new(MemoryStore::from_seed(seed()).unwrap())))
}

/// An API over a freshly seeded store whose quiz draws are deterministic
pub fn api_with_random(random: FixedRandom) -> TriviaApi {
    let store = MemoryStore::from_seed(seed()).unwrap();
    let config = ApiConfig::new(Arc::new(store)).with_random(Arc::new(random));
    TriviaApi::new(config)
}

/// An API over an empty store
pub fn empty_api() -> TriviaApi {
    TriviaApi::new(ApiConfig::new(Arc::new(MemoryStore::new())))
}
