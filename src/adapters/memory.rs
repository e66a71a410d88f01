//! In-memory trivia store
//!
//! Implements the `TriviaStore` port over ordered maps behind a read/write
//! lock. Ids are assigned from a counter that only moves forward, so a
//! deleted question's id is never handed out again.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::models::{Category, NewQuestion, Question};
use crate::core::ports::TriviaStore;

use super::seed::{SeedData, SeedError};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_question_id: i64,
}

/// Trivia store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with seed data
    ///
    /// Fails when the highest seeded question id leaves no room for new ids.
    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        let categories: BTreeMap<i64, Category> =
            seed.categories.into_iter().map(|c| (c.id, c)).collect();
        let questions: BTreeMap<i64, Question> =
            seed.questions.into_iter().map(|q| (q.id, q)).collect();
        let next_question_id = match questions.keys().next_back() {
            Some(&highest) => highest
                .checked_add(1)
                .ok_or(SeedError::IdOutOfRange(highest))?,
            None => 1,
        };

        Ok(Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        })
    }

    fn read(&self) -> anyhow::Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| anyhow::anyhow!("trivia store lock poisoned"))
    }

    fn write(&self) -> anyhow::Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| anyhow::anyhow!("trivia store lock poisoned"))
    }
}

impl TriviaStore for MemoryStore {
    fn categories(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn category(&self, id: i64) -> anyhow::Result<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn questions(&self) -> anyhow::Result<Vec<Question>> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    fn question(&self, id: i64) -> anyhow::Result<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    fn questions_where(
        &self,
        predicate: &dyn Fn(&Question) -> bool,
    ) -> anyhow::Result<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| predicate(q))
            .cloned()
            .collect())
    }

    fn insert_question(&self, question: NewQuestion) -> anyhow::Result<Question> {
        let mut tables = self.write()?;
        let id = tables.next_question_id.max(1);
        tables.next_question_id = id
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("question ids exhausted at {id}"))?;

        let stored = question.with_id(id);
        tables.questions.insert(id, stored.clone());
        log::debug!("Stored question {id}");
        Ok(stored)
    }

    fn delete_question(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }
}
