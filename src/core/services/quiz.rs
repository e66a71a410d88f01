//! Quiz question selection
//!
//! Draws the next quiz question uniformly from a category's questions that
//! have not been asked yet.

use std::collections::HashSet;

use rand::Rng as _;

use super::super::models::Question;

/// Source of uniformly distributed indices
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len`; `len` is never zero
    fn pick(&self, len: usize) -> usize;
}

/// Random source backed by the calling thread's generator
///
/// Each thread draws from its own generator, so concurrent requests never
/// contend on shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Choose the next question among `candidates` not listed in `excluded`
///
/// Returns `None` once every candidate has been asked.
#[must_use]
pub fn select_next(
    candidates: Vec<Question>,
    excluded: &HashSet<i64>,
    random: &dyn RandomSource,
) -> Option<Question> {
    let mut remaining: Vec<Question> =
        candidates.into_iter().filter(|q| !excluded.contains(&q.id)).collect();
    if remaining.is_empty() {
        return None;
    }
    let index = random.pick(remaining.len());
    Some(remaining.swap_remove(index))
}
