//! Property-based tests for the request-handling services
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashSet;

use proptest::prelude::*;
use trivia::core::models::{FieldValue, Question, QuestionDraft};
use trivia::core::services::{SearchFilter, ThreadRandom, missing_fields, paginate, select_next};

fn question(id: i64, text: String, category: i64) -> Question {
    Question {
        id,
        question: text,
        answer: "answer".to_string(),
        category,
        difficulty: 1,
    }
}

proptest! {
    /// Any page from 1 up is the contiguous slice [(page-1)*10, page*10)
    #[test]
    fn page_is_contiguous_slice(len in 0usize..60, page in 1i64..8) {
        let items: Vec<usize> = (0..len).collect();
        let result = paginate(items.clone(), page, 10);
        let start = usize::try_from((page - 1) * 10).unwrap().min(len);
        let end = (start + 10).min(len);
        prop_assert!(result.len() <= 10);
        prop_assert_eq!(result, items[start..end].to_vec());
    }

    /// The missing set is exactly the null fields, in declaration order
    #[test]
    fn missing_fields_are_exactly_the_nulls(mask in 0u8..16) {
        let field = |bit: u8| (mask & (1 << bit) != 0).then(|| FieldValue::from("x"));
        let draft = QuestionDraft {
            question: field(0),
            answer: field(1),
            category: field(2),
            difficulty: field(3),
        };
        let expected: Vec<&str> = ["question", "answer", "category", "difficulty"]
            .into_iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) == 0)
            .map(|(_, name)| name)
            .collect();
        prop_assert_eq!(missing_fields(&draft), expected);
    }

    /// A question matches iff its lowercased text contains the lowercased term
    #[test]
    fn search_matches_substring_ignoring_case(
        prefix in "[a-zA-Z ]{0,10}",
        term in "[a-zA-Z]{1,6}",
        suffix in "[a-zA-Z ]{0,10}",
        other in "[a-zA-Z ]{0,20}",
    ) {
        let filter = SearchFilter::new(&term);
        let containing = question(1, format!("{prefix}{}{suffix}", term.to_uppercase()), 1);
        prop_assert!(filter.matches(&containing));

        let unrelated = question(2, other.clone(), 1);
        prop_assert_eq!(
            filter.matches(&unrelated),
            other.to_lowercase().contains(&term.to_lowercase())
        );
    }

    /// A drawn question is always a candidate that was not excluded
    #[test]
    fn quiz_never_returns_excluded(
        ids in proptest::collection::btree_set(1i64..100, 0..20),
        excluded in proptest::collection::hash_set(1i64..100, 0..20),
    ) {
        let candidates: Vec<Question> =
            ids.iter().map(|&id| question(id, format!("Q{id}"), 4)).collect();
        let remaining: HashSet<i64> = ids.iter().copied().filter(|id| !excluded.contains(id)).collect();

        match select_next(candidates, &excluded, &ThreadRandom) {
            Some(q) => {
                prop_assert!(remaining.contains(&q.id));
                prop_assert_eq!(q.category, 4);
            },
            None => prop_assert!(remaining.is_empty()),
        }
    }
}
