//! Domain models for the trivia bank
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Category`] - A read-only grouping of questions
//! - [`Question`] - A stored question with its answer
//! - [`NewQuestion`] - A validated question awaiting an id
//! - [`QuestionDraft`] - A client submission before validation

mod category;
mod draft;
mod question;

pub use category::Category;
pub use draft::{FieldValue, QuestionDraft};
pub use question::{NewQuestion, Question};
