//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation or directly by
//! other clients.
//!
//! ## Design
//!
//! - **Handlers are plain methods**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code and renders
//!   into an [`ErrorEnvelope`]

mod error;
mod handlers;
mod types;

pub use crate::core::models::{FieldValue, QuestionDraft};
pub use error::{ApiError, ErrorCode, ErrorEnvelope};
pub use handlers::{ApiConfig, TriviaApi};
pub use types::{Empty, QuizCategory, QuizOutcome, QuizRequest, SearchRequest};
