//! Core request-handling logic for the trivia bank
//!
//! This module contains pure business logic with no I/O dependencies.
//! All storage interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Category, Question, QuestionDraft)
//! - `services/` - Pagination, validation, search and quiz selection
//! - `ports/` - Trait definitions for the storage backend

pub mod models;
pub mod ports;
pub mod services;
