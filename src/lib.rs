//! trivia - A trivia question bank served over a JSON HTTP API
//!
//! Clients list categories, list, search and paginate questions, create and
//! delete questions, and draw random quiz questions from a category while
//! skipping the ones already asked.
//!
//! - [`core`] - Models, request-handling services and the storage port
//! - [`adapters`] - Store implementations and seed loading
//! - [`api`] - HTTP-agnostic handlers and the error taxonomy
//! - [`server`] - HTTP routing and the `tiny_http` server

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod server;
