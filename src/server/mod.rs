//! HTTP server adapters
//!
//! This module translates between HTTP and the HTTP-agnostic API layer.
//!
//! - [`router`] - Pure routing from method/URL/body to a rendered reply
//! - [`tiny_http`] - Lightweight threaded HTTP server

pub mod router;
pub mod tiny_http;

pub use router::{HttpReply, dispatch};
