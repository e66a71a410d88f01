//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the request-handling logic
//! and the storage backend. Implementations live in the `adapters` module.

mod store;

pub use store::TriviaStore;
