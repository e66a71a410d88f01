//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle storage:
//!
//! - `memory` - In-memory `TriviaStore`
//! - `seed` - TOML seed data used to preload a store

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;
pub use seed::{SeedData, SeedError};
