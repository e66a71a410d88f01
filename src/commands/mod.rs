//! Command implementations

mod check_seed;
mod serve;

pub use check_seed::check_seed;
pub use serve::{ServeArgs, serve};
