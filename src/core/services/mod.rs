//! Business logic services
//!
//! Pure logic that decides what a request returns. These services have no
//! I/O dependencies: they operate on data passed in and return results.
//!
//! - [`pagination`] - Fixed-size page slicing
//! - [`validator`] - Question draft completeness checks
//! - [`search`] - Case-insensitive question text matching
//! - [`quiz`] - Random quiz question selection with exclusion

pub mod pagination;
pub mod quiz;
pub mod search;
pub mod validator;

pub use pagination::{DEFAULT_PAGE_SIZE, page_bounds, paginate};
pub use quiz::{RandomSource, ThreadRandom, select_next};
pub use search::SearchFilter;
pub use validator::{DraftError, missing_fields, validate};
