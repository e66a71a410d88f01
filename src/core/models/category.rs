//! Category model
//!
//! Categories are seeded outside the API and are read-only from its
//! point of view.

use serde::{Deserialize, Serialize};

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name (serialized as `type`)
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    /// Create a category
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}
