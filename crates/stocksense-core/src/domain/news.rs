use serde::{Deserialize, Serialize};

use crate::UtcDateTime;

/// Source-provided news headline or snippet. Read-only; the core never
/// edits or filters provider text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub text: String,
    pub published_at: UtcDateTime,
}

impl NewsItem {
    pub fn new(text: impl Into<String>, published_at: UtcDateTime) -> Self {
        Self {
            text: text.into(),
            published_at,
        }
    }
}
