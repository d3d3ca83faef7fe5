// ============================================================
// Layer 3 — RawStory Domain Type
// ============================================================
// Represents one row of the source corpus exactly as read:
// the full article body and the editor-written highlights.
// No cleaning has happened yet when a RawStory exists.

use serde::{Deserialize, Serialize};

/// One raw (article, highlights) row from a source corpus.
///
/// Missing fields in the source are coerced to the empty string
/// by the loader — a RawStory always has both fields present,
/// never a hole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStory {
    /// The full article body as it appears in the corpus
    pub stories: String,

    /// The human-written highlight sentences for the article
    pub highlights: String,
}

impl RawStory {
    /// Create a new RawStory.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(stories: impl Into<String>, highlights: impl Into<String>) -> Self {
        Self {
            stories:    stories.into(),
            highlights: highlights.into(),
        }
    }
}
