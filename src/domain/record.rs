// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One cleaned training example: the normalised article text and
// its normalised target summary.
//
// A Record is created exactly once, when the cleaner has run
// over both fields of a RawStory, and is immutable afterwards.
// Its identity is its row index within the split that owns it.

use serde::{Deserialize, Serialize};

/// A cleaned (text, summary) pair.
///
/// `text` derives from the corpus `stories` field and `summary`
/// from `highlights`. Both fields are always present — the
/// loader coerces missing source values to strings rather than
/// dropping the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Cleaned article body — the encoder input
    pub text: String,

    /// Cleaned highlight summary — the decoder target
    pub summary: String,
}

impl Record {
    /// Create a new Record from already-cleaned fields
    pub fn new(text: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            text:    text.into(),
            summary: summary.into(),
        }
    }
}
