// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer never learns where records come from
// or how cleaning is implemented:
//   - CsvCorpusLoader implements RecordSource
//   - (future) ParquetLoader could implement RecordSource
//   - TextNormalizer implements Normalize
// and the orchestration code works with either unchanged.

use anyhow::Result;
use crate::domain::story::RawStory;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce raw corpus rows.
///
/// Implementations:
///   - CsvCorpusLoader → reads a headed CSV with row cap
pub trait RecordSource {
    /// Load all available rows from this source, in corpus order.
    fn load_all(&self) -> Result<Vec<RawStory>>;
}

// ─── Normalize ────────────────────────────────────────────────────────────────
/// Any component that can rewrite one document into its cleaned
/// form. Must be pure: same input, same output, no shared
/// mutable state across calls.
pub trait Normalize {
    /// Clean a single raw document. Empty in, empty out.
    fn clean(&self, text: &str) -> String;
}
