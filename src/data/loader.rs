// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Reads one source corpus from a headed CSV file using the
// `csv` crate. Each row carries a `stories` column (the full
// article) and a `highlights` column (the summary).
//
// Two corpora exist: the DailyMail file feeds the train pool
// and the CNN file feeds the test pool. Both are truncated to
// a fixed row cap BEFORE any processing — the caps keep the
// preparation run bounded on the full-size corpus dumps.
//
// A missing field is coerced to the empty string rather than
// dropping the row; a row that fails to parse at the CSV level
// propagates as an error to the caller — the pipeline is a
// single deterministic pass with no partial-failure recovery.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;

use crate::domain::story::RawStory;
use crate::domain::traits::RecordSource;

/// A corpus row as serde sees it — both columns optional so a
/// hole in the source file becomes an empty string, not an
/// error or a dropped record.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    stories: Option<String>,

    #[serde(default)]
    highlights: Option<String>,
}

/// Loads up to `cap` rows from one CSV corpus file.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvCorpusLoader {
    /// Path to the corpus CSV file
    path: String,

    /// Row cap applied before any processing
    cap: usize,
}

impl CsvCorpusLoader {
    pub fn new(path: impl Into<String>, cap: usize) -> Self {
        Self {
            path: path.into(),
            cap,
        }
    }
}

impl RecordSource for CsvCorpusLoader {
    fn load_all(&self) -> Result<Vec<RawStory>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open corpus '{}'", self.path))?;

        let mut stories = Vec::new();

        // take(cap) truncates the pool before anything downstream
        // ever sees the extra rows
        for result in reader.deserialize::<CsvRow>().take(self.cap) {
            let row = result
                .with_context(|| format!("Malformed row in corpus '{}'", self.path))?;
            stories.push(RawStory::new(
                row.stories.unwrap_or_default(),
                row.highlights.unwrap_or_default(),
            ));
        }

        tracing::info!(
            "Loaded {} rows from '{}' (cap {})",
            stories.len(),
            self.path,
            self.cap
        );
        Ok(stories)
    }
}
