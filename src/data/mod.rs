// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from raw corpus CSVs to tensor batches, one step
// per module:
//
//   corpus CSVs (stories, highlights)
//       │
//       ▼
//   CsvCorpusLoader   → reads rows, applies the pool caps
//       │
//       ▼
//   TextNormalizer    → ordered cleaning stages per field
//       │
//       ▼
//   split_train_val   → seeded 80/20 partition of the pool
//       │
//       ▼
//   SummaryDataset    → fixed-length encodings on demand
//       │
//       ▼
//   SummaryBatcher    → stacks encodings into tensor batches
//       │
//       ▼
//   DataLoader        → shuffling and batch iteration (Burn)
//
// Each module is responsible for exactly one step, so each is
// independently testable and replaceable.

/// Reads corpus rows from headed CSV files with a row cap
pub mod loader;

/// The ordered text-cleaning pipeline
pub mod cleaner;

/// Seeded, reproducible train/validation partitioning
pub mod splitter;

/// Burn Dataset adapter producing fixed-length encodings
pub mod dataset;

/// Burn Batcher stacking encodings into tensors
pub mod batcher;
