// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Load the train pool CSV    (Layer 4 - data)
//   Step 2: Clean both fields per row  (Layer 4 - data)
//   Step 3: Load + clean the test pool (Layer 4 - data)
//   Step 4: Seeded train/val split     (Layer 4 - data)
//   Step 5: Load or build tokenizer    (Layer 5 - infra)
//   Step 6: Persist cleaned splits     (optional)
//   Step 7: Wrap splits as datasets    (Layer 4 - data)
//   Step 8: Build the data loaders     (Burn)
//
// The cleaned fields are written into freshly-owned Records —
// never back into a view of the source rows — so there is no
// aliasing between raw corpus data and the prepared splits.

use anyhow::{Context, Result};
use burn::data::dataloader::{DataLoader, DataLoaderBuilder};
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::SummaryBatcher,
    cleaner::{CleanOptions, TextNormalizer},
    dataset::{SummaryDataset, SUMMARY_MAX_LEN},
    loader::CsvCorpusLoader,
    splitter::split_train_val,
};
use crate::domain::record::Record;
use crate::domain::story::RawStory;
use crate::domain::traits::RecordSource;
use crate::infra::tokenizer_store::TokenizerStore;

// Dataset preparation is CPU work — the ndarray backend keeps
// the loaders usable on any machine.
type PrepBackend = burn::backend::NdArray;

// ─── Preparation Configuration ───────────────────────────────────────────────
// Every tunable of a preparation run, fixed once at process
// start. Serialisable so a run's exact settings can be saved
// alongside its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub train_csv: String,
    pub test_csv: String,
    pub tokenizer_dir: String,
    pub out_dir: Option<String>,
    pub max_len: usize,
    pub train_batch_size: usize,
    pub valid_batch_size: usize,
    pub epochs: usize,
    pub lr: f64,
    pub dropout: f64,
    pub bidirectional: bool,
    pub train_fraction: f64,
    pub seed: u64,
    pub train_cap: usize,
    pub test_cap: usize,
    pub vocab_size: usize,
    pub stemming: bool,
    pub lemmatize: bool,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            train_csv:        "dailymail_stories.csv".to_string(),
            test_csv:         "cnn_stories.csv".to_string(),
            tokenizer_dir:    "artifacts".to_string(),
            out_dir:          None,
            max_len:          256,
            train_batch_size: 3,
            valid_batch_size: 3,
            epochs:           1,
            lr:               1e-5,
            dropout:          0.5,
            bidirectional:    false,
            train_fraction:   0.8,
            seed:             42,
            train_cap:        100_000,
            test_cap:         10_000,
            vocab_size:       30_522,
            stemming:         false,
            lemmatize:        false,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Run the full preparation pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        let normalizer = TextNormalizer::with_options(CleanOptions {
            stemming: cfg.stemming,
            lemmatize: cfg.lemmatize,
            strip_emoji: false,
        });

        // ── Step 1+2: Train pool — load up to the cap, clean both fields ──────
        tracing::info!("Loading train pool from '{}'", cfg.train_csv);
        let loader = CsvCorpusLoader::new(&cfg.train_csv, cfg.train_cap);
        let pool = clean_corpus(&loader.load_all()?, &normalizer);
        tracing::info!("Cleaned {} train-pool records", pool.len());

        // ── Step 3: Test pool — same treatment, separate corpus ───────────────
        tracing::info!("Loading test pool from '{}'", cfg.test_csv);
        let test_loader = CsvCorpusLoader::new(&cfg.test_csv, cfg.test_cap);
        let test_records = clean_corpus(&test_loader.load_all()?, &normalizer);
        tracing::info!("Cleaned {} test records", test_records.len());

        // ── Step 4: Carve validation out of the train complement ──────────────
        let pool_size = pool.len();
        let (train_records, val_records) =
            split_train_val(pool, cfg.train_fraction, cfg.seed);
        debug_assert_eq!(train_records.len() + val_records.len(), pool_size);
        tracing::info!(
            "Split: {} train, {} validation",
            train_records.len(),
            val_records.len()
        );

        // ── Step 5: Tokenizer — dropped-in file or corpus-built ───────────────
        let corpus_texts: Vec<String> =
            train_records.iter().map(|r| r.text.clone()).collect();
        let store = TokenizerStore::new(&cfg.tokenizer_dir);
        let tokenizer = store.load_or_build(&corpus_texts, cfg.vocab_size)?;

        // ── Step 6: Optionally persist the cleaned splits ─────────────────────
        if let Some(dir) = &cfg.out_dir {
            write_split(dir, "train.csv", &train_records)?;
            write_split(dir, "validation.csv", &val_records)?;
            write_split(dir, "test.csv", &test_records)?;
        }

        // ── Step 7: Wrap each split behind the Dataset interface ──────────────
        let train_dataset =
            SummaryDataset::new(train_records, tokenizer.clone(), cfg.max_len);
        let val_dataset =
            SummaryDataset::new(val_records, tokenizer.clone(), cfg.max_len);
        let test_dataset = SummaryDataset::new(test_records, tokenizer, cfg.max_len);

        // ── Step 8: Data loaders — train shuffled per epoch, rest in order ────
        let device = burn::backend::ndarray::NdArrayDevice::Cpu;

        let train_loader =
            DataLoaderBuilder::new(SummaryBatcher::<PrepBackend>::new(device.clone()))
                .batch_size(cfg.train_batch_size)
                .shuffle(cfg.seed)
                .num_workers(1)
                .build(train_dataset);

        let _val_loader =
            DataLoaderBuilder::new(SummaryBatcher::<PrepBackend>::new(device.clone()))
                .batch_size(cfg.valid_batch_size)
                .num_workers(1)
                .build(val_dataset);

        let _test_loader =
            DataLoaderBuilder::new(SummaryBatcher::<PrepBackend>::new(device))
                .batch_size(cfg.valid_batch_size)
                .num_workers(1)
                .build(test_dataset);

        // Pull one batch so a broken tokenizer or corpus fails
        // here, not mid-training.
        if let Some(batch) = train_loader.iter().next() {
            tracing::info!(
                "First batch ready: input_ids {:?}, labels {:?}",
                batch.input_ids.dims(),
                batch.labels.dims()
            );
            debug_assert_eq!(batch.labels.dims()[1], SUMMARY_MAX_LEN);
        }

        tracing::info!("Preparation complete");
        Ok(())
    }
}

/// Clean both fields of every row into freshly-owned Records:
/// `stories` becomes `text`, `highlights` becomes `summary`.
fn clean_corpus(rows: &[RawStory], normalizer: &TextNormalizer) -> Vec<Record> {
    rows.iter()
        .map(|row| {
            Record::new(
                normalizer.clean(&row.stories),
                normalizer.clean(&row.highlights),
            )
        })
        .collect()
}

/// Write one cleaned split as a headed CSV (text, summary)
fn write_split(dir: &str, name: &str, records: &[Record]) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = std::path::Path::new(dir).join(name);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    tracing::info!("Wrote {} records to '{}'", records.len(), path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus(dir: &std::path::Path, name: &str, rows: usize) -> String {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("corpus file");
        writeln!(file, "stories,highlights").expect("header");
        for i in 0..rows {
            writeln!(
                file,
                "The market rallied strongly on day {i}!,Market rallied day {i}"
            )
            .expect("row");
        }
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out_dir = dir.path().join("out");

        let config = PrepareConfig {
            train_csv: write_corpus(dir.path(), "train.csv", 10),
            test_csv: write_corpus(dir.path(), "test.csv", 4),
            tokenizer_dir: dir.path().join("artifacts").to_string_lossy().into_owned(),
            out_dir: Some(out_dir.to_string_lossy().into_owned()),
            max_len: 32,
            ..Default::default()
        };

        PrepareUseCase::new(config).execute().expect("pipeline");

        // all three cleaned splits and the tokenizer were written
        assert!(out_dir.join("train.csv").exists());
        assert!(out_dir.join("validation.csv").exists());
        assert!(out_dir.join("test.csv").exists());
        assert!(dir.path().join("artifacts/tokenizer.json").exists());
    }

    #[test]
    fn test_cleaned_split_is_normalised() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out_dir = dir.path().join("out");

        let config = PrepareConfig {
            train_csv: write_corpus(dir.path(), "train.csv", 5),
            test_csv: write_corpus(dir.path(), "test.csv", 2),
            tokenizer_dir: dir.path().join("artifacts").to_string_lossy().into_owned(),
            out_dir: Some(out_dir.to_string_lossy().into_owned()),
            max_len: 32,
            ..Default::default()
        };

        PrepareUseCase::new(config).execute().expect("pipeline");

        let written = std::fs::read_to_string(out_dir.join("test.csv")).expect("read");
        // lowercased, punctuation and stopwords gone
        assert!(written.contains("market rallied strongly day"));
        assert!(!written.contains("The market"));
    }
}
