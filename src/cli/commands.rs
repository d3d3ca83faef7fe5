// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `prepare` and `clean`, and all
// their configurable flags. clap's derive macros generate the
// help text, error messages and type conversions.

use clap::{Args, Subcommand};
use crate::application::prepare_use_case::PrepareConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean, split and tokenise the summarization corpora
    Prepare(PrepareArgs),

    /// Run the cleaning pipeline over one string and print it
    Clean(CleanArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// CSV corpus feeding the train/validation pool
    #[arg(long, default_value = "dailymail_stories.csv")]
    pub train_csv: String,

    /// CSV corpus feeding the test split
    #[arg(long, default_value = "cnn_stories.csv")]
    pub test_csv: String,

    /// Directory holding (or receiving) tokenizer.json
    #[arg(long, default_value = "artifacts")]
    pub tokenizer_dir: String,

    /// Write the cleaned splits as CSVs into this directory
    #[arg(long)]
    pub out_dir: Option<String>,

    /// Maximum source sequence length in tokens
    #[arg(long, default_value_t = 256)]
    pub max_len: usize,

    /// Samples per training batch
    #[arg(long, default_value_t = 3)]
    pub train_batch_size: usize,

    /// Samples per validation/test batch
    #[arg(long, default_value_t = 3)]
    pub valid_batch_size: usize,

    /// Number of passes the downstream trainer will make
    #[arg(long, default_value_t = 1)]
    pub epochs: usize,

    /// Learning rate recorded for the downstream trainer
    #[arg(long, default_value_t = 1e-5)]
    pub lr: f64,

    /// Dropout probability recorded for the downstream trainer
    #[arg(long, default_value_t = 0.5)]
    pub dropout: f64,

    /// Whether the downstream encoder runs bidirectionally
    #[arg(long, default_value_t = false)]
    pub bidirectional: bool,

    /// Share of the pool kept for training (rest is validation)
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,

    /// Seed for the split shuffle and loader shuffling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Row cap applied to the train pool before processing
    #[arg(long, default_value_t = 100_000)]
    pub train_cap: usize,

    /// Row cap applied to the test pool before processing
    #[arg(long, default_value_t = 10_000)]
    pub test_cap: usize,

    /// Vocabulary budget when building a tokenizer from scratch
    #[arg(long, default_value_t = 30_522)]
    pub vocab_size: usize,

    /// Enable the optional Porter stemming stage
    #[arg(long, default_value_t = false)]
    pub stemming: bool,

    /// Enable the optional lemmatisation stage
    #[arg(long, default_value_t = false)]
    pub lemmatize: bool,
}

/// Convert CLI PrepareArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 — the
/// application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            train_csv:        a.train_csv,
            test_csv:         a.test_csv,
            tokenizer_dir:    a.tokenizer_dir,
            out_dir:          a.out_dir,
            max_len:          a.max_len,
            train_batch_size: a.train_batch_size,
            valid_batch_size: a.valid_batch_size,
            epochs:           a.epochs,
            lr:               a.lr,
            dropout:          a.dropout,
            bidirectional:    a.bidirectional,
            train_fraction:   a.train_fraction,
            seed:             a.seed,
            train_cap:        a.train_cap,
            test_cap:         a.test_cap,
            vocab_size:       a.vocab_size,
            stemming:         a.stemming,
            lemmatize:        a.lemmatize,
        }
    }
}

/// All arguments for the `clean` command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// The raw text to run through the cleaning pipeline
    #[arg(long)]
    pub text: String,

    /// Also apply the optional stemming stage
    #[arg(long, default_value_t = false)]
    pub stemming: bool,

    /// Also apply the optional lemmatisation stage
    #[arg(long, default_value_t = false)]
    pub lemmatize: bool,
}
