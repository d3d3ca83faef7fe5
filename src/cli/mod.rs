// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — runs the full corpus preparation pipeline
//   2. `clean`   — cleans a single string, for eyeballing the
//                  pipeline's behaviour on one document

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CleanArgs, Commands, PrepareArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "news-sum-prep",
    version = "0.1.0",
    about = "Clean, split and tokenise a news-summarisation corpus for seq2seq fine-tuning."
)]
pub struct Cli {
    /// The subcommand to run (prepare or clean)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use
    /// case. The CLI layer only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Clean(args)   => Self::run_clean(args),
        }
    }

    /// Handles the `prepare` subcommand
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Starting corpus preparation");
        let use_case = PrepareUseCase::new(args.into());
        use_case.execute()?;

        println!("Preparation complete.");
        Ok(())
    }

    /// Handles the `clean` subcommand
    fn run_clean(args: CleanArgs) -> Result<()> {
        use crate::data::cleaner::{CleanOptions, TextNormalizer};

        let normalizer = TextNormalizer::with_options(CleanOptions {
            stemming: args.stemming,
            lemmatize: args.lemmatize,
            strip_emoji: false,
        });
        println!("{}", normalizer.clean(&args.text));
        Ok(())
    }
}
