// ============================================================
// Layer 5 — Tokenizer Store
// ============================================================
// Supplies the tokenizer collaborator for the dataset adapter.
//
// Preferred path: a pretrained seq2seq tokenizer file
// (tokenizer.json exported from a BART/T5 checkpoint) dropped
// into the artifacts directory — that reproduces the vocabulary
// the fine-tuned model expects.
//
// Fallback path: when no file exists, build a word-level
// vocabulary from the cleaned corpus itself and write it out in
// HuggingFace tokenizer-JSON form, which Tokenizer::from_file
// can read back. Special tokens take the first five ids, corpus
// words follow by descending frequency.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use tokenizers::Tokenizer;

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: PathBuf::from(dir.into()),
        }
    }

    /// Load an existing tokenizer.json, or build one from the
    /// cleaned corpus texts when none is present.
    pub fn load_or_build(&self, texts: &[String], vocab_size: usize) -> Result<Tokenizer> {
        let path = self.dir.join("tokenizer.json");
        if path.exists() {
            tracing::info!("Loading tokenizer from '{}'", path.display());
            self.load()
        } else {
            tracing::info!("Building word-level tokenizer (vocab_size={})", vocab_size);
            self.build_and_save(texts, vocab_size)
        }
    }

    /// Load a previously saved tokenizer JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.dir.join("tokenizer.json");
        Tokenizer::from_file(&path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })
    }

    /// Count word frequencies over the cleaned corpus, keep the
    /// top entries, and write a word-level tokenizer JSON.
    fn build_and_save(&self, texts: &[String], vocab_size: usize) -> Result<Tokenizer> {
        std::fs::create_dir_all(&self.dir).ok();

        // The corpus is already lowercased and punctuation-free,
        // so frequency counting is a plain whitespace walk.
        let mut freq: HashMap<&str, usize> = HashMap::new();
        for text in texts {
            for word in text.split_whitespace() {
                *freq.entry(word).or_insert(0) += 1;
            }
        }

        // Keep the most frequent words, reserving five ids for
        // the special tokens below.
        let mut words: Vec<(&str, usize)> = freq.into_iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        words.truncate(vocab_size.saturating_sub(5));

        let mut vocab = serde_json::json!({
            "[PAD]":  0,
            "[UNK]":  1,
            "[CLS]":  2,
            "[SEP]":  3,
            "[MASK]": 4,
        });

        let mut next_id = 5usize;
        for (word, _) in &words {
            if vocab.get(*word).is_none() {
                vocab[*word] = serde_json::json!(next_id);
                next_id += 1;
            }
        }

        let tokenizer_json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [
                {"id": 0, "content": "[PAD]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 1, "content": "[UNK]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 2, "content": "[CLS]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 3, "content": "[SEP]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 4, "content": "[MASK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
            ],
            "normalizer": {
                "type": "Lowercase"
            },
            "pre_tokenizer": {
                "type": "Whitespace"
            },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab,
                "unk_token": "[UNK]"
            }
        });

        let path = self.dir.join("tokenizer.json");
        std::fs::write(&path, serde_json::to_string_pretty(&tokenizer_json)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!(
            "Tokenizer with {} entries saved to '{}'",
            next_id,
            path.display()
        );

        Tokenizer::from_file(&path).map_err(|e| anyhow::anyhow!("Cannot reload tokenizer: {e}"))
    }
}
