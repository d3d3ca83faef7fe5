// ============================================================
// Layer 4 — Summarization Dataset Adapter
// ============================================================
// Wraps one split of cleaned records and exposes it through
// Burn's Dataset trait: a random-access view where get(index)
// produces a fully tokenised, fixed-length encoding.
//
// Length contract (the invariant the training loop relies on):
//   input_ids.len()      == max_len   (default 256)
//   attention_mask.len() == max_len
//   labels.len()         == SUMMARY_MAX_LEN (90, fixed)
// regardless of how long or short the underlying strings are —
// short sequences are padded, long ones truncated.
//
// Encodings are computed fresh on every call. No cache: the
// adapter is pure per index, which is what lets an external
// loader pull items from worker threads in any order.
//
// The tokenizer is an external collaborator. If it arrives
// without a padding token the adapter registers "[PAD]" at
// construction time, so encoding can never fail for lack of a
// pad id later.

use std::sync::Arc;

use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};
use tokenizers::{AddedToken, PaddingDirection, Tokenizer};

use crate::domain::record::Record;

/// Target summaries are always encoded to exactly this length
pub const SUMMARY_MAX_LEN: usize = 90;

/// The padding token registered when the tokenizer lacks one
pub const PAD_TOKEN: &str = "[PAD]";

/// One fully tokenised and padded sample: encoder input plus
/// decoder target, flat integer sequences of fixed length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryEncoding {
    /// Source token ids — exactly max_len entries
    pub input_ids: Vec<u32>,

    /// 1 for real tokens, 0 for padding — exactly max_len entries
    pub attention_mask: Vec<u32>,

    /// Target summary token ids — exactly SUMMARY_MAX_LEN entries
    pub labels: Vec<u32>,
}

/// Random-access view over one split, encoding on demand.
pub struct SummaryDataset {
    records: Vec<Record>,
    tokenizer: Arc<Tokenizer>,
    max_len: usize,
    pad_id: u32,
    pad_right: bool,
}

impl SummaryDataset {
    /// Wrap a split. Repairs the tokenizer's padding token up
    /// front if it is missing.
    pub fn new(records: Vec<Record>, mut tokenizer: Tokenizer, max_len: usize) -> Self {
        let pad_id = ensure_pad_token(&mut tokenizer);
        let pad_right = pads_on_right(&tokenizer);
        Self {
            records,
            tokenizer: Arc::new(tokenizer),
            max_len,
            pad_id,
            pad_right,
        }
    }

    /// Number of records in the wrapped split
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Encode the record at `index`, or None when the index is
    /// outside [0, len) — the boundary signal, never a default.
    pub fn item(&self, index: usize) -> Option<SummaryEncoding> {
        let record = self.records.get(index)?;

        let (input_ids, attention_mask) = self.encode_field(&record.text, self.max_len)?;
        let (labels, _) = self.encode_field(&record.summary, SUMMARY_MAX_LEN)?;

        Some(SummaryEncoding {
            input_ids,
            attention_mask,
            labels,
        })
    }

    /// Tokenise one field to exactly `target_len` ids.
    ///
    /// The raw string is first coerced to single-spaced form
    /// (split on any whitespace, rejoin with one space), then
    /// encoded, truncated, and padded on the tokenizer's side.
    fn encode_field(&self, text: &str, target_len: usize) -> Option<(Vec<u32>, Vec<u32>)> {
        let squeezed = text.split_whitespace().collect::<Vec<_>>().join(" ");

        let encoding = match self.tokenizer.encode(squeezed.as_str(), true) {
            Ok(encoding) => encoding,
            Err(e) => {
                tracing::warn!("Tokenisation failed, skipping record: {e}");
                return None;
            }
        };

        let mut ids: Vec<u32> = encoding.get_ids().to_vec();
        ids.truncate(target_len);
        let mut mask = vec![1u32; ids.len()];

        while ids.len() < target_len {
            if self.pad_right {
                ids.push(self.pad_id);
                mask.push(0);
            } else {
                ids.insert(0, self.pad_id);
                mask.insert(0, 0);
            }
        }

        Some((ids, mask))
    }
}

impl Dataset<SummaryEncoding> for SummaryDataset {
    fn get(&self, index: usize) -> Option<SummaryEncoding> {
        self.item(index)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// ─── Tokenizer repair helpers ────────────────────────────────────────────────

/// Return the pad id the adapter should use, registering a
/// "[PAD]" special token first when the tokenizer defines
/// neither padding parameters nor a pad entry of its own.
pub fn ensure_pad_token(tokenizer: &mut Tokenizer) -> u32 {
    if let Some(params) = tokenizer.get_padding() {
        return params.pad_id;
    }
    if let Some(id) = tokenizer.token_to_id(PAD_TOKEN) {
        return id;
    }
    tokenizer.add_special_tokens(&[AddedToken::from(PAD_TOKEN, true)]);
    tokenizer.token_to_id(PAD_TOKEN).unwrap_or(0)
}

/// Which side the collaborator pads on. Right unless the
/// tokenizer's own padding parameters say otherwise.
pub fn pads_on_right(tokenizer: &Tokenizer) -> bool {
    tokenizer
        .get_padding()
        .map(|params| matches!(params.direction, PaddingDirection::Right))
        .unwrap_or(true)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokenizers::models::wordlevel::WordLevel;
    use tokenizers::pre_tokenizers::whitespace::Whitespace;

    /// A six-word vocabulary with no padding token — exactly
    /// the degenerate collaborator the adapter must repair.
    fn tiny_tokenizer() -> Tokenizer {
        let mut vocab: HashMap<String, u32> = HashMap::new();
        for (i, word) in ["[UNK]", "the", "cat", "sat", "mat", "dog", "ran"]
            .iter()
            .enumerate()
        {
            vocab.insert((*word).to_string(), i as u32);
        }
        let model = WordLevel::builder()
            .vocab(vocab)
            .unk_token("[UNK]".into())
            .build()
            .expect("word-level model");
        let mut tokenizer = Tokenizer::new(model);
        tokenizer.with_pre_tokenizer(Whitespace {});
        tokenizer
    }

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("the cat sat", "cat"),
            Record::new("the dog ran", "dog ran"),
        ]
    }

    #[test]
    fn test_encoding_lengths_are_exact() {
        let dataset = SummaryDataset::new(sample_records(), tiny_tokenizer(), 16);
        let encoding = dataset.item(0).expect("in range");
        assert_eq!(encoding.input_ids.len(), 16);
        assert_eq!(encoding.attention_mask.len(), 16);
        assert_eq!(encoding.labels.len(), SUMMARY_MAX_LEN);
    }

    #[test]
    fn test_short_input_is_padded_with_zero_mask() {
        let dataset = SummaryDataset::new(sample_records(), tiny_tokenizer(), 16);
        let encoding = dataset.item(0).expect("in range");
        // "the cat sat" → 3 real tokens, 13 pads
        let real: u32 = encoding.attention_mask.iter().sum();
        assert_eq!(real, 3);
    }

    #[test]
    fn test_long_input_is_truncated() {
        let long_text = "the cat sat ".repeat(40);
        let records = vec![Record::new(long_text, "cat")];
        let dataset = SummaryDataset::new(records, tiny_tokenizer(), 8);
        let encoding = dataset.item(0).expect("in range");
        assert_eq!(encoding.input_ids.len(), 8);
        // fully real — nothing padded after truncation
        assert!(encoding.attention_mask.iter().all(|&m| m == 1));
    }

    #[test]
    fn test_out_of_range_index_is_none() {
        let dataset = SummaryDataset::new(sample_records(), tiny_tokenizer(), 16);
        assert!(dataset.item(2).is_none());
        assert!(Dataset::get(&dataset, 99).is_none());
        assert_eq!(Dataset::len(&dataset), 2);
    }

    #[test]
    fn test_missing_pad_token_is_repaired() {
        let mut tokenizer = tiny_tokenizer();
        assert!(tokenizer.token_to_id(PAD_TOKEN).is_none());
        let pad_id = ensure_pad_token(&mut tokenizer);
        assert_eq!(tokenizer.token_to_id(PAD_TOKEN), Some(pad_id));

        // repair is idempotent — second call returns the same id
        assert_eq!(ensure_pad_token(&mut tokenizer), pad_id);
    }

    #[test]
    fn test_padding_side_defaults_to_right() {
        assert!(pads_on_right(&tiny_tokenizer()));
    }

    #[test]
    fn test_item_is_deterministic_per_index() {
        // no cache, but pure: the same index encodes identically
        let dataset = SummaryDataset::new(sample_records(), tiny_tokenizer(), 16);
        let a = dataset.item(1).expect("in range");
        let b = dataset.item(1).expect("in range");
        assert_eq!(a.input_ids, b.input_ids);
        assert_eq!(a.labels, b.labels);
    }
}
