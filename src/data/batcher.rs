// ============================================================
// Layer 4 — Summary Batcher
// ============================================================
// Implements Burn's Batcher trait to stack individual
// SummaryEncodings into tensor batches for the training loop.
//
// Input:  Vec of N encodings, each pre-padded to fixed lengths
// Output: SummaryBatch with
//           input_ids / attention_mask  [N, max_len]
//           labels                      [N, SUMMARY_MAX_LEN]
//
// Because every encoding already has exactly the same length
// (the adapter's invariant), batching is a flatten + reshape —
// no dynamic padding happens here.
//
// Batch composition, shuffling and epoch iteration all belong
// to Burn's DataLoader; this type only stacks what it is given.

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::dataset::{SummaryEncoding, SUMMARY_MAX_LEN};

// ─── SummaryBatch ─────────────────────────────────────────────────────────────
/// A batch of summarization samples ready for a seq2seq forward
/// pass. B is the Burn backend, generic so the same batcher
/// works on any device.
#[derive(Debug, Clone)]
pub struct SummaryBatch<B: Backend> {
    /// Source token ids — shape: [batch_size, max_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// 1 = real token, 0 = padding — shape: [batch_size, max_len]
    pub attention_mask: Tensor<B, 2, Int>,

    /// Target summary ids — shape: [batch_size, SUMMARY_MAX_LEN]
    pub labels: Tensor<B, 2, Int>,
}

// ─── SummaryBatcher ───────────────────────────────────────────────────────────
/// Holds the target device so tensors land on the right
/// backend (CPU ndarray here; dataset prep needs no GPU).
#[derive(Clone, Debug)]
pub struct SummaryBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> SummaryBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<SummaryEncoding, SummaryBatch<B>> for SummaryBatcher<B> {
    fn batch(&self, items: Vec<SummaryEncoding>) -> SummaryBatch<B> {
        let batch_size = items.len();
        // All rows share the adapter's fixed lengths
        let seq_len = items[0].input_ids.len();

        let input_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.input_ids.iter().map(|&x| x as i32))
            .collect();

        let mask_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.attention_mask.iter().map(|&x| x as i32))
            .collect();

        let label_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.labels.iter().map(|&x| x as i32))
            .collect();

        let input_ids = Tensor::<B, 1, Int>::from_ints(input_flat.as_slice(), &self.device)
            .reshape([batch_size, seq_len]);

        let attention_mask = Tensor::<B, 1, Int>::from_ints(mask_flat.as_slice(), &self.device)
            .reshape([batch_size, seq_len]);

        let labels = Tensor::<B, 1, Int>::from_ints(label_flat.as_slice(), &self.device)
            .reshape([batch_size, SUMMARY_MAX_LEN]);

        SummaryBatch {
            input_ids,
            attention_mask,
            labels,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    fn encoding(fill: u32, max_len: usize) -> SummaryEncoding {
        SummaryEncoding {
            input_ids: vec![fill; max_len],
            attention_mask: vec![1; max_len],
            labels: vec![fill; SUMMARY_MAX_LEN],
        }
    }

    #[test]
    fn test_batch_tensor_shapes() {
        let device = burn::backend::ndarray::NdArrayDevice::Cpu;
        let batcher = SummaryBatcher::<TestBackend>::new(device);

        let batch = batcher.batch(vec![encoding(1, 32), encoding(2, 32), encoding(3, 32)]);

        assert_eq!(batch.input_ids.dims(), [3, 32]);
        assert_eq!(batch.attention_mask.dims(), [3, 32]);
        assert_eq!(batch.labels.dims(), [3, SUMMARY_MAX_LEN]);
    }
}
