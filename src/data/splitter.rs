// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Shuffles the cleaned train pool with a SEEDED generator and
// carves the validation set out of the training complement:
//
//   |train| + |validation| == |pool|   — always, exactly
//   membership is disjoint             — by construction
//   same seed → same membership        — reproducible runs
//
// The seed matters: every preparation run must produce the
// same partition so experiments stay comparable. thread_rng()
// would silently break that, so the seed is threaded down from
// the configuration (default 42).
//
// Uses Fisher-Yates via rand::seq::SliceRandom with StdRng.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `records` deterministically and split into
/// (train, validation).
///
/// `train_fraction` is the proportion kept for training
/// (0.8 → 80/20). The split index is rounded, then clamped so
/// tiny pools never panic.
pub fn split_train_val<T>(
    mut records: Vec<T>,
    train_fraction: f64,
    seed: u64,
) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    records.shuffle(&mut rng);

    let total = records.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;
    let split_at = split_at.min(total);

    // split_off(n) removes [n..] and returns it:
    // records keeps the training share, val gets the rest
    let val = records.split_off(split_at);

    tracing::debug!(
        "Split pool of {}: {} train, {} validation (seed {})",
        total,
        records.len(),
        val.len(),
        seed,
    );

    (records, val)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sizes_sum_to_pool() {
        let pool: Vec<usize> = (0..100).collect();
        let (train, val) = split_train_val(pool, 0.8, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(val.len(), 20);
    }

    #[test]
    fn test_membership_is_disjoint_and_complete() {
        let pool: Vec<usize> = (0..50).collect();
        let (train, val) = split_train_val(pool, 0.8, 42);

        let mut all: Vec<usize> = train.iter().chain(val.iter()).copied().collect();
        all.sort_unstable();
        // every element exactly once → disjoint and nothing lost
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_reproduces_membership() {
        let (train_a, val_a) = split_train_val((0..200).collect::<Vec<_>>(), 0.8, 42);
        let (train_b, val_b) = split_train_val((0..200).collect::<Vec<_>>(), 0.8, 42);
        assert_eq!(train_a, train_b);
        assert_eq!(val_a, val_b);
    }

    #[test]
    fn test_different_seed_changes_order() {
        let (train_a, _) = split_train_val((0..200).collect::<Vec<_>>(), 0.8, 42);
        let (train_b, _) = split_train_val((0..200).collect::<Vec<_>>(), 0.8, 1337);
        assert_ne!(train_a, train_b);
    }

    #[test]
    fn test_empty_pool() {
        let (train, val) = split_train_val(Vec::<usize>::new(), 0.8, 42);
        assert!(train.is_empty());
        assert!(val.is_empty());
    }

    #[test]
    fn test_full_training_fraction() {
        let (train, val) = split_train_val((0..10).collect::<Vec<_>>(), 1.0, 42);
        assert_eq!(train.len(), 10);
        assert!(val.is_empty());
    }
}
