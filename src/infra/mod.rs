// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the pipeline but owned by no
// single step:
//
//   tokenizer_store.rs — loads a dropped-in tokenizer.json or
//                        builds a word-level vocabulary from
//                        the cleaned corpus, so training and
//                        inference share one vocabulary.
//
//   metrics.rs         — the accuracy helper, the only metric
//                        computed on this side of the fence.

/// Tokenizer loading, building and saving
pub mod tokenizer_store;

/// Accuracy metric
pub mod metrics;
