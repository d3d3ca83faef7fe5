// ============================================================
// Layer 5 — Metrics
// ============================================================
// The only metric in scope for the preparation pipeline is
// plain accuracy — everything else (loss curves, ROUGE) belongs
// to the training side.

/// Fraction of positions where prediction equals truth.
/// Empty input or mismatched lengths score 0.0.
pub fn accuracy(y_true: &[u32], y_pred: &[u32]) -> f64 {
    if y_true.is_empty() || y_true.len() != y_pred.len() {
        return 0.0;
    }
    let hits = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    hits as f64 / y_true.len() as f64
}
