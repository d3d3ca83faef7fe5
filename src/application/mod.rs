// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal: turn
// two raw corpus files into cleaned, split, tokenised data.
//
// Rules for this layer:
//   - No cleaning rules or tokenizer math here
//   - No UI or printing here (that's Layer 1)
//   - No direct file parsing (that's Layer 4 and 5)
//   - Only workflow coordination

// The corpus preparation workflow
pub mod prepare_use_case;
