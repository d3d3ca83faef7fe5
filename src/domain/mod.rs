// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits defining the core concepts of
// the preparation pipeline.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or CSV parsing
//   - NO tokenizer-specific code
//   - Only plain Rust structs, enums, and traits
//
// Keeping this layer pure means the corpus format, the cleaning
// rules and the tokenizer can all change without touching the
// definitions of what a story or a record IS.

// One raw corpus row as read from disk
pub mod story;

// One cleaned (text, summary) pair ready for tokenisation
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;
