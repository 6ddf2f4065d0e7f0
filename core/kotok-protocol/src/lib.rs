//! Fundamental types shared across the kotok workspace: the Korean
//! part-of-speech tagset, tag sets and policies, analyzer output and the
//! lexicon archive format.

pub mod pos;
pub mod model;

// Re-export core types for convenience
pub use pos::{PosPolicy, PosSet, PosTag};
pub use model::{AnalyzedToken, Lexicon};
