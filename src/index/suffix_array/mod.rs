//! Suffix array indexing module
//!
//! Provides O(m log n) exact substring lookup over the case-folded corpus.
//!
//! ## Architecture
//!
//! - `builder`: Sorts all suffixes of the text (parallel for large texts)
//! - `lookup`: Binary-search lookup of every occurrence of a pattern
//! - `types`: Core type definitions

pub mod builder;
pub mod lookup;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use lookup::SuffixArray;
pub use types::{SuffixArrayConfig, SuffixArrayStats};
