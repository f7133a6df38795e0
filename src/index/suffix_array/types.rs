//! Types for suffix array indexing

use serde::Serialize;

/// Suffix array entry - position in the indexed text
pub type SuffixEntry = u64;

/// Maximum number of bytes compared when ordering two suffixes
///
/// Suffixes whose first `MAX_COMPARE` bytes are equal are ordered by position.
/// Lookups for longer patterns narrow by this prefix and verify the rest.
pub const MAX_COMPARE: usize = 256;

/// Configuration for suffix array building
#[derive(Debug, Clone, Serialize)]
pub struct SuffixArrayConfig {
    /// Texts at least this long are sorted in parallel (default: 100_000 bytes)
    pub parallel_threshold: usize,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100_000,
        }
    }
}

/// Statistics about a suffix array
#[derive(Debug, Clone, Serialize)]
pub struct SuffixArrayStats {
    pub text_size: usize,
    pub suffix_count: u64,
    /// Approximate heap footprint (text + suffix entries)
    pub memory_bytes: u64,
}
