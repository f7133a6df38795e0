//! Suffix array builder
//!
//! Builds a sorted suffix array over a case-folded text using a parallel
//! sort. The resulting array enables O(m log n) substring lookup.

use super::lookup::SuffixArray;
use super::types::*;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Builder for constructing suffix arrays
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Build the suffix array, taking ownership of the text
    ///
    /// This is the main computation - sorts all suffixes, in parallel for
    /// large texts.
    pub fn build(&self, text: Vec<u8>) -> SuffixArray {
        if text.is_empty() {
            return SuffixArray::from_parts(text, Vec::new());
        }

        let suffixes = build_suffix_array(&text, self.config.parallel_threshold);
        SuffixArray::from_parts(text, suffixes)
    }
}

/// Build suffix array by sorting positions
///
/// 1. Creates array of all suffix positions [0, 1, 2, ..., n-1]
/// 2. Sorts positions by comparing the suffixes they point to
/// 3. Uses rayon once the text reaches `parallel_threshold`
///
/// Time: O(n log n) comparisons, each bounded by `MAX_COMPARE`
fn build_suffix_array(text: &[u8], parallel_threshold: usize) -> Vec<SuffixEntry> {
    let n = text.len();
    let mut sa: Vec<SuffixEntry> = (0..n as SuffixEntry).collect();

    if n >= parallel_threshold {
        sa.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    } else {
        sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    }

    sa
}

/// Compare two suffixes lexicographically on their first `MAX_COMPARE` bytes
///
/// Ties fall back to position so the order is total and the same on every
/// build.
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> Ordering {
    let len_a = (text.len() - a).min(MAX_COMPARE);
    let len_b = (text.len() - b).min(MAX_COMPARE);

    let suffix_a = &text[a..a + len_a];
    let suffix_b = &text[b..b + len_b];

    suffix_a.cmp(suffix_b).then(a.cmp(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_array_correctness() {
        let sa = build_suffix_array(b"banana", usize::MAX);

        // 5: a
        // 3: ana
        // 1: anana
        // 0: banana
        // 4: na
        // 2: nana
        assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text: Vec<u8> = b"to be or not to be, that is the question. "
            .iter()
            .cycle()
            .take(5_000)
            .copied()
            .collect();

        let sequential = build_suffix_array(&text, usize::MAX);
        let parallel = build_suffix_array(&text, 0);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_long_repeats_ordered_by_position() {
        // Every suffix shares a prefix longer than MAX_COMPARE with its neighbors
        let text = vec![b'a'; MAX_COMPARE * 3];
        let sa = build_suffix_array(&text, usize::MAX);

        let capped_start = text.len() - MAX_COMPARE;
        let expected_head: Vec<SuffixEntry> = (0..=capped_start as SuffixEntry).collect();
        // Suffixes shorter than MAX_COMPARE sort first, shortest first
        assert_eq!(sa[..MAX_COMPARE - 1].first(), Some(&(text.len() as SuffixEntry - 1)));
        assert_eq!(&sa[MAX_COMPARE - 1..], expected_head.as_slice());
    }

    #[test]
    fn test_build_empty() {
        let sa = SuffixArrayBuilder::with_defaults().build(Vec::new());
        assert!(sa.is_empty());
    }
}
