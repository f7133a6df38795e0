//! Suffix array lookup
//!
//! Binary search over the sorted suffixes gives the contiguous range of
//! suffixes starting with a pattern in O(m log n).

use super::types::*;

/// An in-memory suffix array together with the text it indexes
///
/// Immutable once built; lookups only read, so a single instance can be
/// shared across threads.
pub struct SuffixArray {
    /// Indexed text (already case-folded by the caller)
    text: Vec<u8>,
    /// Sorted suffix positions
    suffixes: Vec<SuffixEntry>,
}

impl SuffixArray {
    pub(crate) fn from_parts(text: Vec<u8>, suffixes: Vec<SuffixEntry>) -> Self {
        debug_assert_eq!(text.len(), suffixes.len());
        Self { text, suffixes }
    }

    /// Number of suffixes (equals text length)
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Get text starting at a position
    #[inline]
    fn text_at(&self, pos: SuffixEntry) -> &[u8] {
        &self.text[pos as usize..]
    }

    /// Search for a pattern prefix
    ///
    /// Returns the range [lo, hi) of indices in the suffix array where all
    /// suffixes start with `pattern`. Only valid for patterns no longer than
    /// `MAX_COMPARE`; see [`matches`](Self::matches) for the general case.
    fn range(&self, pattern: &[u8]) -> (usize, usize) {
        if pattern.is_empty() || self.suffixes.is_empty() {
            return (0, 0);
        }

        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        (lo, hi)
    }

    /// Find first index where suffix starts with pattern (or would if inserted)
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        self.suffixes.partition_point(|&pos| {
            let suffix = self.text_at(pos);
            let cmp_len = pattern.len().min(suffix.len());
            &suffix[..cmp_len] < pattern
        })
    }

    /// Find first index at or after `start` where suffix does NOT start with
    /// pattern
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        start
            + self.suffixes[start..]
                .partition_point(|&pos| self.text_at(pos).starts_with(pattern))
    }

    /// Iterate every starting offset of `pattern`, in suffix order
    pub fn matches<'a>(&'a self, pattern: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        let key = &pattern[..pattern.len().min(MAX_COMPARE)];
        let verify = pattern.len() > MAX_COMPARE;
        let (lo, hi) = self.range(key);

        self.suffixes[lo..hi]
            .iter()
            .filter(move |&&pos| !verify || self.text_at(pos).starts_with(pattern))
            .map(|&pos| pos as usize)
    }

    /// Return starting offsets of `pattern`
    ///
    /// `limit` caps the number of offsets; `None` returns all of them. The
    /// order is the suffix order, which is stable for a given text.
    pub fn lookup(&self, pattern: &[u8], limit: Option<usize>) -> Vec<usize> {
        self.matches(pattern)
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    /// Get the number of matches for a pattern
    pub fn count(&self, pattern: &[u8]) -> usize {
        if pattern.len() <= MAX_COMPARE {
            let (lo, hi) = self.range(pattern);
            hi - lo
        } else {
            self.matches(pattern).count()
        }
    }

    /// Check if pattern exists in the text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.matches(pattern).next().is_some()
    }

    /// Get statistics about this suffix array
    pub fn stats(&self) -> SuffixArrayStats {
        let entry_size = std::mem::size_of::<SuffixEntry>() as u64;
        SuffixArrayStats {
            text_size: self.text.len(),
            suffix_count: self.suffixes.len() as u64,
            memory_bytes: self.text.len() as u64 + self.suffixes.len() as u64 * entry_size,
        }
    }
}
