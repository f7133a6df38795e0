//! Paragraph boundaries and position-to-paragraph resolution

/// Half-open byte range `[open, close)` of a paragraph in the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub open: usize,
    pub close: usize,
}

impl Paragraph {
    /// Placeholder used when a position has no enclosing paragraph
    pub const EMPTY: Paragraph = Paragraph { open: 0, close: 0 };

    pub fn contains(&self, pos: usize) -> bool {
        self.open <= pos && pos < self.close
    }

    pub fn len(&self) -> usize {
        self.close.saturating_sub(self.open)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sorted paragraph start offsets
///
/// Always starts with 0, strictly increasing, every offset `<= corpus_len`.
#[derive(Debug, Clone)]
pub struct ParagraphBoundaries {
    offsets: Vec<usize>,
    corpus_len: usize,
}

impl ParagraphBoundaries {
    /// Build from offsets produced by the loader
    ///
    /// Offsets must already be strictly increasing and bounded by
    /// `corpus_len`; a missing leading 0 is inserted.
    pub(crate) fn new(mut offsets: Vec<usize>, corpus_len: usize) -> Self {
        if offsets.first() != Some(&0) {
            offsets.insert(0, 0);
        }
        debug_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(offsets.last().is_none_or(|&last| last <= corpus_len));
        Self {
            offsets,
            corpus_len,
        }
    }

    /// Boundary offsets, first element is always 0
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of paragraphs
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Length of the corpus the boundaries were computed over
    pub fn corpus_len(&self) -> usize {
        self.corpus_len
    }

    /// Find the paragraph containing `pos`
    ///
    /// Returns `None` when `pos` lies outside the corpus. For every
    /// `pos < corpus_len` the result satisfies `open <= pos < close`.
    pub fn enclosing(&self, pos: usize) -> Option<Paragraph> {
        if pos >= self.corpus_len {
            return None;
        }

        // Number of paragraph starts at or before pos
        let i = self.offsets.partition_point(|&start| start <= pos);
        let open = *self.offsets.get(i.checked_sub(1)?)?;
        let close = self.offsets.get(i).copied().unwrap_or(self.corpus_len);

        Some(Paragraph { open, close })
    }

    /// Like [`enclosing`](Self::enclosing) but degrades to an empty paragraph
    /// at offset 0 instead of failing
    pub fn resolve(&self, pos: usize) -> Paragraph {
        self.enclosing(pos).unwrap_or(Paragraph::EMPTY)
    }
}
