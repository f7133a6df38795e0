//! Paragraph search engine
//!
//! Holds the original corpus, its paragraph boundaries and a suffix array
//! over the case-folded copy. Built once; every query afterwards is a pure
//! read, so a `Searcher` can be shared behind an `Arc` without locking.

use super::excerpt::Excerpt;
use crate::corpus::{fold, Corpus, ParagraphBoundaries};
use crate::index::suffix_array::{
    SuffixArray, SuffixArrayBuilder, SuffixArrayConfig, SuffixArrayStats,
};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Case-insensitive substring search returning paragraph excerpts
pub struct Searcher {
    /// Original corpus bytes
    text: Vec<u8>,
    paragraphs: ParagraphBoundaries,
    /// Suffix array over the folded corpus
    index: SuffixArray,
}

impl Searcher {
    /// Build a searcher from a loaded corpus
    pub fn new(corpus: Corpus) -> Self {
        Self::with_config(corpus, SuffixArrayConfig::default())
    }

    /// Build with explicit suffix array settings
    pub fn with_config(corpus: Corpus, config: SuffixArrayConfig) -> Self {
        let (text, lowered, paragraphs) = corpus.into_parts();

        let start = Instant::now();
        let index = SuffixArrayBuilder::new(config).build(lowered);
        info!(
            bytes = text.len(),
            paragraphs = paragraphs.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "suffix array built"
        );

        Self {
            text,
            paragraphs,
            index,
        }
    }

    /// Load the corpus at `path` and build the index
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let corpus = Corpus::open(path)?;
        info!(
            path = %path.display(),
            bytes = corpus.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "corpus loaded"
        );

        Ok(Self::new(corpus))
    }

    /// Find every occurrence of `query` with its enclosing paragraph
    ///
    /// Matching is ASCII case-insensitive. Results follow index order and are
    /// capped at `limit` when given. An empty query finds nothing.
    pub fn find(&self, query: &str, limit: Option<usize>) -> Vec<Excerpt<'_>> {
        if query.is_empty() {
            return Vec::new();
        }

        let pattern = fold(query.as_bytes());
        let len = pattern.len();

        self.index
            .lookup(&pattern, limit)
            .into_iter()
            .map(|idx| {
                let paragraph = self.paragraphs.resolve(idx);
                if !paragraph.contains(idx) {
                    debug!(idx, "no enclosing paragraph for match");
                }
                Excerpt::new(&self.text, paragraph, idx, len)
            })
            .collect()
    }

    /// Search and render one HTML excerpt per match
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_with_limit(query, None)
    }

    /// Search with an optional cap on the number of excerpts
    pub fn search_with_limit(&self, query: &str, limit: Option<usize>) -> Vec<String> {
        let start = Instant::now();
        let results: Vec<String> = self
            .find(query, limit)
            .iter()
            .map(Excerpt::render_html)
            .collect();

        debug!(
            query,
            matches = results.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "search"
        );
        results
    }

    /// Number of occurrences of `query`, without rendering
    pub fn count(&self, query: &str) -> usize {
        if query.is_empty() {
            return 0;
        }
        self.index.count(&fold(query.as_bytes()))
    }

    /// Original corpus bytes
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn paragraphs(&self) -> &ParagraphBoundaries {
        &self.paragraphs
    }

    pub fn stats(&self) -> SearcherStats {
        SearcherStats {
            corpus_bytes: self.text.len(),
            paragraph_count: self.paragraphs.len(),
            index: self.index.stats(),
        }
    }
}

/// Statistics about a built searcher
#[derive(Debug, Clone, Serialize)]
pub struct SearcherStats {
    pub corpus_bytes: usize,
    pub paragraph_count: usize,
    pub index: SuffixArrayStats,
}
