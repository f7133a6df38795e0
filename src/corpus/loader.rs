//! Corpus loader
//!
//! Streams the source once and produces, in the same pass:
//! 1. The original bytes (for display)
//! 2. A case-folded copy with identical length and offsets (for indexing)
//! 3. The paragraph boundary offsets

use super::fold::fold_byte;
use super::paragraphs::ParagraphBoundaries;
use super::scanner::BreakScanner;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

/// Read buffer size for streaming the corpus
const READ_BUFFER_SIZE: usize = 65536;

/// A loaded corpus
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Original bytes
    text: Vec<u8>,
    /// Case-folded copy, byte-aligned with `text`
    lowered: Vec<u8>,
    paragraphs: ParagraphBoundaries,
}

impl Corpus {
    /// Load a corpus from a file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open corpus {}", path.display()))?;
        let size_hint = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

        Self::read(file, size_hint)
            .with_context(|| format!("Failed to read corpus {}", path.display()))
    }

    /// Load a corpus from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read(reader, 0)
    }

    /// Load a corpus from bytes already in memory
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut loader = CorpusLoader::with_capacity(bytes.len());
        loader.feed(bytes);
        loader.finish()
    }

    fn read<R: Read>(reader: R, size_hint: usize) -> Result<Self> {
        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, reader);
        let mut loader = CorpusLoader::with_capacity(size_hint);

        loop {
            let chunk = match reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if chunk.is_empty() {
                break;
            }

            let consumed = chunk.len();
            loader.feed(chunk);
            reader.consume(consumed);
        }

        Ok(loader.finish())
    }

    /// Original bytes
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Case-folded bytes
    pub fn lowered(&self) -> &[u8] {
        &self.lowered
    }

    pub fn paragraphs(&self) -> &ParagraphBoundaries {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split into `(text, lowered, paragraphs)`
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>, ParagraphBoundaries) {
        (self.text, self.lowered, self.paragraphs)
    }
}

/// Incremental single-pass loader state
struct CorpusLoader {
    text: Vec<u8>,
    lowered: Vec<u8>,
    boundaries: Vec<usize>,
    scanner: BreakScanner,
}

impl CorpusLoader {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            text: Vec::with_capacity(capacity),
            lowered: Vec::with_capacity(capacity),
            boundaries: vec![0],
            scanner: BreakScanner::new(),
        }
    }

    fn feed(&mut self, chunk: &[u8]) {
        let base = self.text.len();
        self.text.extend_from_slice(chunk);
        self.lowered.extend(chunk.iter().map(|&b| fold_byte(b)));

        for (i, &b) in chunk.iter().enumerate() {
            if let Some(start) = self.scanner.step(b, base + i) {
                self.boundaries.push(start);
            }
        }
    }

    /// A break still open at end of input has no paragraph after it and is
    /// dropped.
    fn finish(self) -> Corpus {
        let corpus_len = self.text.len();
        Corpus {
            text: self.text,
            lowered: self.lowered,
            paragraphs: ParagraphBoundaries::new(self.boundaries, corpus_len),
        }
    }
}
