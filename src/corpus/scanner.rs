//! Paragraph break detection
//!
//! A paragraph break is a `\r` followed by any run of `\r` / `\n` bytes
//! (CRLF, lone CR, or blank lines made of either). A lone `\n` that is not
//! preceded by `\r` is ordinary text. The scanner sees one byte at a time with
//! no lookahead, so a break is only committed once the first byte after it
//! arrives.
//!
//! Bytes that fold (`A`-`Z`) never touch the scanner state: they neither
//! commit an open break nor start one. A line made only of capitals therefore
//! joins the break around it, and the next paragraph starts right after the
//! last `\r` / `\n` of the merged run.

use super::fold::is_folded;

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakState {
    /// Inside paragraph text
    #[default]
    Normal,
    /// Inside a break sequence; `end` is the offset just past its last byte
    SawCr { end: usize },
}

/// Byte-at-a-time paragraph break scanner
#[derive(Debug, Default)]
pub struct BreakScanner {
    state: BreakState,
}

impl BreakScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the byte found at `offset`
    ///
    /// Returns the start offset of the next paragraph when this byte closes a
    /// break sequence.
    #[inline]
    pub fn step(&mut self, byte: u8, offset: usize) -> Option<usize> {
        if is_folded(byte) {
            return None;
        }

        match (self.state, byte) {
            (BreakState::Normal, b'\r') => {
                self.state = BreakState::SawCr { end: offset + 1 };
                None
            }
            (BreakState::Normal, _) => None,
            (BreakState::SawCr { .. }, b'\r' | b'\n') => {
                self.state = BreakState::SawCr { end: offset + 1 };
                None
            }
            (BreakState::SawCr { end }, _) => {
                self.state = BreakState::Normal;
                Some(end)
            }
        }
    }

    /// Current state
    pub fn state(&self) -> BreakState {
        self.state
    }

    /// Whether a break is open and waiting for the next paragraph
    pub fn is_open(&self) -> bool {
        matches!(self.state, BreakState::SawCr { .. })
    }
}
