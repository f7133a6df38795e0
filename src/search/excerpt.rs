//! Excerpts: one match with its surrounding paragraph

use crate::corpus::Paragraph;

/// Opening delimiter of a rendered excerpt
pub const EXCERPT_OPEN: &str = "<tr>============================================<pre>";
/// Closing delimiter of a rendered excerpt
pub const EXCERPT_CLOSE: &str = "</pre></tr>";
/// Highlight markers around the matched span
pub const HIGHLIGHT_OPEN: &str = "<b>";
pub const HIGHLIGHT_CLOSE: &str = "</b>";

/// A match borrowed from the corpus
///
/// `start..end` is the matched span, `paragraph` the context around it.
/// Every slice accessor is clamped to the corpus, so an excerpt built from a
/// degraded paragraph renders without panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt<'a> {
    text: &'a [u8],
    pub paragraph: Paragraph,
    pub start: usize,
    pub end: usize,
}

impl<'a> Excerpt<'a> {
    pub(crate) fn new(text: &'a [u8], paragraph: Paragraph, start: usize, len: usize) -> Self {
        let end = start.saturating_add(len).min(text.len());
        Self {
            text,
            paragraph,
            start: start.min(end),
            end,
        }
    }

    /// Paragraph text before the match
    pub fn before(&self) -> &'a [u8] {
        self.slice(self.paragraph.open, self.start)
    }

    /// The matched span, exactly as it appears in the corpus
    pub fn matched(&self) -> &'a [u8] {
        self.slice(self.start, self.end)
    }

    /// Paragraph text after the match
    pub fn after(&self) -> &'a [u8] {
        self.slice(self.end, self.paragraph.close)
    }

    /// Whether the paragraph could not be resolved around the match
    pub fn is_degraded(&self) -> bool {
        !self.paragraph.contains(self.start)
    }

    fn slice(&self, from: usize, to: usize) -> &'a [u8] {
        if from < to {
            self.text.get(from..to).unwrap_or_default()
        } else {
            &[]
        }
    }

    /// Render as the HTML fragment served to the browser
    ///
    /// Corpus bytes are inserted as-is (lossy UTF-8), not escaped.
    pub fn render_html(&self) -> String {
        let (before, matched, after) = (self.before(), self.matched(), self.after());
        let mut out = String::with_capacity(
            EXCERPT_OPEN.len()
                + EXCERPT_CLOSE.len()
                + HIGHLIGHT_OPEN.len()
                + HIGHLIGHT_CLOSE.len()
                + before.len()
                + matched.len()
                + after.len(),
        );

        out.push_str(EXCERPT_OPEN);
        out.push_str(&String::from_utf8_lossy(before));
        out.push_str(HIGHLIGHT_OPEN);
        out.push_str(&String::from_utf8_lossy(matched));
        out.push_str(HIGHLIGHT_CLOSE);
        out.push_str(&String::from_utf8_lossy(after));
        out.push_str(EXCERPT_CLOSE);
        out
    }
}
