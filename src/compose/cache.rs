//! Per-line token cache
//!
//! Entries are keyed by row and validated against the line text, so an
//! edited line is re-tokenized on the next frame. A line-count mismatch
//! means rows shifted; the whole cache is dropped rather than patched.

use crate::syntax::{covers_line, plain_spans, TokenSpan, Tokenizer};
use tracing::debug;

#[derive(Debug, Clone)]
struct CachedLine {
    text: String,
    tokens: Vec<TokenSpan>,
}

#[derive(Debug, Default)]
pub struct HighlightCache {
    /// `None` means the row needs tokenizing
    lines: Vec<Option<CachedLine>>,
}

impl HighlightCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Match the cache to the document's line count.
    ///
    /// Returns true if the cache was rebuilt.
    pub fn sync(&mut self, line_count: usize) -> bool {
        if self.lines.len() == line_count {
            return false;
        }
        if !self.lines.is_empty() {
            debug!(
                target: "compose",
                cached = self.lines.len(),
                line_count,
                "line count changed, recomputing highlights"
            );
        }
        self.lines.clear();
        self.lines.resize(line_count, None);
        true
    }

    /// Cached tokens for `row`, only if they were computed for `text`
    #[must_use]
    pub fn get(&self, row: usize, text: &str) -> Option<&[TokenSpan]> {
        self.lines
            .get(row)
            .and_then(Option::as_ref)
            .filter(|cached| cached.text == text)
            .map(|cached| cached.tokens.as_slice())
    }

    pub fn insert(&mut self, row: usize, text: &str, tokens: Vec<TokenSpan>) {
        if row >= self.lines.len() {
            self.lines.resize(row + 1, None);
        }
        self.lines[row] = Some(CachedLine {
            text: text.to_string(),
            tokens,
        });
    }

    /// Tokens for `row`, running `tokenizer` on a miss.
    ///
    /// Tokenizer output that does not cover the line is replaced by a
    /// single plain span.
    pub fn tokens(&mut self, row: usize, text: &str, tokenizer: &mut dyn Tokenizer) -> &[TokenSpan] {
        if self.get(row, text).is_none() {
            let mut tokens = tokenizer.tokenize(text);
            if !covers_line(&tokens, text.chars().count()) {
                debug!(target: "compose", row, tokenizer = tokenizer.name(), "invalid token spans");
                tokens = plain_spans(text);
            }
            self.insert(row, text, tokens);
        }
        self.lines
            .get(row)
            .and_then(Option::as_ref)
            .map(|cached| cached.tokens.as_slice())
            .unwrap_or_default()
    }
}
