//! Syntax tokenization
//! Splits a single line into category-tagged spans for highlighting
//!
//! ## syntax/ Invariants
//!
//! - Offsets are character (codepoint) indices into the tokenized line.
//! - A tokenizer's spans are ordered, contiguous and cover the whole line.
//! - Tokenizers never fail: on internal trouble they return one plain span.

use crate::constants::captures;

pub mod lexical;
pub mod loader;
pub mod treesitter;

pub use lexical::{LanguageDef, LexicalTokenizer};
pub use loader::{language_for_path, tokenizer_for_path};

/// Highlight category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plain,
    Keyword,
    Type,
    Function,
    String,
    Number,
    Comment,
    Operator,
    Punctuation,
    Constant,
}

impl TokenKind {
    /// Map a tree-sitter capture name (e.g. `keyword.return`) to a kind
    #[must_use]
    pub fn from_capture(name: &str) -> Self {
        let head = name.split('.').next().unwrap_or(name);
        match head {
            captures::COMMENT => TokenKind::Comment,
            captures::STRING | captures::CHARACTER | captures::ESCAPE => TokenKind::String,
            captures::NUMBER | captures::FLOAT => TokenKind::Number,
            captures::BOOLEAN | captures::CONSTANT => TokenKind::Constant,
            captures::KEYWORD | captures::IMPORT => TokenKind::Keyword,
            captures::TYPE | captures::CONSTRUCTOR => TokenKind::Type,
            captures::FUNCTION | captures::METHOD => TokenKind::Function,
            captures::OPERATOR => TokenKind::Operator,
            captures::PUNCTUATION | captures::DELIMITER => TokenKind::Punctuation,
            _ => TokenKind::Plain,
        }
    }
}

/// Half-open `[start, end)` character range tagged with a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl TokenSpan {
    #[must_use]
    pub const fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        TokenSpan { start, end, kind }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Produces highlight spans for one line at a time
pub trait Tokenizer {
    /// Tokenize `line`; see the module invariants for the span contract
    fn tokenize(&mut self, line: &str) -> Vec<TokenSpan>;

    /// Language name for logs and the header
    fn name(&self) -> &str;
}

/// Single plain span over the whole line (empty for an empty line)
#[must_use]
pub fn plain_spans(line: &str) -> Vec<TokenSpan> {
    let len = line.chars().count();
    if len == 0 {
        Vec::new()
    } else {
        vec![TokenSpan::new(0, len, TokenKind::Plain)]
    }
}

/// Check that `spans` cover `[0, line_len)` in order with no gaps
#[must_use]
pub fn covers_line(spans: &[TokenSpan], line_len: usize) -> bool {
    let mut expected = 0;
    for span in spans {
        if span.start != expected || span.is_empty() {
            return false;
        }
        expected = span.end;
    }
    expected == line_len
}

/// Collapse neighbouring spans of the same kind
#[must_use]
pub fn merge_adjacent(spans: Vec<TokenSpan>) -> Vec<TokenSpan> {
    let mut merged: Vec<TokenSpan> = Vec::with_capacity(spans.len());
    for span in spans.into_iter().filter(|s| !s.is_empty()) {
        match merged.last_mut() {
            Some(last) if last.kind == span.kind && last.end == span.start => last.end = span.end,
            _ => merged.push(span),
        }
    }
    merged
}

/// Build contiguous spans from one kind per character
#[must_use]
pub fn spans_from_kinds(kinds: &[TokenKind]) -> Vec<TokenSpan> {
    let spans = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| TokenSpan::new(i, i + 1, kind))
        .collect();
    merge_adjacent(spans)
}

/// Tokenizer for files without a known language
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTokenizer;

impl Tokenizer for PlainTokenizer {
    fn tokenize(&mut self, line: &str) -> Vec<TokenSpan> {
        plain_spans(line)
    }

    fn name(&self) -> &str {
        "plain"
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
