//! Character classification for movement operations

/// Character categories for word movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Alphanumeric characters and underscore
    Word,
    /// Whitespace, punctuation, and everything else
    Separator,
}

/// Classify a character for word boundary detection
#[must_use]
pub fn classify_char(c: char) -> CharClass {
    if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Separator
    }
}

/// Check if a character is part of a word
#[must_use]
pub fn is_word_char(c: char) -> bool {
    classify_char(c) == CharClass::Word
}
