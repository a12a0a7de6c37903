//! String-based word boundary detection
//!
//! Positions are character indices into a single line.

use super::classify::is_word_char;

/// Find the start of the word to the left of `pos`
///
/// Separators immediately left of `pos` are skipped first, then the word
/// they precede.
///
/// # Examples
/// ```
/// use seditor::movement::word_start_left;
///
/// assert_eq!(word_start_left("hello world", 11), 6);
/// assert_eq!(word_start_left("hello world", 6), 0);
/// assert_eq!(word_start_left("foo->bar", 5), 0);
/// ```
#[must_use]
pub fn word_start_left(line: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }

    let chars: Vec<char> = line.chars().collect();
    let mut idx = pos.min(chars.len());

    // 1. Skip separators backwards
    while idx > 0 && !is_word_char(chars[idx - 1]) {
        idx -= 1;
    }

    // 2. Walk back to the first character of the word
    while idx > 0 && is_word_char(chars[idx - 1]) {
        idx -= 1;
    }

    idx
}

/// Find the end of the word at or to the right of `pos`
///
/// # Examples
/// ```
/// use seditor::movement::word_end_right;
///
/// assert_eq!(word_end_right("hello world", 0), 5);
/// assert_eq!(word_end_right("hello world", 5), 11);
/// assert_eq!(word_end_right("foo->bar", 3), 8);
/// ```
#[must_use]
pub fn word_end_right(line: &str, pos: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    if pos >= len {
        return len;
    }

    let mut idx = pos;

    // 1. Skip separators
    while idx < len && !is_word_char(chars[idx]) {
        idx += 1;
    }

    // 2. Skip the word
    while idx < len && is_word_char(chars[idx]) {
        idx += 1;
    }

    idx
}
