//! Movement semantics for all navigation operations
//!
//! ## Design
//!
//! Word movement splits characters into two classes:
//! - **Word**: alphanumeric characters and underscore
//! - **Separator**: everything else (whitespace, punctuation, operators)
//!
//! This means:
//! - `hello_world` is ONE word
//! - `foo->bar` is two words separated by `->`
//!
//! ## Modules
//!
//! - [`classify`] - Character classification
//! - [`boundaries`] - String-based word boundary detection
//! - [`buffer`] - Cursor movement over a [`TextDocument`](crate::buffer::TextDocument)
//!
//! ## movement/ Invariants
//!
//! - Movement functions only touch the cursor and the selection.
//! - Every resulting position is clamped into the document.
//! - A plain movement clears the selection; an extending one keeps the anchor.

pub mod boundaries;
pub mod buffer;
pub mod classify;

// Re-export commonly used types
pub use boundaries::{word_end_right, word_start_left};
pub use buffer::{apply_movement, target_position, Movement};
pub use classify::{classify_char, is_word_char, CharClass};

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
