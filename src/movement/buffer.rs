//! Cursor movement over a text document
//!
//! [`target_position`] is pure; [`apply_movement`] writes the result back
//! into the document's cursor and selection.

use super::boundaries::{word_end_right, word_start_left};
use crate::buffer::{Position, TextDocument};

/// A cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    Up,
    Down,
    WordLeft,
    WordRight,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
    /// Move up by the given number of rows
    PageUp(usize),
    /// Move down by the given number of rows
    PageDown(usize),
}

/// Compute where `movement` takes the cursor, without mutating anything
#[must_use]
pub fn target_position(doc: &TextDocument, movement: Movement) -> Position {
    let cursor = doc.clamp(doc.cursor());
    let Position { row, col } = cursor;
    let last_row = doc.line_count() - 1;

    match movement {
        Movement::Left => {
            if col > 0 {
                Position::new(row, col - 1)
            } else if row > 0 {
                Position::new(row - 1, doc.line_len(row - 1))
            } else {
                cursor
            }
        }
        Movement::Right => {
            if col < doc.line_len(row) {
                Position::new(row, col + 1)
            } else if row < last_row {
                Position::new(row + 1, 0)
            } else {
                cursor
            }
        }
        Movement::Up => vertical(doc, row.saturating_sub(1), col),
        Movement::Down => vertical(doc, (row + 1).min(last_row), col),
        Movement::PageUp(rows) => vertical(doc, row.saturating_sub(rows.max(1)), col),
        Movement::PageDown(rows) => vertical(doc, row.saturating_add(rows.max(1)).min(last_row), col),
        Movement::WordLeft => {
            if col == 0 && row > 0 {
                Position::new(row - 1, doc.line_len(row - 1))
            } else {
                Position::new(row, word_start_left(doc.line(row), col))
            }
        }
        Movement::WordRight => {
            if col >= doc.line_len(row) && row < last_row {
                Position::new(row + 1, 0)
            } else {
                Position::new(row, word_end_right(doc.line(row), col))
            }
        }
        Movement::LineStart => Position::new(row, 0),
        Movement::LineEnd => Position::new(row, doc.line_len(row)),
        Movement::DocumentStart => Position::new(0, 0),
        Movement::DocumentEnd => doc.last_position(),
    }
}

fn vertical(doc: &TextDocument, row: usize, col: usize) -> Position {
    Position::new(row, col.min(doc.line_len(row)))
}

/// Move the cursor.
///
/// With `extend`, the anchor is set at the current cursor if no selection is
/// active and the active end follows the cursor. Without it, any selection
/// is cleared.
///
/// Returns `true` if the cursor moved.
pub fn apply_movement(doc: &mut TextDocument, movement: Movement, extend: bool) -> bool {
    let before = doc.cursor();
    if extend {
        doc.begin_extend();
    } else {
        doc.clear_selection();
    }

    let target = target_position(doc, movement);
    doc.set_cursor(target);

    if extend {
        doc.extend_to_cursor();
    }
    doc.cursor() != before
}
