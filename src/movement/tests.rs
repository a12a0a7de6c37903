//! Tests for movement semantics

use super::*;
use crate::buffer::{Position, TextDocument};

fn doc_at(lines: &[&str], row: usize, col: usize) -> TextDocument {
    let mut d = TextDocument::from_text(&lines.join("\n"));
    d.set_cursor(Position::new(row, col));
    d
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_word_chars() {
    assert!(is_word_char('a'));
    assert!(is_word_char('Z'));
    assert!(is_word_char('7'));
    assert!(is_word_char('_'));
    assert!(is_word_char('ж'));
    assert!(!is_word_char(' '));
    assert!(!is_word_char('-'));
    assert!(!is_word_char('.'));
    assert_eq!(classify_char('('), CharClass::Separator);
}

// ============================================================================
// String boundaries
// ============================================================================

#[test]
fn test_word_start_left_from_end() {
    let text = "hello world";
    assert_eq!(word_start_left(text, 11), 6);
    assert_eq!(word_start_left(text, 6), 0);
    assert_eq!(word_start_left(text, 0), 0);
}

#[test]
fn test_word_start_left_middle_of_word() {
    assert_eq!(word_start_left("hello world", 8), 6);
}

#[test]
fn test_word_start_left_only_separators() {
    assert_eq!(word_start_left("   ", 3), 0);
    assert_eq!(word_start_left("-- x", 2), 0);
}

#[test]
fn test_word_start_left_clamps_past_end() {
    assert_eq!(word_start_left("abc", 10), 0);
}

#[test]
fn test_word_end_right() {
    let text = "hello world";
    assert_eq!(word_end_right(text, 0), 5);
    assert_eq!(word_end_right(text, 3), 5);
    assert_eq!(word_end_right(text, 5), 11);
    assert_eq!(word_end_right(text, 11), 11);
}

#[test]
fn test_word_end_right_trailing_separators() {
    assert_eq!(word_end_right("abc  ", 3), 5);
}

#[test]
fn test_underscore_joins_words() {
    assert_eq!(word_end_right("snake_case rest", 0), 10);
    assert_eq!(word_start_left("snake_case", 10), 0);
}

// ============================================================================
// Character movement
// ============================================================================

#[test]
fn test_move_right_wraps_to_next_line() {
    let mut d = doc_at(&["abc", "defg"], 0, 3);
    assert!(apply_movement(&mut d, Movement::Right, false));
    assert_eq!(d.cursor(), Position::new(1, 0));
}

#[test]
fn test_move_left_wraps_to_previous_line_end() {
    let mut d = doc_at(&["abc", "defg"], 1, 0);
    apply_movement(&mut d, Movement::Left, false);
    assert_eq!(d.cursor(), Position::new(0, 3));
}

#[test]
fn test_move_left_at_document_start_stays() {
    let mut d = doc_at(&["abc"], 0, 0);
    assert!(!apply_movement(&mut d, Movement::Left, false));
    assert_eq!(d.cursor(), Position::new(0, 0));
}

#[test]
fn test_move_right_at_document_end_stays() {
    let mut d = doc_at(&["abc"], 0, 3);
    assert!(!apply_movement(&mut d, Movement::Right, false));
}

#[test]
fn test_move_down_clamps_column() {
    let mut d = doc_at(&["abcdef", "xy"], 0, 5);
    apply_movement(&mut d, Movement::Down, false);
    assert_eq!(d.cursor(), Position::new(1, 2));
}

#[test]
fn test_move_up_at_top_stays_on_row() {
    let mut d = doc_at(&["abc", "def"], 0, 2);
    apply_movement(&mut d, Movement::Up, false);
    assert_eq!(d.cursor(), Position::new(0, 2));
}

#[test]
fn test_move_down_at_bottom_stays_on_row() {
    let mut d = doc_at(&["abc", "def"], 1, 1);
    apply_movement(&mut d, Movement::Down, false);
    assert_eq!(d.cursor(), Position::new(1, 1));
}

#[test]
fn test_page_movement_clamps() {
    let lines: Vec<String> = (0..30).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut d = doc_at(&refs, 5, 2);
    apply_movement(&mut d, Movement::PageDown(10), false);
    assert_eq!(d.cursor().row, 15);
    apply_movement(&mut d, Movement::PageDown(100), false);
    assert_eq!(d.cursor().row, 29);
    apply_movement(&mut d, Movement::PageUp(100), false);
    assert_eq!(d.cursor().row, 0);
}

#[test]
fn test_line_and_document_edges() {
    let mut d = doc_at(&["abc", "defgh"], 1, 2);
    apply_movement(&mut d, Movement::LineEnd, false);
    assert_eq!(d.cursor(), Position::new(1, 5));
    apply_movement(&mut d, Movement::LineStart, false);
    assert_eq!(d.cursor(), Position::new(1, 0));
    apply_movement(&mut d, Movement::DocumentStart, false);
    assert_eq!(d.cursor(), Position::new(0, 0));
    apply_movement(&mut d, Movement::DocumentEnd, false);
    assert_eq!(d.cursor(), Position::new(1, 5));
}

// ============================================================================
// Word movement
// ============================================================================

#[test]
fn test_word_left_twice() {
    let mut d = doc_at(&["hello world"], 0, 11);
    apply_movement(&mut d, Movement::WordLeft, false);
    assert_eq!(d.cursor().col, 6);
    apply_movement(&mut d, Movement::WordLeft, false);
    assert_eq!(d.cursor().col, 0);
}

#[test]
fn test_word_left_wraps_at_line_start() {
    let mut d = doc_at(&["first", "second"], 1, 0);
    apply_movement(&mut d, Movement::WordLeft, false);
    assert_eq!(d.cursor(), Position::new(0, 5));
}

#[test]
fn test_word_right_wraps_at_line_end() {
    let mut d = doc_at(&["first", "second"], 0, 5);
    apply_movement(&mut d, Movement::WordRight, false);
    assert_eq!(d.cursor(), Position::new(1, 0));
    apply_movement(&mut d, Movement::WordRight, false);
    assert_eq!(d.cursor(), Position::new(1, 6));
}

// ============================================================================
// Selection-extending movement
// ============================================================================

#[test]
fn test_extend_sets_anchor_once() {
    let mut d = doc_at(&["abcdef"], 0, 1);
    apply_movement(&mut d, Movement::Right, true);
    apply_movement(&mut d, Movement::Right, true);
    let sel = d.selection().unwrap();
    assert_eq!(sel.anchor, Position::new(0, 1));
    assert_eq!(sel.active, Position::new(0, 3));
    assert_eq!(d.selected_text().unwrap(), "bc");
}

#[test]
fn test_extend_backwards_normalizes_range() {
    let mut d = doc_at(&["abc", "def"], 1, 2);
    apply_movement(&mut d, Movement::Up, true);
    apply_movement(&mut d, Movement::Left, true);
    let (start, end) = d.selection_range().unwrap();
    assert!(start <= end);
    assert_eq!(start, Position::new(0, 1));
    assert_eq!(end, Position::new(1, 2));
}

#[test]
fn test_plain_arrow_collapses_selection() {
    let mut d = doc_at(&["l0", "l1", "l2", "l3", "l4"], 0, 0);
    apply_movement(&mut d, Movement::Down, true);
    apply_movement(&mut d, Movement::Down, true);
    assert!(d.has_selection());
    let arrival = target_position(&d, Movement::Down);

    apply_movement(&mut d, Movement::Down, false);
    assert!(d.selection().is_none());
    assert_eq!(d.cursor(), arrival);
}

#[test]
fn test_target_position_is_pure() {
    let d = doc_at(&["abc"], 0, 1);
    let _ = target_position(&d, Movement::LineEnd);
    assert_eq!(d.cursor(), Position::new(0, 1));
}
