//! Tests for command executor

use crate::buffer::{Position, TextDocument};
use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::command::Command;
use crate::constants::errors;
use crate::error::ErrorType;
use crate::executor::{execute_command, ExecContext};
use crate::movement::Movement;

/// Clipboard that is always unavailable
struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn copy(&mut self, _text: &str) -> bool {
        false
    }

    fn paste(&mut self) -> Option<String> {
        None
    }
}

fn run(cmd: Command, doc: &mut TextDocument) -> bool {
    let mut clipboard = MemoryClipboard::new();
    execute_command(cmd, doc, &mut clipboard, &ExecContext::default()).unwrap()
}

fn doc_at(text: &str, row: usize, col: usize) -> TextDocument {
    let mut doc = TextDocument::from_text(text);
    doc.set_cursor(Position::new(row, col));
    doc
}

#[test]
fn test_execute_move_right_wraps() {
    let mut doc = doc_at("abc\ndefg", 0, 3);
    assert!(run(Command::Move { movement: Movement::Right, extend: false }, &mut doc));
    assert_eq!(doc.cursor(), Position::new(1, 0));
}

#[test]
fn test_execute_move_at_edge_reports_no_change() {
    let mut doc = doc_at("abc", 0, 0);
    assert!(!run(Command::Move { movement: Movement::Left, extend: false }, &mut doc));
}

#[test]
fn test_execute_page_uses_context_height() {
    let mut doc = TextDocument::from_text(&"x\n".repeat(30));
    let mut clipboard = MemoryClipboard::new();
    let ctx = ExecContext {
        page_height: 10,
        ..ExecContext::default()
    };
    execute_command(Command::PageDown { extend: false }, &mut doc, &mut clipboard, &ctx).unwrap();
    assert_eq!(doc.cursor().row, 10);
    execute_command(Command::PageDown { extend: true }, &mut doc, &mut clipboard, &ctx).unwrap();
    assert_eq!(doc.cursor().row, 20);
    assert_eq!(
        doc.selection_range(),
        Some((Position::new(10, 0), Position::new(20, 0)))
    );
    execute_command(Command::PageUp { extend: false }, &mut doc, &mut clipboard, &ctx).unwrap();
    assert_eq!(doc.cursor().row, 10);
    assert!(!doc.has_selection());
}

#[test]
fn test_execute_insert_newline_splits() {
    let mut doc = doc_at("abc\ndefg", 1, 2);
    run(Command::InsertNewline, &mut doc);
    assert_eq!(doc.lines(), ["abc", "de", "fg"]);
    assert_eq!(doc.cursor(), Position::new(2, 0));
}

#[test]
fn test_execute_typing_replaces_selection() {
    let mut doc = doc_at("hello world", 0, 0);
    doc.set_selection(Position::new(0, 0), Position::new(0, 5));
    run(Command::InsertChar('J'), &mut doc);
    assert_eq!(doc.lines(), ["J world"]);
    assert_eq!(doc.cursor(), Position::new(0, 1));
    assert!(!doc.has_selection());
}

#[test]
fn test_execute_backspace_deletes_selection_only() {
    let mut doc = doc_at("one\ntwo\nthree", 0, 0);
    doc.set_selection(Position::new(2, 2), Position::new(0, 1));
    assert!(run(Command::DeleteBackward, &mut doc));
    assert_eq!(doc.lines(), ["oree"]);
    assert_eq!(doc.cursor(), Position::new(0, 1));
}

#[test]
fn test_execute_delete_forward_merges_lines() {
    let mut doc = doc_at("ab\ncd", 0, 2);
    assert!(run(Command::DeleteForward, &mut doc));
    assert_eq!(doc.lines(), ["abcd"]);
    doc.set_cursor(Position::new(0, 4));
    assert!(!run(Command::DeleteForward, &mut doc));
}

#[test]
fn test_execute_tab_expands() {
    let mut doc = doc_at("x", 0, 0);
    let mut clipboard = MemoryClipboard::new();
    let ctx = ExecContext {
        tab_width: 2,
        ..ExecContext::default()
    };
    execute_command(Command::InsertTab, &mut doc, &mut clipboard, &ctx).unwrap();
    assert_eq!(doc.lines(), ["  x"]);

    let literal = ExecContext {
        expand_tabs: false,
        ..ExecContext::default()
    };
    execute_command(Command::InsertTab, &mut doc, &mut clipboard, &literal).unwrap();
    assert_eq!(doc.lines(), ["  \tx"]);
    assert_eq!(doc.cursor(), Position::new(0, 3));
}

#[test]
fn test_execute_select_all_and_clear() {
    let mut doc = doc_at("ab\ncd", 0, 0);
    run(Command::SelectAll, &mut doc);
    assert_eq!(
        doc.selection_range(),
        Some((Position::new(0, 0), Position::new(1, 2)))
    );
    assert!(run(Command::ClearSelection, &mut doc));
    assert!(!doc.has_selection());
    assert!(!run(Command::ClearSelection, &mut doc));
}

#[test]
fn test_execute_copy_keeps_document() {
    let mut doc = doc_at("hello world", 0, 0);
    doc.set_selection(Position::new(0, 6), Position::new(0, 11));
    let mut clipboard = MemoryClipboard::new();
    let changed =
        execute_command(Command::Copy, &mut doc, &mut clipboard, &ExecContext::default()).unwrap();
    assert!(changed);
    assert_eq!(clipboard.contents(), Some("world"));
    assert_eq!(doc.lines(), ["hello world"]);
    assert!(doc.has_selection());
}

#[test]
fn test_execute_copy_without_selection_is_noop() {
    let mut doc = doc_at("hello", 0, 0);
    let mut clipboard = MemoryClipboard::with_text("old");
    let changed =
        execute_command(Command::Copy, &mut doc, &mut clipboard, &ExecContext::default()).unwrap();
    assert!(!changed);
    assert_eq!(clipboard.contents(), Some("old"));
}

#[test]
fn test_execute_cut_then_paste() {
    let mut doc = doc_at("alpha beta", 0, 0);
    doc.set_selection(Position::new(0, 0), Position::new(0, 6));
    let mut clipboard = MemoryClipboard::new();
    let ctx = ExecContext::default();
    execute_command(Command::Cut, &mut doc, &mut clipboard, &ctx).unwrap();
    assert_eq!(doc.lines(), ["beta"]);
    assert_eq!(clipboard.contents(), Some("alpha "));

    doc.set_cursor(Position::new(0, 4));
    execute_command(Command::Paste, &mut doc, &mut clipboard, &ctx).unwrap();
    assert_eq!(doc.lines(), ["betaalpha "]);
}

#[test]
fn test_execute_multiline_paste_splits_lines() {
    let mut doc = doc_at("[]", 0, 1);
    let mut clipboard = MemoryClipboard::with_text("one\ntwo\r\nthree");
    execute_command(Command::Paste, &mut doc, &mut clipboard, &ExecContext::default()).unwrap();
    assert_eq!(doc.lines(), ["[one", "two", "three]"]);
    assert_eq!(doc.cursor(), Position::new(2, 5));
}

#[test]
fn test_execute_paste_replaces_selection() {
    let mut doc = doc_at("keep drop keep", 0, 0);
    doc.set_selection(Position::new(0, 5), Position::new(0, 9));
    let mut clipboard = MemoryClipboard::with_text("swap");
    execute_command(Command::Paste, &mut doc, &mut clipboard, &ExecContext::default()).unwrap();
    assert_eq!(doc.lines(), ["keep swap keep"]);
}

#[test]
fn test_execute_failed_cut_leaves_document_unchanged() {
    let mut doc = doc_at("alpha beta", 0, 0);
    doc.set_selection(Position::new(0, 0), Position::new(0, 5));
    let revision = doc.revision();
    let err = execute_command(Command::Cut, &mut doc, &mut BrokenClipboard, &ExecContext::default())
        .unwrap_err();
    assert_eq!(err.kind, ErrorType::Clipboard);
    assert_eq!(err.code, errors::CLIPBOARD_COPY_FAILED);
    assert_eq!(doc.lines(), ["alpha beta"]);
    assert_eq!(doc.revision(), revision);
    assert!(doc.has_selection());
}

#[test]
fn test_execute_failed_paste_leaves_document_unchanged() {
    let mut doc = doc_at("alpha beta", 0, 0);
    doc.set_selection(Position::new(0, 0), Position::new(0, 5));
    let err =
        execute_command(Command::Paste, &mut doc, &mut BrokenClipboard, &ExecContext::default())
            .unwrap_err();
    assert_eq!(err.code, errors::CLIPBOARD_EMPTY);
    assert_eq!(doc.lines(), ["alpha beta"]);
    assert!(doc.has_selection());
}

#[test]
fn test_execute_editor_level_commands_do_nothing() {
    let mut doc = doc_at("abc", 0, 1);
    let revision = doc.revision();
    assert!(!run(Command::Save, &mut doc));
    assert!(!run(Command::Quit, &mut doc));
    assert!(!run(Command::Resize { cols: 10, rows: 5 }, &mut doc));
    assert!(!run(Command::Noop, &mut doc));
    assert_eq!(doc.revision(), revision);
    assert_eq!(doc.cursor(), Position::new(0, 1));
}
