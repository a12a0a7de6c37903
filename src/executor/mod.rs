//! Command executor
//! Executes editor commands on the text document
//!
//! ## executor/ Invariants
//!
//! - Edits with an active selection replace the selection as one change.
//! - Cut and paste touch the document only after the clipboard call succeeded.
//! - Save, quit and resize are editor-level and leave the document alone.

use crate::buffer::TextDocument;
use crate::clipboard::Clipboard;
use crate::command::Command;
use crate::constants::errors;
use crate::error::{EditorError, Result};
use crate::movement::{apply_movement, Movement};
use tracing::debug;

/// Pane-dependent parameters needed to execute a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecContext {
    /// Rows moved by PageUp/PageDown
    pub page_height: usize,
    pub tab_width: usize,
    pub expand_tabs: bool,
}

impl Default for ExecContext {
    fn default() -> Self {
        ExecContext {
            page_height: 1,
            tab_width: 4,
            expand_tabs: true,
        }
    }
}

/// Execute a command on the document.
///
/// Returns `true` if the command changed the cursor, the selection, the
/// text or the clipboard.
pub fn execute_command(
    cmd: Command,
    doc: &mut TextDocument,
    clipboard: &mut dyn Clipboard,
    ctx: &ExecContext,
) -> Result<bool> {
    let changed = match cmd {
        Command::Move { movement, extend } => apply_movement(doc, movement, extend),
        Command::PageUp { extend } => {
            apply_movement(doc, Movement::PageUp(ctx.page_height.max(1)), extend)
        }
        Command::PageDown { extend } => {
            apply_movement(doc, Movement::PageDown(ctx.page_height.max(1)), extend)
        }
        Command::InsertChar(ch) => {
            doc.delete_selection();
            doc.insert_char(ch);
            true
        }
        Command::InsertTab => {
            doc.delete_selection();
            if ctx.expand_tabs {
                doc.insert_text(&" ".repeat(ctx.tab_width.max(1)));
            } else {
                doc.insert_char('\t');
            }
            true
        }
        Command::InsertNewline => {
            doc.delete_selection();
            doc.insert_newline();
            true
        }
        Command::DeleteBackward => {
            doc.delete_selection().is_some() || doc.delete_backward()
        }
        Command::DeleteForward => doc.delete_selection().is_some() || doc.delete_forward(),
        Command::SelectAll => {
            doc.select_all();
            true
        }
        Command::ClearSelection => {
            let had = doc.selection().is_some();
            doc.clear_selection();
            had
        }
        Command::Copy => copy_selection(doc, clipboard)?,
        Command::Cut => {
            if copy_selection(doc, clipboard)? {
                doc.delete_selection();
                true
            } else {
                false
            }
        }
        Command::Paste => {
            let text = clipboard.paste().ok_or_else(|| {
                EditorError::clipboard(errors::CLIPBOARD_EMPTY, "nothing to paste")
            })?;
            debug!(target: "editor", bytes = text.len(), "paste");
            doc.delete_selection();
            doc.insert_text(&text);
            true
        }
        Command::Save | Command::Quit | Command::Resize { .. } => {
            // Handled by the editor
            false
        }
        Command::Noop => false,
    };
    Ok(changed)
}

/// Put the selected text on the clipboard. `Ok(false)` if nothing is selected.
fn copy_selection(doc: &TextDocument, clipboard: &mut dyn Clipboard) -> Result<bool> {
    let Some(text) = doc.selected_text() else {
        return Ok(false);
    };
    if clipboard.copy(&text) {
        Ok(true)
    } else {
        Err(EditorError::clipboard(
            errors::CLIPBOARD_COPY_FAILED,
            "no clipboard backend accepted the text",
        ))
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
