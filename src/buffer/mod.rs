//! Text document
//! Owns the line store, the cursor, and the selection anchor
//!
//! ## buffer/ Invariants
//!
//! - `lines` is never empty; an empty document is one empty line.
//! - The cursor is always inside the document: `row < line_count()` and
//!   `col <= line_len(row)`.
//! - Columns are character (codepoint) indices, never byte offsets.
//! - Every content mutation bumps the revision and drops the selection.
//! - The buffer has no rendering knowledge.

pub mod position;

pub use position::{Position, Selection};

/// Byte offset of character column `col` in `line`, clamped to the line end
pub(crate) fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(byte, _)| byte)
}

/// Character length of a line
pub(crate) fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Line-oriented text document with cursor and selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
    cursor: Position,
    selection: Option<Selection>,
    /// Incremented on every content change
    revision: u64,
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDocument {
    /// Create an empty document (one empty line)
    #[must_use]
    pub fn new() -> Self {
        TextDocument {
            lines: vec![String::new()],
            cursor: Position::default(),
            selection: None,
            revision: 0,
        }
    }

    /// Build a document from file content.
    ///
    /// Content is split on `\n`; a trailing terminator yields one extra
    /// empty line. A `\r` before each `\n` is dropped.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        TextDocument {
            lines,
            cursor: Position::default(),
            selection: None,
            revision: 0,
        }
    }

    /// Join the lines back with `\n` separators
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line text, or an empty string for out-of-range rows
    #[must_use]
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", String::as_str)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Character length of `row`, 0 for out-of-range rows
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        char_len(self.line(row))
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move the cursor, clamping it into the document
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp(pos);
    }

    /// Clamp an arbitrary position into the document
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.lines.len() - 1);
        let col = pos.col.min(self.line_len(row));
        Position { row, col }
    }

    #[must_use]
    pub fn last_position(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.line_len(row))
    }

    // --- Selection ---

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Normalized selection range, `None` when nothing is selected
    #[must_use]
    pub fn selection_range(&self) -> Option<(Position, Position)> {
        self.selection
            .filter(|sel| !sel.is_empty())
            .map(|sel| sel.range())
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }

    /// Start an extend-gesture: the anchor is fixed at the cursor if no
    /// selection is active yet
    pub fn begin_extend(&mut self) {
        if self.selection.is_none() {
            self.selection = Some(Selection::new(self.cursor, self.cursor));
        }
    }

    /// Move the active end of the selection to the cursor
    pub fn extend_to_cursor(&mut self) {
        if let Some(sel) = self.selection.as_mut() {
            sel.active = self.cursor;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Replace the selection; both ends are clamped and the cursor follows
    /// the active end
    pub fn set_selection(&mut self, anchor: Position, active: Position) {
        let anchor = self.clamp(anchor);
        let active = self.clamp(active);
        self.selection = Some(Selection::new(anchor, active));
        self.cursor = active;
    }

    pub fn select_all(&mut self) {
        let end = self.last_position();
        self.set_selection(Position::default(), end);
    }

    /// Text between two positions (order-independent)
    #[must_use]
    pub fn text_in_range(&self, a: Position, b: Position) -> String {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let start = self.clamp(start);
        let end = self.clamp(end);

        if start.row == end.row {
            let line = self.line(start.row);
            return line[byte_offset(line, start.col)..byte_offset(line, end.col)].to_string();
        }

        let mut out = String::new();
        let first = self.line(start.row);
        out.push_str(&first[byte_offset(first, start.col)..]);
        for row in start.row + 1..end.row {
            out.push('\n');
            out.push_str(self.line(row));
        }
        out.push('\n');
        let last = self.line(end.row);
        out.push_str(&last[..byte_offset(last, end.col)]);
        out
    }

    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        self.selection_range()
            .map(|(start, end)| self.text_in_range(start, end))
    }

    // --- Mutations ---

    fn touch(&mut self) {
        self.revision += 1;
        self.selection = None;
    }

    /// Splice `c` into the current line at the cursor
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        self.cursor = self.clamp(self.cursor);
        let Position { row, col } = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_offset(line, col);
        line.insert(at, c);
        self.cursor.col += 1;
        self.touch();
    }

    /// Split the current line at the cursor
    pub fn insert_newline(&mut self) {
        self.cursor = self.clamp(self.cursor);
        let Position { row, col } = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_offset(line, col);
        let tail = line.split_off(at);
        self.lines.insert(row + 1, tail);
        self.cursor = Position::new(row + 1, 0);
        self.touch();
    }

    /// Insert arbitrary text (may contain newlines) at the cursor
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.cursor = self.clamp(self.cursor);
        let Position { row, col } = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_offset(line, col);
        let tail = line.split_off(at);

        let mut pieces = text.split('\n').map(|p| p.strip_suffix('\r').unwrap_or(p));
        // split always yields at least one piece
        let first = pieces.next().unwrap_or_default();
        self.lines[row].push_str(first);

        let mut cur_row = row;
        for piece in pieces {
            cur_row += 1;
            self.lines.insert(cur_row, piece.to_string());
        }

        let end_col = char_len(&self.lines[cur_row]);
        self.lines[cur_row].push_str(&tail);
        self.cursor = Position::new(cur_row, end_col);
        self.touch();
    }

    /// Backspace. Returns `true` if anything was removed.
    pub fn delete_backward(&mut self) -> bool {
        self.cursor = self.clamp(self.cursor);
        let Position { row, col } = self.cursor;
        if col > 0 {
            let line = &mut self.lines[row];
            let at = byte_offset(line, col - 1);
            line.remove(at);
            self.cursor.col -= 1;
            self.touch();
            true
        } else if row > 0 {
            let current = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            let join_col = char_len(prev);
            prev.push_str(&current);
            self.cursor = Position::new(row - 1, join_col);
            self.touch();
            true
        } else {
            false
        }
    }

    /// Delete key. Returns `true` if anything was removed.
    pub fn delete_forward(&mut self) -> bool {
        self.cursor = self.clamp(self.cursor);
        let Position { row, col } = self.cursor;
        if col < self.line_len(row) {
            let line = &mut self.lines[row];
            let at = byte_offset(line, col);
            line.remove(at);
            self.touch();
            true
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
            self.touch();
            true
        } else {
            false
        }
    }

    /// Remove the text between two positions; the cursor lands at the start
    pub fn delete_range(&mut self, a: Position, b: Position) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let start = self.clamp(start);
        let end = self.clamp(end);
        if start == end {
            return;
        }

        let end_line = &self.lines[end.row];
        let tail = end_line[byte_offset(end_line, end.col)..].to_string();
        let start_line = &mut self.lines[start.row];
        let cut = byte_offset(start_line, start.col);
        start_line.truncate(cut);
        start_line.push_str(&tail);
        self.lines.drain(start.row + 1..=end.row);

        self.cursor = start;
        self.touch();
    }

    /// Delete the selected text, returning it. `None` if nothing was selected.
    pub fn delete_selection(&mut self) -> Option<String> {
        let (start, end) = self.selection_range()?;
        let text = self.text_in_range(start, end);
        self.delete_range(start, end);
        Some(text)
    }
}
