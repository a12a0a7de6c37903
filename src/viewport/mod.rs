//! Viewport management
//! Tracks the visible portion of a document inside the editor pane

//! ## viewport/ Invariants
//!
//! - The viewport never mutates buffer contents.
//! - `scroll_y` stays within `[0, max(0, total_lines - display_height)]`.
//! - After `adjust`, the cursor row lies inside the displayed rows.
//! - Horizontal scroll follows the cursor's line only; a line that fits the
//!   content area always shows from column 0.
//! - Pane geometry (header, gutter, separator) is derived here and nowhere else.

use crate::buffer::Position;
use crate::constants::ui;

/// Width of the line-number gutter for a document with `total_lines` lines
#[must_use]
pub fn gutter_width(total_lines: usize) -> usize {
    let digits = total_lines.max(1).to_string().len();
    (digits + 1).max(ui::MIN_GUTTER_WIDTH)
}

/// Scroll state plus pane dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First displayed document row
    scroll_y: usize,
    /// First displayed column of every row
    scroll_x: usize,
    /// Pane height including the header row
    rows: usize,
    /// Pane width including gutter and separator
    cols: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Viewport {
            scroll_y: 0,
            scroll_x: 0,
            rows,
            cols,
        }
    }

    /// Rows available for document lines (pane rows minus the header)
    #[must_use]
    pub fn display_height(&self) -> usize {
        self.rows.saturating_sub(ui::HEADER_ROWS)
    }

    /// Columns available for text once gutter and separator are drawn
    #[must_use]
    pub fn content_width(&self, total_lines: usize) -> usize {
        self.cols.saturating_sub(gutter_width(total_lines) + 1)
    }

    /// Scroll so the cursor is visible.
    ///
    /// `current_line_len` is the length of the cursor's line in characters.
    /// Returns true if either offset changed.
    pub fn adjust(&mut self, cursor: Position, total_lines: usize, current_line_len: usize) -> bool {
        let before = (self.scroll_y, self.scroll_x);
        let total_lines = total_lines.max(1);

        // --- Vertical ---
        let height = self.display_height().max(1);
        if cursor.row < self.scroll_y {
            self.scroll_y = cursor.row;
        } else if cursor.row >= self.scroll_y + height {
            self.scroll_y = cursor.row + 1 - height;
        }
        self.scroll_y = self.scroll_y.min(total_lines.saturating_sub(height));

        // --- Horizontal ---
        let width = self.content_width(total_lines);
        if current_line_len <= width {
            self.scroll_x = 0;
        } else {
            let width = width.max(1);
            if cursor.col < self.scroll_x {
                self.scroll_x = cursor.col;
            } else if cursor.col >= self.scroll_x + width {
                self.scroll_x = cursor.col + 1 - width;
            }
        }

        (self.scroll_y, self.scroll_x) != before
    }

    #[must_use]
    pub fn scroll_y(&self) -> usize {
        self.scroll_y
    }

    #[must_use]
    pub fn scroll_x(&self) -> usize {
        self.scroll_x
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Document rows currently on screen, clipped to the document
    #[must_use]
    pub fn visible_rows(&self, total_lines: usize) -> std::ops::Range<usize> {
        let start = self.scroll_y.min(total_lines);
        let end = (self.scroll_y + self.display_height()).min(total_lines);
        start..end
    }

    pub fn set_size(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Forget scroll offsets (e.g. when a new file is opened)
    pub fn reset(&mut self) {
        self.scroll_y = 0;
        self.scroll_x = 0;
    }
}
