//! Highlight composition
//! Merges syntax tokens, the selection and the cursor into styled spans
//!
//! ## compose/ Invariants
//!
//! - Every composed row is exactly `content_width` cells wide.
//! - Truncation never hides the cursor: the cut point moves to keep it.
//! - Paint priority is syntax, then selection, then cursor; later layers
//!   change colors or emphasis, never the glyph.
//! - Selection paints text cells only; the cursor may sit on a padding cell.
//! - Composition is pure apart from the token cache.

pub mod cache;

pub use cache::HighlightCache;

use crate::buffer::{Position, TextDocument};
use crate::color::{ColorStyle, Theme};
use crate::constants::ui;
use crate::syntax::{TokenKind, TokenSpan, Tokenizer};
use crate::viewport::Viewport;

/// What a span of cells shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanCategory {
    Plain,
    Syntax(TokenKind),
    Selection,
    Cursor,
}

/// Run of cells sharing a category and a style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub category: SpanCategory,
    pub style: ColorStyle,
}

impl StyledSpan {
    /// Width in cells
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Which columns of a line reach the screen.
///
/// Cells are laid out as `left_marker` marker cells, then line characters
/// `start + left_marker .. end`, then `right_marker` marker cells. All
/// values are line columns except the marker counts, which are cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleSlice {
    pub start: usize,
    pub end: usize,
    pub left_marker: usize,
    pub right_marker: usize,
}

impl VisibleSlice {
    /// Cells used by text and markers
    #[must_use]
    pub fn width(&self) -> usize {
        self.end - self.start + self.right_marker
    }

    /// Screen cell of line column `col`, if it is on screen
    #[must_use]
    pub fn cell_of(&self, col: usize, content_width: usize) -> Option<usize> {
        let cell = col.checked_sub(self.start)?;
        (cell < content_width).then_some(cell)
    }
}

fn marker_len() -> usize {
    ui::ELLIPSIS.chars().count()
}

/// Compute the visible slice of a line of `line_len` characters.
///
/// `cursor_col` is set only on the cursor's row.
#[must_use]
pub fn visible_slice(
    line_len: usize,
    scroll_x: usize,
    content_width: usize,
    cursor_col: Option<usize>,
) -> VisibleSlice {
    let start = scroll_x.min(line_len);
    if content_width == 0 {
        return VisibleSlice {
            start,
            end: start,
            left_marker: 0,
            right_marker: 0,
        };
    }

    let limit = start + content_width;
    let (end, right_marker) = if line_len - start > content_width {
        let mut cut = limit - marker_len().min(content_width);
        if let Some(c) = cursor_col {
            if c >= cut && c < limit {
                cut = c + 1;
            }
        }
        (cut, limit - cut)
    } else {
        (line_len, 0)
    };

    let mut left_marker = if start > 0 {
        marker_len().min(end - start)
    } else {
        0
    };
    if let Some(c) = cursor_col {
        if c >= start && c < start + left_marker {
            left_marker = c - start;
        }
    }

    VisibleSlice {
        start,
        end,
        left_marker,
        right_marker,
    }
}

/// Selected columns `[start, end)` of `row`, in line coordinates
#[must_use]
pub fn selection_columns(
    row: usize,
    line_len: usize,
    range: Option<(Position, Position)>,
) -> Option<(usize, usize)> {
    let (start, end) = range?;
    if row < start.row || row > end.row {
        return None;
    }
    let s = if row == start.row { start.col } else { 0 };
    let e = if row == end.row { end.col } else { line_len };
    let e = e.min(line_len);
    (s < e).then_some((s, e))
}

/// Selected columns intersected with the visible text, as offsets into it
#[must_use]
pub fn visible_intersection(
    columns: Option<(usize, usize)>,
    slice: &VisibleSlice,
) -> Option<(usize, usize)> {
    let (s, e) = columns?;
    let s = s.max(slice.start);
    let e = e.min(slice.end);
    (s < e).then(|| (s - slice.start, e - slice.start))
}

/// Token kind of each character, falling back to plain for bad spans
fn char_kinds(tokens: &[TokenSpan], line_len: usize) -> Vec<TokenKind> {
    let mut kinds = vec![TokenKind::Plain; line_len];
    for token in tokens {
        let end = token.end.min(line_len);
        if token.start < end {
            kinds[token.start..end].fill(token.kind);
        }
    }
    kinds
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    category: SpanCategory,
    style: ColorStyle,
}

/// Inputs for one row
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub text: &'a str,
    pub tokens: &'a [TokenSpan],
    /// Selected columns of this line, see [`selection_columns`]
    pub selection: Option<(usize, usize)>,
    /// Cursor column if the cursor is on this row
    pub cursor_col: Option<usize>,
    pub scroll_x: usize,
    pub content_width: usize,
}

/// Compose one visible row into styled spans covering `content_width` cells
#[must_use]
pub fn compose_line(ctx: &LineContext<'_>, theme: &Theme) -> Vec<StyledSpan> {
    let chars: Vec<char> = ctx.text.chars().collect();
    let slice = visible_slice(chars.len(), ctx.scroll_x, ctx.content_width, ctx.cursor_col);
    let kinds = char_kinds(ctx.tokens, chars.len());

    let base = ColorStyle::new_colors(theme.foreground, theme.background);
    let marker = ColorStyle::new_colors(theme.marker_fg, theme.background);
    let marker_glyphs: Vec<char> = ui::ELLIPSIS.chars().collect();
    let marker_cell = |i: usize| Cell {
        ch: marker_glyphs.get(i).copied().unwrap_or('.'),
        category: SpanCategory::Plain,
        style: marker,
    };

    let mut cells: Vec<Cell> = Vec::with_capacity(ctx.content_width);
    cells.extend((0..slice.left_marker).map(marker_cell));

    // --- Syntax layer ---
    for col in slice.start + slice.left_marker..slice.end {
        let kind = kinds[col];
        let category = match kind {
            TokenKind::Plain => SpanCategory::Plain,
            other => SpanCategory::Syntax(other),
        };
        cells.push(Cell {
            ch: chars[col],
            category,
            style: base.with_fg(theme.token_color(kind)),
        });
    }

    cells.extend((0..slice.right_marker).map(marker_cell));
    cells.resize(
        ctx.content_width,
        Cell {
            ch: ' ',
            category: SpanCategory::Plain,
            style: base,
        },
    );

    // --- Selection layer ---
    if let Some((s, e)) = visible_intersection(ctx.selection, &slice) {
        let s = s.max(slice.left_marker);
        for cell in cells.iter_mut().take(e).skip(s) {
            cell.category = SpanCategory::Selection;
            cell.style.bg = Some(theme.selection_bg);
        }
    }

    // --- Cursor layer ---
    if let Some(cell) = ctx
        .cursor_col
        .and_then(|c| slice.cell_of(c, ctx.content_width))
        .and_then(|i| cells.get_mut(i))
    {
        cell.category = SpanCategory::Cursor;
        cell.style.inverse = true;
    }

    merge_cells(&cells)
}

fn merge_cells(cells: &[Cell]) -> Vec<StyledSpan> {
    let mut spans: Vec<StyledSpan> = Vec::new();
    for cell in cells {
        match spans.last_mut() {
            Some(last) if last.category == cell.category && last.style == cell.style => {
                last.text.push(cell.ch);
            }
            _ => spans.push(StyledSpan {
                text: cell.ch.to_string(),
                category: cell.category,
                style: cell.style,
            }),
        }
    }
    spans
}

/// A composed document row ready for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedRow {
    /// 1-based line number for the gutter
    pub line_number: usize,
    pub spans: Vec<StyledSpan>,
}

/// Compose every visible row of `doc`
pub fn compose_visible(
    doc: &TextDocument,
    viewport: &Viewport,
    cache: &mut HighlightCache,
    tokenizer: &mut dyn Tokenizer,
    theme: &Theme,
) -> Vec<ComposedRow> {
    let total = doc.line_count();
    cache.sync(total);

    let cursor = doc.cursor();
    let range = doc.selection_range();
    let content_width = viewport.content_width(total);

    viewport
        .visible_rows(total)
        .map(|row| {
            let text = doc.line(row);
            let tokens = cache.tokens(row, text, tokenizer);
            let ctx = LineContext {
                text,
                tokens,
                selection: selection_columns(row, doc.line_len(row), range),
                cursor_col: (row == cursor.row).then_some(cursor.col),
                scroll_x: viewport.scroll_x(),
                content_width,
            };
            ComposedRow {
                line_number: row + 1,
                spans: compose_line(&ctx, theme),
            }
        })
        .collect()
}
