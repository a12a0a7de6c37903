//! Rendering
//! Draws one editor pane: header row, gutter, separator and composed rows
//!
//! ## render/ Invariants
//!
//! - Rendering reads composed rows and pane metadata only; it never mutates editor state.
//! - Every cell of the pane rectangle is rewritten on each call.
//! - Nothing is written outside the pane rectangle.
//! - Every drawn character occupies exactly one terminal column.

use crate::color::{ColorStyle, Theme};
use crate::compose::ComposedRow;
use crate::constants::ui;
use crate::term::CellWriter;
use unicode_width::UnicodeWidthChar;

/// Screen rectangle occupied by a pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl PaneRect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        PaneRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Everything the renderer needs for one frame of a pane
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    /// File base name; ignored when `rows` is `None`
    pub title: &'a str,
    pub dirty: bool,
    /// Transient message shown after the title
    pub status: Option<&'a str>,
    pub focused: bool,
    pub gutter_width: usize,
    /// Composed visible rows; `None` when no file is open
    pub rows: Option<&'a [ComposedRow]>,
    pub theme: &'a Theme,
}

/// Draw a pane into `rect`
pub fn render_pane<W: CellWriter + ?Sized>(
    w: &mut W,
    rect: PaneRect,
    input: &RenderInput<'_>,
) -> Result<(), String> {
    if rect.width == 0 || rect.height == 0 {
        return Ok(());
    }
    let width = rect.width as usize;

    render_header(w, rect, input)?;

    let body_rows = rect.height - 1;
    match input.rows {
        Some(rows) => {
            for i in 0..body_rows {
                w.move_to(rect.x, rect.y + 1 + i)?;
                match rows.get(i as usize) {
                    Some(row) => render_row(w, width, input, row)?,
                    None => render_blank_row(w, width, input)?,
                }
            }
        }
        None => render_placeholder(w, rect, input.theme)?,
    }
    w.normal()
}

fn render_header<W: CellWriter + ?Sized>(
    w: &mut W,
    rect: PaneRect,
    input: &RenderInput<'_>,
) -> Result<(), String> {
    let mut text = String::from(" ");
    if input.rows.is_some() {
        text.push_str(input.title);
        if input.dirty {
            text.push_str(ui::DIRTY_MARKER);
        }
    } else {
        text.push_str(ui::NO_NAME);
    }
    if let Some(status) = input.status {
        text.push_str(ui::HEADER_SEPARATOR);
        text.push_str(status);
    }

    let mut style = ColorStyle::new_colors(input.theme.header_fg, input.theme.header_bg);
    if input.focused {
        style = style.with_inverse();
    }
    w.move_to(rect.x, rect.y)?;
    w.write_styled(&fit(&text, rect.width as usize), style)
}

/// Gutter and separator; returns the columns left for content
fn render_gutter<W: CellWriter + ?Sized>(
    w: &mut W,
    width: usize,
    input: &RenderInput<'_>,
    line_number: Option<usize>,
) -> Result<usize, String> {
    let theme = input.theme;
    let gutter = match line_number {
        Some(n) => format!("{:>pad$} ", n, pad = input.gutter_width.saturating_sub(1)),
        None => " ".repeat(input.gutter_width),
    };
    let gutter = fit(&gutter, input.gutter_width.min(width));
    w.write_styled(&gutter, ColorStyle::new_colors(theme.gutter_fg, theme.background))?;

    let used = input.gutter_width.min(width);
    if used < width {
        w.write_styled(
            &ui::GUTTER_SEPARATOR.to_string(),
            ColorStyle::new_colors(theme.separator_fg, theme.background),
        )?;
    }
    Ok(width.saturating_sub(input.gutter_width + 1))
}

fn render_row<W: CellWriter + ?Sized>(
    w: &mut W,
    width: usize,
    input: &RenderInput<'_>,
    row: &ComposedRow,
) -> Result<(), String> {
    let mut remaining = render_gutter(w, width, input, Some(row.line_number))?;
    for span in &row.spans {
        if remaining == 0 {
            break;
        }
        let text: String = span.text.chars().take(remaining).map(cell_char).collect();
        remaining -= text.chars().count();
        w.write_styled(&text, span.style)?;
    }
    if remaining > 0 {
        w.write_styled(&" ".repeat(remaining), ColorStyle::new().with_bg(input.theme.background))?;
    }
    Ok(())
}

fn render_blank_row<W: CellWriter + ?Sized>(
    w: &mut W,
    width: usize,
    input: &RenderInput<'_>,
) -> Result<(), String> {
    let remaining = render_gutter(w, width, input, None)?;
    if remaining > 0 {
        w.write_styled(&" ".repeat(remaining), ColorStyle::new().with_bg(input.theme.background))?;
    }
    Ok(())
}

fn render_placeholder<W: CellWriter + ?Sized>(
    w: &mut W,
    rect: PaneRect,
    theme: &Theme,
) -> Result<(), String> {
    let width = rect.width as usize;
    let body_rows = rect.height - 1;
    let style = ColorStyle::new_colors(theme.gutter_fg, theme.background);

    let message = fit(ui::NO_FILE_PLACEHOLDER, width);
    let message = message.trim_end();
    let left = (width - message.chars().count()) / 2;
    let centered = fit(&format!("{}{message}", " ".repeat(left)), width);
    let blank = " ".repeat(width);
    let middle = body_rows / 2;

    for i in 0..body_rows {
        w.move_to(rect.x, rect.y + 1 + i)?;
        w.write_styled(if i == middle { &centered } else { &blank }, style)?;
    }
    Ok(())
}

/// Replace characters that do not occupy exactly one column
fn cell_char(ch: char) -> char {
    if ch.is_control() {
        return ' ';
    }
    match ch.width() {
        Some(1) => ch,
        _ => ui::REPLACEMENT_CHAR,
    }
}

/// Cut or pad `text` to exactly `width` single-column cells
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).map(cell_char).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}
