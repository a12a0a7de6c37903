//! Color system
//! Provides color types and cell styles for the pane

use crossterm::style::Color as CrosstermColor;

pub mod theme;

pub use theme::{SyntaxColors, Theme, ThemeVariant};

/// A terminal color: the default, a palette index or true color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Terminal default
    Reset,
    /// 256-color palette index
    Indexed(u8),
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Build an RGB color from a `0xRRGGBB` literal
    #[must_use]
    pub const fn hex(rgb: u32) -> Self {
        Color::Rgb {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    #[must_use]
    pub fn to_crossterm(self) -> CrosstermColor {
        match self {
            Color::Reset => CrosstermColor::Reset,
            Color::Indexed(n) => CrosstermColor::AnsiValue(n),
            Color::Rgb { r, g, b } => CrosstermColor::Rgb { r, g, b },
        }
    }
}

/// Style of one terminal cell or run of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorStyle {
    /// Foreground color (None means default/unchanged)
    pub fg: Option<Color>,
    /// Background color (None means default/unchanged)
    pub bg: Option<Color>,
    /// Swap foreground and background
    pub inverse: bool,
}

impl ColorStyle {
    /// Create a new color style
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with foreground color only
    #[must_use]
    pub fn fg(fg: Color) -> Self {
        ColorStyle {
            fg: Some(fg),
            ..Self::default()
        }
    }

    /// Create with both foreground and background colors
    #[must_use]
    pub fn new_colors(fg: Color, bg: Color) -> Self {
        ColorStyle {
            fg: Some(fg),
            bg: Some(bg),
            inverse: false,
        }
    }

    /// Set foreground color
    #[must_use]
    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Set background color
    #[must_use]
    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    #[must_use]
    pub fn with_inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    /// Check if style changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.inverse
    }
}
