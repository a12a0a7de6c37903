//! Theme system
//! Provides predefined color themes for the pane

use super::Color;
use crate::constants::themes;
use crate::syntax::TokenKind;

/// Theme variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Light,
    Dark,
}

/// Syntax highlighting colors, one per token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxColors {
    pub keyword: Color,
    pub type_name: Color,
    pub function: Color,
    pub string: Color,
    pub number: Color,
    pub comment: Color,
    pub operator: Color,
    pub punctuation: Color,
    pub constant: Color,
}

/// Editor theme definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Theme name
    pub name: &'static str,
    /// Theme variant (light/dark)
    pub variant: ThemeVariant,
    /// Background color
    pub background: Color,
    /// Foreground (text) color
    pub foreground: Color,
    /// Line numbers
    pub gutter_fg: Color,
    /// Gutter/content separator glyph
    pub separator_fg: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    /// Background of selected cells
    pub selection_bg: Color,
    /// Truncation markers
    pub marker_fg: Color,
    pub syntax: SyntaxColors,
}

impl Theme {
    /// Get the dark theme
    #[must_use]
    pub fn dark() -> Self {
        Theme {
            name: themes::DARK,
            variant: ThemeVariant::Dark,
            background: Color::hex(0x1e1e1e),
            foreground: Color::hex(0xd4d4d4),
            gutter_fg: Color::hex(0x858585),
            separator_fg: Color::hex(0x444444),
            header_fg: Color::hex(0xd4d4d4),
            header_bg: Color::hex(0x1b1b1b),
            selection_bg: Color::hex(0x264f78),
            marker_fg: Color::hex(0x858585),
            syntax: SyntaxColors {
                keyword: Color::hex(0x569cd6),
                type_name: Color::hex(0x4ec9b0),
                function: Color::hex(0xdcdcaa),
                string: Color::hex(0xce9178),
                number: Color::hex(0xb5cea8),
                comment: Color::hex(0x6a9955),
                operator: Color::hex(0xd4d4d4),
                punctuation: Color::hex(0xd4d4d4),
                constant: Color::hex(0x4fc1ff),
            },
        }
    }

    /// Get the light theme
    #[must_use]
    pub fn light() -> Self {
        Theme {
            name: themes::LIGHT,
            variant: ThemeVariant::Light,
            background: Color::hex(0xffffff),
            foreground: Color::hex(0x000000),
            gutter_fg: Color::hex(0x237893),
            separator_fg: Color::hex(0xcccccc),
            header_fg: Color::hex(0x333333),
            header_bg: Color::hex(0xf3f3f3),
            selection_bg: Color::hex(0xadd6ff),
            marker_fg: Color::hex(0x237893),
            syntax: SyntaxColors {
                keyword: Color::hex(0x0000ff),
                type_name: Color::hex(0x267f99),
                function: Color::hex(0x795e26),
                string: Color::hex(0xa31515),
                number: Color::hex(0x098658),
                comment: Color::hex(0x008000),
                operator: Color::hex(0x000000),
                punctuation: Color::hex(0x000000),
                constant: Color::hex(0x0070c1),
            },
        }
    }

    /// Get a theme by name (case-insensitive)
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            themes::DARK => Some(Self::dark()),
            themes::LIGHT => Some(Self::light()),
            _ => None,
        }
    }

    /// Get list of all available theme names
    #[must_use]
    pub fn available_themes() -> &'static [&'static str] {
        &[themes::DARK, themes::LIGHT]
    }

    /// Foreground for a token kind; plain text uses the theme foreground
    #[must_use]
    pub fn token_color(&self, kind: TokenKind) -> Color {
        let s = &self.syntax;
        match kind {
            TokenKind::Plain => self.foreground,
            TokenKind::Keyword => s.keyword,
            TokenKind::Type => s.type_name,
            TokenKind::Function => s.function,
            TokenKind::String => s.string,
            TokenKind::Number => s.number,
            TokenKind::Comment => s.comment,
            TokenKind::Operator => s.operator,
            TokenKind::Punctuation => s.punctuation,
            TokenKind::Constant => s.constant,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
