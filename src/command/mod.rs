//! Command dispatch and keybindings
//! Translates keys into editor commands
//!
//! ## command/ Invariants
//!
//! - `Command` represents editor-level intent, not key-level input.
//! - Commands contain no terminal- or platform-specific concepts.
//! - Page movements carry no row count; the executor resolves it from the pane.
//! - Shift on a navigation key always means "extend the selection".

use crate::key::{Key, KeyMods, NavKey};
use crate::movement::Movement;
use crate::term::ModifierSupport;

/// Editor commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Movement
    Move { movement: Movement, extend: bool },
    PageUp { extend: bool },
    PageDown { extend: bool },

    // Editing
    InsertChar(char),
    InsertTab,
    InsertNewline,
    DeleteBackward,
    DeleteForward,

    // Selection and clipboard
    SelectAll,
    ClearSelection,
    Copy,
    Cut,
    Paste,

    // Control
    Save,
    Quit,
    Resize { cols: u16, rows: u16 },
    Noop,
}

impl Command {
    fn motion(movement: Movement, extend: bool) -> Self {
        Command::Move { movement, extend }
    }
}

/// Command dispatcher state
#[derive(Debug, Default)]
pub struct Dispatcher {
    /// Treat `Esc b` / `Esc f` as Alt+B / Alt+F. Only terminals without
    /// Alt reporting send those sequences.
    escape_prefix: bool,
    /// Set after a bare Escape when `escape_prefix` is on
    pending_escape: bool,
}

impl Dispatcher {
    /// Dispatcher for a terminal that reports Alt itself
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher that also reads `Esc b` / `Esc f` as word motions
    #[must_use]
    pub fn with_escape_prefix() -> Self {
        Dispatcher {
            escape_prefix: true,
            pending_escape: false,
        }
    }

    /// Dispatcher suited to the terminal's modifier reporting
    #[must_use]
    pub fn for_support(support: ModifierSupport) -> Self {
        match support {
            ModifierSupport::Full => Self::new(),
            ModifierSupport::Degraded => Self::with_escape_prefix(),
        }
    }

    /// Translate a key into a command
    pub fn translate_key(&mut self, key: Key) -> Command {
        if std::mem::take(&mut self.pending_escape) {
            if let Key::Char(ch) = key {
                if let Some(cmd) = Self::translate_meta(ch) {
                    return cmd;
                }
            }
        }

        match key {
            Key::Char(ch) if !ch.is_control() => Command::InsertChar(ch),
            Key::Char(_) => Command::Noop,
            Key::Ctrl(ch) => Self::translate_ctrl(ch),
            Key::Alt(ch) => Self::translate_meta(ch).unwrap_or(Command::Noop),
            Key::Nav(nav, mods) => Self::translate_nav(nav, mods),
            Key::Backspace => Command::DeleteBackward,
            Key::Delete => Command::DeleteForward,
            Key::Enter => Command::InsertNewline,
            Key::Tab => Command::InsertTab,
            Key::Escape => {
                self.pending_escape = self.escape_prefix;
                Command::ClearSelection
            }
            Key::Resize(cols, rows) => Command::Resize { cols, rows },
            Key::Unknown => Command::Noop,
        }
    }

    fn translate_ctrl(ch: char) -> Command {
        match ch {
            's' => Command::Save,
            'q' => Command::Quit,
            'a' => Command::SelectAll,
            'c' => Command::Copy,
            'x' => Command::Cut,
            'v' => Command::Paste,
            _ => Command::Noop,
        }
    }

    /// Alt bindings; an uppercase letter (Alt+Shift) extends
    fn translate_meta(ch: char) -> Option<Command> {
        let extend = ch.is_ascii_uppercase();
        match ch.to_ascii_lowercase() {
            'b' => Some(Command::motion(Movement::WordLeft, extend)),
            'f' => Some(Command::motion(Movement::WordRight, extend)),
            _ => None,
        }
    }

    fn translate_nav(nav: NavKey, mods: KeyMods) -> Command {
        let extend = mods.shift;
        let movement = match (nav, mods.ctrl) {
            (NavKey::Left, false) => Movement::Left,
            (NavKey::Left, true) => Movement::WordLeft,
            (NavKey::Right, false) => Movement::Right,
            (NavKey::Right, true) => Movement::WordRight,
            (NavKey::Up, _) => Movement::Up,
            (NavKey::Down, _) => Movement::Down,
            (NavKey::Home, false) => Movement::LineStart,
            (NavKey::Home, true) => Movement::DocumentStart,
            (NavKey::End, false) => Movement::LineEnd,
            (NavKey::End, true) => Movement::DocumentEnd,
            (NavKey::PageUp, _) => return Command::PageUp { extend },
            (NavKey::PageDown, _) => return Command::PageDown { extend },
        };
        Command::motion(movement, extend)
    }
}
