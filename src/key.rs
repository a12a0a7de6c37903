//! Key representation for editor input

/// Navigation keys that move the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Modifiers relevant to navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyMods {
    pub shift: bool,
    pub ctrl: bool,
}

impl KeyMods {
    pub const NONE: KeyMods = KeyMods {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: KeyMods = KeyMods {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: KeyMods = KeyMods {
        shift: false,
        ctrl: true,
    };
    pub const CTRL_SHIFT: KeyMods = KeyMods {
        shift: true,
        ctrl: true,
    };
}

/// Represents a key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+A), lowercase
    Ctrl(char),
    /// Alt/Meta combination (e.g., Alt+B)
    Alt(char),
    /// Arrow and navigation keys with modifiers
    Nav(NavKey, KeyMods),
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    /// System events
    Resize(u16, u16),
    /// Anything the editor does not handle
    Unknown,
}

impl Key {
    /// Unmodified navigation key
    #[must_use]
    pub const fn nav(key: NavKey) -> Self {
        Key::Nav(key, KeyMods::NONE)
    }
}
