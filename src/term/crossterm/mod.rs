//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use std::io::{stdout, BufWriter, Stdout, Write};
use std::time::Duration;

use crate::color::ColorStyle;
use crate::key::{Key, KeyMods, NavKey};
use crate::term::{CellWriter, ModifierSupport, Size, TerminalBackend};

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    out: BufWriter<Stdout>,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
    keyboard_enhanced: bool,
}

impl CrosstermBackend {
    pub fn new() -> Result<Self, String> {
        Ok(CrosstermBackend {
            out: BufWriter::new(stdout()),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
            keyboard_enhanced: false,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<(), String> {
        // Enable alternate screen buffer (prevents scrolling in main buffer)
        execute!(self.out, terminal::EnterAlternateScreen)
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        self.alternate_screen_enabled = true;

        // Enable raw mode
        terminal::enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        self.raw_mode_enabled = true;

        // Hide cursor during rendering
        execute!(self.out, cursor::Hide).map_err(|e| format!("Failed to hide cursor: {e}"))?;

        // Ask for unambiguous modifier reporting where the terminal offers it
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                self.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )
            .map_err(|e| format!("Failed to enable keyboard enhancement: {e}"))?;
            self.keyboard_enhanced = true;
        }

        Ok(())
    }

    fn deinit(&mut self) {
        if self.keyboard_enhanced {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
            self.keyboard_enhanced = false;
        }

        // Show cursor before exiting
        let _ = execute!(self.out, ResetColor, cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        // Exit alternate screen buffer
        if self.alternate_screen_enabled {
            let _ = execute!(self.out, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
    }

    fn poll(&mut self, timeout: Duration) -> Result<bool, String> {
        event::poll(timeout).map_err(|e| format!("Failed to poll events: {e}"))
    }

    fn read_key(&mut self) -> Result<Option<Key>, String> {
        let event = event::read().map_err(|e| format!("Failed to read event: {e}"))?;
        Ok(translate_event(event))
    }

    fn get_size(&self) -> Result<Size, String> {
        let (cols, rows) =
            terminal::size().map_err(|e| format!("Failed to get terminal size: {e}"))?;
        Ok(Size { rows, cols })
    }

    fn flush(&mut self) -> Result<(), String> {
        self.out.flush().map_err(|e| format!("Flush failed: {e}"))
    }

    fn modifier_support(&self) -> ModifierSupport {
        if self.keyboard_enhanced {
            ModifierSupport::Full
        } else {
            ModifierSupport::Degraded
        }
    }
}

impl CellWriter for CrosstermBackend {
    fn move_to(&mut self, x: u16, y: u16) -> Result<(), String> {
        queue!(self.out, cursor::MoveTo(x, y)).map_err(|e| format!("Failed to move cursor: {e}"))
    }

    fn write_styled(&mut self, text: &str, style: ColorStyle) -> Result<(), String> {
        if let Some(fg) = style.fg {
            queue!(self.out, SetForegroundColor(fg.to_crossterm()))
                .map_err(|e| format!("Failed to set foreground color: {e}"))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.out, SetBackgroundColor(bg.to_crossterm()))
                .map_err(|e| format!("Failed to set background color: {e}"))?;
        }
        let written = if style.inverse {
            queue!(
                self.out,
                SetAttribute(Attribute::Reverse),
                Print(text),
                SetAttribute(Attribute::NoReverse)
            )
        } else {
            queue!(self.out, Print(text))
        };
        written.map_err(|e| format!("Write failed: {e}"))
    }

    fn normal(&mut self) -> Result<(), String> {
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)
            .map_err(|e| format!("Failed to reset colors: {e}"))
    }
}

/// Best-effort terminal restore for panic hooks, where the backend is out of reach
pub fn restore_terminal() {
    let mut out = stdout();
    let _ = execute!(out, PopKeyboardEnhancementFlags, ResetColor, cursor::Show);
    let _ = terminal::disable_raw_mode();
    let _ = execute!(out, terminal::LeaveAlternateScreen);
}

/// Translate a crossterm event; key releases and mouse/focus events are dropped
pub(crate) fn translate_event(event: Event) -> Option<Key> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            Some(translate_key_event(key_event))
        }
        Event::Resize(cols, rows) => Some(Key::Resize(cols, rows)),
        _ => None,
    }
}

/// Translate crossterm `KeyEvent` to our Key enum
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Key {
    let modifiers = key_event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let mods = KeyMods { shift, ctrl };

    match key_event.code {
        KeyCode::Char(ch) => {
            // Handle Enter key that comes through as character (some terminals send '\r' or '\n')
            if ch == '\r' || ch == '\n' {
                return Key::Enter;
            }
            if ctrl {
                Key::Ctrl(ch.to_ascii_lowercase())
            } else if alt {
                Key::Alt(ch)
            } else {
                Key::Char(ch)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Nav(NavKey::Up, mods),
        KeyCode::Down => Key::Nav(NavKey::Down, mods),
        KeyCode::Left => Key::Nav(NavKey::Left, mods),
        KeyCode::Right => Key::Nav(NavKey::Right, mods),
        KeyCode::Home => Key::Nav(NavKey::Home, mods),
        KeyCode::End => Key::Nav(NavKey::End, mods),
        KeyCode::PageUp => Key::Nav(NavKey::PageUp, mods),
        KeyCode::PageDown => Key::Nav(NavKey::PageDown, mods),
        _ => Key::Unknown,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
