//! Terminal backend abstraction
//! Provides platform-agnostic interface for terminal operations

/// ## term/ Invariants
///
/// - Terminal handling is isolated behind a strict abstraction boundary.
/// - Raw mode is enabled before input processing begins.
/// - Terminal state is restored on normal exit and on panic.
/// - Terminal size queries are accurate at the time of use.
/// - Terminal code never depends on editor internals.
use crate::color::ColorStyle;
use crate::key::Key;
use std::time::Duration;

pub mod crossterm;

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// How much modifier information key events carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierSupport {
    /// Shift/Ctrl are reported on navigation keys
    Full,
    /// Modifiers may be dropped; selection needs the timing heuristic
    Degraded,
}

/// Positioned, styled string writes; no read-back
pub trait CellWriter {
    /// Move the write position (0-indexed column, row)
    fn move_to(&mut self, x: u16, y: u16) -> Result<(), String>;

    /// Write `text` at the current position with `style`
    fn write_styled(&mut self, text: &str, style: ColorStyle) -> Result<(), String>;

    /// Reset colors and attributes
    fn normal(&mut self) -> Result<(), String>;
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend: CellWriter {
    /// Initialize terminal and enter raw mode
    fn init(&mut self) -> Result<(), String>;

    /// Restore terminal to original state
    fn deinit(&mut self);

    /// Wait up to `timeout` for an input event
    fn poll(&mut self, timeout: Duration) -> Result<bool, String>;

    /// Read one pending event; `None` for events the editor ignores
    fn read_key(&mut self) -> Result<Option<Key>, String>;

    /// Get terminal dimensions
    fn get_size(&self) -> Result<Size, String>;

    /// Push queued output to the terminal
    fn flush(&mut self) -> Result<(), String>;

    /// Whether key events report Shift/Ctrl reliably
    fn modifier_support(&self) -> ModifierSupport;
}
