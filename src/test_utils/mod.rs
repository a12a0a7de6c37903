//! Test utilities
//! Shared testing helpers and mocks

use crate::color::ColorStyle;
use crate::key::Key;
use crate::term::{CellWriter, ModifierSupport, Size, TerminalBackend};
use std::collections::VecDeque;
use std::time::Duration;

/// One recorded screen cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: ColorStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            style: ColorStyle::default(),
        }
    }
}

/// Mock terminal backend for testing
/// Records writes into a cell grid and replays scripted keys
pub struct MockTerminal {
    pub cells: Vec<Vec<Cell>>,
    pub size: Size,
    pub keys: VecDeque<Key>,
    pub modifier_support: ModifierSupport,
    pub initialized: bool,
    pub flushes: usize,
    /// Cells written since the last `clear_log`
    pub writes: usize,
    pos: (u16, u16),
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            cells: vec![vec![Cell::default(); cols as usize]; rows as usize],
            size: Size { rows, cols },
            keys: VecDeque::new(),
            modifier_support: ModifierSupport::Full,
            initialized: false,
            flushes: 0,
            writes: 0,
            pos: (0, 0),
        }
    }

    /// Queue keys to be returned by `read_key`
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn with_modifier_support(mut self, support: ModifierSupport) -> Self {
        self.modifier_support = support;
        self
    }

    /// Text of screen row `y`
    pub fn row_text(&self, y: usize) -> String {
        self.cells
            .get(y)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }

    /// Text of screen row `y` without trailing spaces
    pub fn row_trimmed(&self, y: usize) -> String {
        self.row_text(y).trim_end().to_string()
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or_default()
    }

    /// Change the size, as a terminal resize would
    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.size = Size { rows, cols };
        self.cells = vec![vec![Cell::default(); cols as usize]; rows as usize];
    }

    pub fn clear_log(&mut self) {
        self.writes = 0;
        self.flushes = 0;
    }
}

impl CellWriter for MockTerminal {
    fn move_to(&mut self, x: u16, y: u16) -> Result<(), String> {
        self.pos = (x, y);
        Ok(())
    }

    fn write_styled(&mut self, text: &str, style: ColorStyle) -> Result<(), String> {
        let (mut x, y) = self.pos;
        for ch in text.chars() {
            if let Some(cell) = self
                .cells
                .get_mut(y as usize)
                .and_then(|row| row.get_mut(x as usize))
            {
                *cell = Cell { ch, style };
                self.writes += 1;
            }
            x = x.saturating_add(1);
        }
        self.pos = (x, y);
        Ok(())
    }

    fn normal(&mut self) -> Result<(), String> {
        Ok(())
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<(), String> {
        self.initialized = true;
        Ok(())
    }

    fn deinit(&mut self) {
        self.initialized = false;
    }

    fn poll(&mut self, _timeout: Duration) -> Result<bool, String> {
        Ok(!self.keys.is_empty())
    }

    fn read_key(&mut self) -> Result<Option<Key>, String> {
        self.keys
            .pop_front()
            .map(Some)
            .ok_or_else(|| "no scripted key".to_string())
    }

    fn get_size(&self) -> Result<Size, String> {
        Ok(self.size)
    }

    fn flush(&mut self) -> Result<(), String> {
        self.flushes += 1;
        Ok(())
    }

    fn modifier_support(&self) -> ModifierSupport {
        self.modifier_support
    }
}
