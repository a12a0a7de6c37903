//! Cursor positions and selections in document coordinates

/// A `(row, col)` location in the document, measured in characters.
///
/// Field order makes the derived `Ord` compare in document order
/// (row first, then column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// A selection between a fixed anchor and an active end that follows the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    #[must_use]
    pub fn new(anchor: Position, active: Position) -> Self {
        Selection { anchor, active }
    }

    /// Normalized `(start, end)` regardless of drag direction
    #[must_use]
    pub fn range(&self) -> (Position, Position) {
        if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}
