//! Read-only board snapshots.
//!
//! A `BoardSnapshot` is the observable projection of the grid handed to the
//! presentation layer: complete (no holes), immutable, and detached from the
//! live board. The engine returns one snapshot per resolve round so a
//! renderer can replay the cascade on its own timeline.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Position, Symbol};

/// An immutable, hole-free copy of the board at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    width: usize,
    height: usize,
    /// Flat row-major cells (`row * width + column`), row 0 first.
    cells: Vec<Symbol>,
}

impl BoardSnapshot {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<Symbol>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Snapshot width in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Snapshot height in rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the symbol at `position`.
    pub fn symbol_at(&self, position: Position) -> Result<Symbol, EngineError> {
        if position.column < self.width && position.row < self.height {
            Ok(self.cells[position.row * self.width + position.column])
        } else {
            Err(EngineError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The raw row-major cells, row 0 (bottom) first.
    #[must_use]
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Iterate one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Symbol> + '_ {
        let start = row * self.width;
        self.cells[start..start + self.width].iter().copied()
    }
}
