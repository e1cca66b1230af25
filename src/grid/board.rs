//! The symbol grid.
//!
//! `MatchGrid` owns the 2D array of symbols: bounds-checked reads and
//! writes, adjacency-validated swaps, hole clearing, and gravity collapse.
//! It deliberately knows nothing about *when* to do these things; swap
//! validation policy and the cascade loop live in the engine.
//!
//! ## Layout
//!
//! Cells are stored row-major in a flat `Vec`, row 0 first. Row 0 is the
//! bottom row; gravity compacts symbols toward it. A `None` cell is a hole,
//! which exists only transiently between clear and refill.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Position, Symbol};

use super::matches::{self, MatchSet};
use super::snapshot::BoardSnapshot;

/// A width x height grid of symbols with transient holes.
///
/// Created once per session and mutated in place; dimensions never change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGrid {
    width: usize,
    height: usize,
    /// Flat row-major cells (`row * width + column`). `None` is a hole.
    cells: Vec<Option<Symbol>>,
}

impl MatchGrid {
    /// Create an all-hole grid.
    ///
    /// Panics if either dimension is zero; `EngineConfig::validate` rejects
    /// that before a grid is ever built.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be nonzero");
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Build a grid from explicit rows, `rows[0]` being the **bottom** row.
    ///
    /// Used by tests and by presentation layers restoring a saved board.
    /// Panics if `rows` is empty or ragged.
    #[must_use]
    pub fn from_rows(rows: &[Vec<Symbol>]) -> Self {
        assert!(!rows.is_empty(), "grid dimensions must be nonzero");
        let width = rows[0].len();
        assert!(width > 0, "grid dimensions must be nonzero");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "all rows must have the same width"
        );

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().copied().map(Some))
            .collect();

        Self {
            width,
            height: rows.len(),
            cells,
        }
    }

    /// Grid width in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether a position lies inside the grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.column < self.width && position.row < self.height
    }

    fn index(&self, position: Position) -> Result<usize, EngineError> {
        if self.contains(position) {
            Ok(position.row * self.width + position.column)
        } else {
            Err(EngineError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Infallible cell access for in-bounds positions (scan loops).
    pub(crate) fn cell(&self, position: Position) -> Option<Symbol> {
        self.cells[position.row * self.width + position.column]
    }

    /// Read the cell at `position`.
    ///
    /// `Ok(None)` is a hole; holes only exist mid-resolution.
    pub fn at(&self, position: Position) -> Result<Option<Symbol>, EngineError> {
        let index = self.index(position)?;
        Ok(self.cells[index])
    }

    /// Write a symbol at `position`.
    pub fn set(&mut self, position: Position, symbol: Symbol) -> Result<(), EngineError> {
        let index = self.index(position)?;
        self.cells[index] = Some(symbol);
        Ok(())
    }

    /// Exchange the contents of two adjacent cells.
    ///
    /// Fails with `OutOfBounds` or `NotAdjacent` (Manhattan distance != 1,
    /// which also covers `a == b`) without touching the grid. Whether the
    /// swap *should* stand is the caller's decision, and no match validation
    /// happens here.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), EngineError> {
        let index_a = self.index(a)?;
        let index_b = self.index(b)?;
        if !a.is_adjacent(b) {
            return Err(EngineError::NotAdjacent { a, b });
        }
        self.cells.swap(index_a, index_b);
        Ok(())
    }

    /// Find every position belonging to a horizontal or vertical run of
    /// three or more identical symbols.
    ///
    /// Overlapping runs (L/T shapes) are unioned, never double-counted.
    /// Holes break runs and never match.
    #[must_use]
    pub fn find_all_matches(&self) -> MatchSet {
        matches::scan(self)
    }

    /// Mark the given positions as holes.
    ///
    /// Bounds are checked for the whole set before anything is cleared, so
    /// an invalid position leaves the grid untouched.
    pub fn clear(&mut self, positions: &MatchSet) -> Result<(), EngineError> {
        let mut indices = Vec::with_capacity(positions.len());
        for &position in positions {
            indices.push(self.index(position)?);
        }
        for index in indices {
            self.cells[index] = None;
        }
        Ok(())
    }

    /// Compact one column downward, preserving the relative order of its
    /// symbols, and leave all holes at the top.
    ///
    /// Returns the hole positions in bottom-to-top order. The returned
    /// positions are exactly the cells that need refilling.
    pub fn collapse_column(&mut self, column: usize) -> Result<Vec<Position>, EngineError> {
        if column >= self.width {
            return Err(EngineError::OutOfBounds {
                position: Position::new(column, 0),
                width: self.width,
                height: self.height,
            });
        }

        let mut write_row = 0;
        for row in 0..self.height {
            if let Some(symbol) = self.cells[row * self.width + column] {
                if write_row != row {
                    self.cells[write_row * self.width + column] = Some(symbol);
                }
                write_row += 1;
            }
        }

        let mut holes = Vec::with_capacity(self.height - write_row);
        for row in write_row..self.height {
            self.cells[row * self.width + column] = None;
            holes.push(Position::new(column, row));
        }
        Ok(holes)
    }

    /// True iff no cell is a hole.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Capture a read-only snapshot of the board.
    ///
    /// Returns `None` while any hole exists; snapshots are only meaningful
    /// between resolve rounds, when the board is complete.
    #[must_use]
    pub fn snapshot(&self) -> Option<BoardSnapshot> {
        let cells: Option<Vec<Symbol>> = self.cells.iter().copied().collect();
        cells.map(|cells| BoardSnapshot::new(self.width, self.height, cells))
    }
}

impl std::fmt::Display for MatchGrid {
    /// One text line per row, top row first; holes print as `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..self.height).rev() {
            for column in 0..self.width {
                if column > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * self.width + column] {
                    Some(symbol) => write!(f, "{}", symbol.raw())?,
                    None => write!(f, ".")?,
                }
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
