//! Grid positions.
//!
//! Every cell on the board is addressed by a `Position`: a 0-indexed
//! `(column, row)` pair. Row 0 is the **bottom** row; gravity pulls
//! symbols toward it.
//!
//! ## Usage
//!
//! ```
//! use match3_engine::core::Position;
//!
//! let a = Position::new(2, 3);
//! let b = Position::new(2, 4);
//!
//! assert!(a.is_adjacent(b));       // share an edge
//! assert!(!a.is_adjacent(a));      // a cell is not adjacent to itself
//! assert_eq!(a.column, 2);
//! assert_eq!(a.row, 3);
//! ```

use serde::{Deserialize, Serialize};

/// A cell address: 0-indexed column and row.
///
/// Column 0 is the leftmost column; row 0 is the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column index, `0..width`.
    pub column: usize,
    /// Row index, `0..height`. Row 0 is the bottom row.
    pub row: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }

    /// Check whether two positions share an edge.
    ///
    /// Adjacency is exactly Manhattan distance 1: diagonal neighbors are
    /// not adjacent, and no position is adjacent to itself.
    ///
    /// ```
    /// use match3_engine::core::Position;
    ///
    /// assert!(Position::new(0, 0).is_adjacent(Position::new(1, 0)));
    /// assert!(Position::new(5, 5).is_adjacent(Position::new(5, 4)));
    /// assert!(!Position::new(0, 0).is_adjacent(Position::new(1, 1)));
    /// assert!(!Position::new(0, 0).is_adjacent(Position::new(2, 0)));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The position one row below, or `None` on the bottom row.
    #[must_use]
    pub const fn below(self) -> Option<Self> {
        match self.row.checked_sub(1) {
            Some(row) => Some(Self::new(self.column, row)),
            None => None,
        }
    }

    /// The position one column to the left, or `None` on the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        match self.column.checked_sub(1) {
            Some(column) => Some(Self::new(column, self.row)),
            None => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
