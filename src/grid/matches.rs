//! Match detection.
//!
//! A *run* is a maximal sequence of consecutive cells along one row or one
//! column sharing the same symbol. Runs of length >= 3 match; all their
//! positions are collected into one `MatchSet`. A cell sitting in both a
//! horizontal and a vertical qualifying run (an L or T shape) appears once:
//! union semantics, never double-counting.

use rustc_hash::FxHashSet;

use crate::core::{Position, Symbol};

use super::board::MatchGrid;

/// Minimum run length that qualifies as a match.
pub const MIN_RUN_LENGTH: usize = 3;

/// The set of matched positions found in one scan.
pub type MatchSet = FxHashSet<Position>;

/// Scan the whole grid for matches.
///
/// Every row is scanned left-to-right and every column bottom-to-top, so all
/// simultaneous matches on the board are found in one pass per axis. Holes
/// break runs and never match.
pub(crate) fn scan(grid: &MatchGrid) -> MatchSet {
    let mut matched = MatchSet::default();

    for row in 0..grid.height() {
        scan_line(
            grid.width(),
            |column| grid.cell(Position::new(column, row)),
            |range| {
                for column in range {
                    matched.insert(Position::new(column, row));
                }
            },
        );
    }

    for column in 0..grid.width() {
        scan_line(
            grid.height(),
            |row| grid.cell(Position::new(column, row)),
            |range| {
                for row in range {
                    matched.insert(Position::new(column, row));
                }
            },
        );
    }

    matched
}

/// Walk one line of cells and emit the index range of every maximal run of
/// at least `MIN_RUN_LENGTH` equal symbols.
fn scan_line(
    length: usize,
    cell: impl Fn(usize) -> Option<Symbol>,
    mut emit: impl FnMut(std::ops::Range<usize>),
) {
    let mut run_start = 0;
    let mut run_symbol: Option<Symbol> = None;

    // One past the end acts as a sentinel that flushes the final run.
    for i in 0..=length {
        let current = if i < length { cell(i) } else { None };
        if current != run_symbol {
            if run_symbol.is_some() && i - run_start >= MIN_RUN_LENGTH {
                emit(run_start..i);
            }
            run_start = i;
            run_symbol = current;
        }
    }
}
