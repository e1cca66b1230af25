//! Game engine: population and swap resolution.
//!
//! `GameEngine` owns the grid and the symbol generator for one session and
//! drives the generate/populate and swap/validate/resolve-cascade protocol.
//! The presentation layer calls `populate` and `try_swap` and replays the
//! returned snapshot sequence; it never mutates the board itself.
//!
//! ## State machine
//!
//! `try_swap` moves through `Idle -> Swapped -> {Rejected (reverted) |
//! Resolving* -> Idle}`. Both public operations take `&mut self`, so the
//! borrow checker enforces the one-in-flight-operation rule; there is no
//! process-wide engine instance.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineConfig, EngineError, EngineRng, Position, RngState, Symbol};
use crate::generator::SymbolGenerator;
use crate::grid::{BoardSnapshot, MatchGrid, MatchSet};

/// Why a swap request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The two positions do not share an edge.
    NotAdjacent,
    /// The swap would not produce any run of three or more.
    NoMatch,
}

/// Result of a swap request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapOutcome {
    /// The swap does not stand; the board is unchanged.
    Rejected(RejectReason),
    /// The swap stood and the cascade ran to quiescence.
    ///
    /// One snapshot per resolve round (after that round's clear, collapse,
    /// and refill), in order, for the presentation layer to animate.
    Resolved { snapshots: Vec<BoardSnapshot> },
}

impl SwapOutcome {
    /// Check whether the swap was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, SwapOutcome::Rejected(_))
    }

    /// Check whether the swap resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, SwapOutcome::Resolved { .. })
    }

    /// The per-round snapshots of a resolved swap.
    #[must_use]
    pub fn snapshots(&self) -> Option<&[BoardSnapshot]> {
        match self {
            SwapOutcome::Resolved { snapshots } => Some(snapshots),
            SwapOutcome::Rejected(_) => None,
        }
    }
}

/// One match-3 session: a grid, its symbol generator, and the resolve loop.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    grid: MatchGrid,
    generator: SymbolGenerator,
}

impl GameEngine {
    /// Create an engine from a validated configuration.
    ///
    /// The grid starts as all holes; call `populate` to fill it. When the
    /// config has no seed, one is drawn from OS entropy and written back
    /// into `config()` so the session stays replayable.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => EngineRng::new(seed),
            None => EngineRng::from_entropy(),
        };
        let mut config = config;
        config.seed = Some(rng.seed());

        let grid = MatchGrid::new(config.width, config.height);
        let generator = SymbolGenerator::new(config.palette_size, rng);

        Ok(Self {
            config,
            grid,
            generator,
        })
    }

    /// Resume a session from an explicit board and generator.
    ///
    /// Used by tests and by presentation layers restoring a saved game.
    #[must_use]
    pub fn with_board(
        grid: MatchGrid,
        generator: SymbolGenerator,
        max_cascade_rounds: Option<u32>,
    ) -> Self {
        let config = EngineConfig {
            width: grid.width(),
            height: grid.height(),
            palette_size: generator.palette_size(),
            seed: Some(generator.seed()),
            max_cascade_rounds,
        };
        Self {
            config,
            grid,
            generator,
        }
    }

    /// The session configuration, with the effective seed filled in.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to the live board.
    #[must_use]
    pub fn board(&self) -> &MatchGrid {
        &self.grid
    }

    /// Snapshot the live board; `None` before the first `populate`.
    #[must_use]
    pub fn snapshot(&self) -> Option<BoardSnapshot> {
        self.grid.snapshot()
    }

    /// Capture the generator's RNG state for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> RngState {
        self.generator.rng_state()
    }

    /// Fill the board with random symbols, guaranteeing zero matches.
    ///
    /// Cells are visited row by row from the bottom, left to right within a
    /// row. Each draw excludes the symbol held by the two preceding same-row
    /// cells if they are equal, and independently the two preceding
    /// same-column cells: at most two exclusions, so a palette of three or
    /// more can never exhaust. Preceding lookups that fall outside the grid
    /// contribute nothing.
    ///
    /// Any existing contents are overwritten, so a stuck session can simply
    /// re-populate.
    pub fn populate(&mut self) -> Result<(), EngineError> {
        for row in 0..self.grid.height() {
            for column in 0..self.grid.width() {
                let excluding = self.populate_exclusions(column, row);
                let symbol = self.generator.next(&excluding)?;
                self.grid.set(Position::new(column, row), symbol)?;
            }
        }
        Ok(())
    }

    /// The symbols that would complete a run of three at scan position
    /// `(column, row)` during population.
    fn populate_exclusions(&self, column: usize, row: usize) -> SmallVec<[Symbol; 2]> {
        let mut excluding = SmallVec::new();

        if column >= 2 {
            let near = self.grid.cell(Position::new(column - 1, row));
            let far = self.grid.cell(Position::new(column - 2, row));
            if let (Some(near), Some(far)) = (near, far) {
                if near == far {
                    excluding.push(near);
                }
            }
        }

        if row >= 2 {
            let near = self.grid.cell(Position::new(column, row - 1));
            let far = self.grid.cell(Position::new(column, row - 2));
            if let (Some(near), Some(far)) = (near, far) {
                if near == far && !excluding.contains(&near) {
                    excluding.push(near);
                }
            }
        }

        excluding
    }

    /// Attempt to swap two adjacent cells.
    ///
    /// - Out-of-bounds positions are a caller bug and return an error.
    /// - Non-adjacent positions return `Rejected(NotAdjacent)`.
    /// - An adjacent swap that produces no match is reverted and returns
    ///   `Rejected(NoMatch)`; the board is exactly as before the call.
    /// - Otherwise the cascade runs to quiescence and the per-round
    ///   snapshots are returned.
    ///
    /// With a configured round cap, a cascade that fails to settle returns
    /// `CascadeLimitExceeded`. The board is complete (hole-free) even then;
    /// callers may treat it as stuck and re-populate.
    pub fn try_swap(&mut self, a: Position, b: Position) -> Result<SwapOutcome, EngineError> {
        match self.grid.swap(a, b) {
            Ok(()) => {}
            Err(EngineError::NotAdjacent { .. }) => {
                return Ok(SwapOutcome::Rejected(RejectReason::NotAdjacent));
            }
            Err(other) => return Err(other),
        }

        let matches = self.grid.find_all_matches();
        if matches.is_empty() {
            // Swap back; the transient swap is invisible to the caller.
            self.grid.swap(a, b)?;
            return Ok(SwapOutcome::Rejected(RejectReason::NoMatch));
        }

        self.resolve(matches)
    }

    /// Run the resolve loop (clear, collapse, refill) repeatedly until the
    /// board is quiescent.
    ///
    /// Refills draw without exclusions; cascaded matches are the intended
    /// mechanic. Termination is probabilistic, not proven; the configured
    /// round cap turns a never-settling board into an error instead of an
    /// endless loop.
    fn resolve(&mut self, mut matches: MatchSet) -> Result<SwapOutcome, EngineError> {
        let mut snapshots = Vec::new();
        let mut rounds: u32 = 0;

        while !matches.is_empty() {
            if let Some(limit) = self.config.max_cascade_rounds {
                if rounds >= limit {
                    return Err(EngineError::CascadeLimitExceeded { rounds });
                }
            }

            let mut columns: Vec<usize> = matches.iter().map(|position| position.column).collect();
            columns.sort_unstable();
            columns.dedup();

            self.grid.clear(&matches)?;
            for column in columns {
                let holes = self.grid.collapse_column(column)?;
                // Top-first refill; order only decides which draw lands where.
                for position in holes.into_iter().rev() {
                    let symbol = self.generator.next(&[])?;
                    self.grid.set(position, symbol)?;
                }
            }

            rounds += 1;
            let snapshot = self
                .grid
                .snapshot()
                .expect("every hole is refilled before the round ends");
            snapshots.push(snapshot);

            matches = self.grid.find_all_matches();
        }

        Ok(SwapOutcome::Resolved { snapshots })
    }
}
