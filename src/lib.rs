//! # match3-engine
//!
//! The rule-engine core of a match-3 puzzle game: a rectangular grid of
//! symbols where adjacent cells may be swapped, swaps that produce runs of
//! three or more identical symbols trigger removal, and vacated cells are
//! refilled by gravity-driven collapse that can cascade into further
//! matches.
//!
//! ## Design Principles
//!
//! 1. **Mechanism below policy**: `MatchGrid` moves symbols and finds runs
//!    but never decides whether a swap stands; `GameEngine` owns that
//!    protocol.
//!
//! 2. **Presentation-Free**: no rendering, animation, or input concepts.
//!    The presentation layer requests swaps by grid coordinates and replays
//!    the returned `BoardSnapshot` sequence on its own timeline.
//!
//! 3. **Deterministic Under Seed**: all randomness flows through one
//!    seedable RNG, so any session can be replayed exactly.
//!
//! ## Usage
//!
//! ```
//! use match3_engine::{EngineConfig, GameEngine, Position, SwapOutcome};
//!
//! let mut engine = GameEngine::new(EngineConfig::new(8, 8, 5).with_seed(42))?;
//! engine.populate()?;
//!
//! match engine.try_swap(Position::new(3, 4), Position::new(3, 5))? {
//!     SwapOutcome::Rejected(reason) => println!("no move: {reason:?}"),
//!     SwapOutcome::Resolved { snapshots } => {
//!         println!("cascade settled after {} rounds", snapshots.len());
//!     }
//! }
//! # Ok::<(), match3_engine::EngineError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: positions, symbols, configuration, errors, RNG
//! - `generator`: random symbol supply with exclusion support
//! - `grid`: the board, match detection, gravity collapse, snapshots
//! - `engine`: populate and the swap/resolve cascade protocol

pub mod core;
pub mod engine;
pub mod generator;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, EngineRng, Position, RngState, Symbol, DEFAULT_MAX_CASCADE_ROUNDS,
};

pub use crate::generator::SymbolGenerator;

pub use crate::grid::{BoardSnapshot, MatchGrid, MatchSet, MIN_RUN_LENGTH};

pub use crate::engine::{GameEngine, RejectReason, SwapOutcome};
