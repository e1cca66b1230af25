//! Engine error types.
//!
//! Every fallible public operation returns `EngineError`. All errors are
//! reported synchronously at the point of the invalid call, and no partial
//! mutation is ever left visible: a swap either fully reverts or the resolve
//! loop runs to a consistent, hole-free board before returning.
//!
//! ## Error Kinds
//!
//! - `OutOfBounds`: position outside the grid. Caller bug, fatal to the call.
//! - `NotAdjacent`: swap between cells not sharing an edge. The grid layer
//!   reports this as an error; the engine layer converts it into a
//!   `Rejected` outcome.
//! - `ExhaustedPalette`: the exclusion set covered the whole palette.
//!   Configuration error, fatal at populate time.
//! - `CascadeLimitExceeded`: the resolve loop hit the configured round cap.
//!   Recoverable: the board is complete, callers may re-populate.
//! - `InvalidConfig`: structurally unusable configuration (zero dimension,
//!   empty palette, zero round cap).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::Position;

/// Errors reported by the match-3 engine.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EngineError {
    /// Position outside the grid.
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    /// Swap requested between two cells that do not share an edge.
    #[error("positions {a} and {b} are not adjacent")]
    NotAdjacent { a: Position, b: Position },

    /// Every symbol in the palette was excluded from a draw.
    #[error("palette exhausted: all {palette_size} symbols were excluded")]
    ExhaustedPalette { palette_size: u8 },

    /// The cascade did not reach quiescence within the configured round cap.
    #[error("cascade did not settle within {rounds} rounds")]
    CascadeLimitExceeded { rounds: u32 },

    /// Structurally unusable configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
