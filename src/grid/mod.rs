//! The symbol grid: storage, match detection, and gravity.
//!
//! ## Key Types
//!
//! - `MatchGrid`: the mutable board with bounds-checked access, swaps, holes,
//!   per-column collapse
//! - `MatchSet`: the position set produced by one match scan
//! - `BoardSnapshot`: the immutable, hole-free view handed to the
//!   presentation layer

pub mod board;
pub mod matches;
pub mod snapshot;

pub use board::MatchGrid;
pub use matches::{MatchSet, MIN_RUN_LENGTH};
pub use snapshot::BoardSnapshot;
