//! Session orchestration: populate, swap validation, cascade resolution.
//!
//! ## Key Types
//!
//! - `GameEngine`: owns the grid and generator for one session
//! - `SwapOutcome`: `Rejected` (with a reason) or `Resolved` (with the
//!   per-round snapshot sequence)

pub mod game;

pub use game::{GameEngine, RejectReason, SwapOutcome};
