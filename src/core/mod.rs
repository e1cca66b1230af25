//! Core engine types: positions, symbols, configuration, errors, RNG.
//!
//! This module contains the fundamental building blocks shared by the grid
//! and the engine. Sessions configure these via `EngineConfig` rather than
//! modifying the core.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;
pub mod symbol;

pub use config::{EngineConfig, DEFAULT_MAX_CASCADE_ROUNDS};
pub use error::EngineError;
pub use position::Position;
pub use rng::{EngineRng, RngState};
pub use symbol::Symbol;
