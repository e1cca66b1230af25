//! Symbol values.
//!
//! A `Symbol` is an opaque index into the session's palette. The engine
//! never interprets symbol values; the presentation layer maps them to
//! sprites or colors. Equality is by value.

use serde::{Deserialize, Serialize};

/// An opaque palette index.
///
/// A palette of size `n` uses the symbols `0..n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for Symbol {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}
