//! Random symbol supply.
//!
//! The `SymbolGenerator` is the engine's only source of randomness. It draws
//! uniformly from a fixed palette, optionally excluding given symbols: the
//! mechanism behind match-free population (exclude the symbols that would
//! complete a run) and behind refill (no exclusions: cascades are allowed to
//! create new matches).
//!
//! ## Usage
//!
//! ```
//! use match3_engine::core::{EngineRng, Symbol};
//! use match3_engine::generator::SymbolGenerator;
//!
//! let mut generator = SymbolGenerator::new(3, EngineRng::new(42));
//!
//! // Unconstrained draw
//! let symbol = generator.next(&[]).unwrap();
//! assert!(symbol.raw() < 3);
//!
//! // Excluding the whole palette fails
//! let all: Vec<Symbol> = generator.palette().collect();
//! assert!(generator.next(&all).is_err());
//! ```

use smallvec::SmallVec;

use crate::core::{EngineError, EngineRng, RngState, Symbol};

/// Uniform symbol source over a fixed palette.
///
/// Owns the session RNG; all draws consume entropy from it, so a fixed seed
/// reproduces the full populate/refill sequence.
#[derive(Clone, Debug)]
pub struct SymbolGenerator {
    palette_size: u8,
    rng: EngineRng,
}

impl SymbolGenerator {
    /// Create a generator over the palette `0..palette_size`.
    ///
    /// Panics if `palette_size` is zero; `EngineConfig::validate` rejects
    /// that before a generator is ever built.
    #[must_use]
    pub fn new(palette_size: u8, rng: EngineRng) -> Self {
        assert!(palette_size > 0, "palette must contain at least one symbol");
        Self { palette_size, rng }
    }

    /// Number of distinct symbols in the palette.
    #[must_use]
    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    /// Iterate over every symbol in the palette.
    pub fn palette(&self) -> impl Iterator<Item = Symbol> {
        (0..self.palette_size).map(Symbol::new)
    }

    /// Draw a uniformly random symbol from the palette minus `excluding`.
    ///
    /// Returns `ExhaustedPalette` if `excluding` covers the whole palette.
    /// Symbols in `excluding` that are outside the palette have no effect.
    pub fn next(&mut self, excluding: &[Symbol]) -> Result<Symbol, EngineError> {
        let candidates: SmallVec<[Symbol; 8]> = self
            .palette()
            .filter(|symbol| !excluding.contains(symbol))
            .collect();

        match self.rng.choose(&candidates) {
            Some(&symbol) => Ok(symbol),
            None => Err(EngineError::ExhaustedPalette {
                palette_size: self.palette_size,
            }),
        }
    }

    /// Capture the RNG state for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> RngState {
        self.rng.state()
    }

    /// The seed behind this generator's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_stay_in_palette() {
        let mut generator = SymbolGenerator::new(5, EngineRng::new(42));

        for _ in 0..200 {
            let symbol = generator.next(&[]).unwrap();
            assert!(symbol.raw() < 5);
        }
    }

    #[test]
    fn test_exclusions_respected() {
        let mut generator = SymbolGenerator::new(4, EngineRng::new(42));
        let excluded = [Symbol::new(0), Symbol::new(2)];

        for _ in 0..200 {
            let symbol = generator.next(&excluded).unwrap();
            assert!(!excluded.contains(&symbol));
        }
    }

    #[test]
    fn test_exhausted_palette() {
        let mut generator = SymbolGenerator::new(2, EngineRng::new(42));
        let all = [Symbol::new(0), Symbol::new(1)];

        let err = generator.next(&all).unwrap_err();
        assert_eq!(err, EngineError::ExhaustedPalette { palette_size: 2 });
    }

    #[test]
    fn test_out_of_palette_exclusions_ignored() {
        let mut generator = SymbolGenerator::new(2, EngineRng::new(42));
        let excluded = [Symbol::new(0), Symbol::new(17)];

        // Symbol 17 is not in the palette; only symbol 0 is actually removed.
        for _ in 0..50 {
            assert_eq!(generator.next(&excluded).unwrap(), Symbol::new(1));
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = SymbolGenerator::new(5, EngineRng::new(7));
        let mut b = SymbolGenerator::new(5, EngineRng::new(7));

        for _ in 0..100 {
            assert_eq!(a.next(&[]).unwrap(), b.next(&[]).unwrap());
        }
    }

    #[test]
    fn test_single_symbol_palette() {
        let mut generator = SymbolGenerator::new(1, EngineRng::new(42));

        assert_eq!(generator.next(&[]).unwrap(), Symbol::new(0));
        assert!(generator.next(&[Symbol::new(0)]).is_err());
    }

    #[test]
    #[should_panic(expected = "at least one symbol")]
    fn test_zero_palette_panics() {
        let _ = SymbolGenerator::new(0, EngineRng::new(42));
    }
}
