//! Engine configuration.
//!
//! A session is configured once at startup: grid dimensions, palette size,
//! an optional seed for deterministic play, and an optional cascade round
//! cap. The engine never hardcodes any of these.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Default cascade round cap.
///
/// Cascade termination is a liveness assumption, not a proven bound; the cap
/// turns a pathological never-settling board into a diagnosable
/// `CascadeLimitExceeded` instead of an endless loop. Real cascades settle
/// within a handful of rounds.
pub const DEFAULT_MAX_CASCADE_ROUNDS: u32 = 1024;

/// Configuration for one engine session.
///
/// ## Usage
///
/// ```
/// use match3_engine::core::EngineConfig;
///
/// let config = EngineConfig::new(8, 8, 5)
///     .with_seed(42)
///     .with_max_cascade_rounds(64);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid width in columns.
    pub width: usize,

    /// Grid height in rows.
    pub height: usize,

    /// Number of distinct symbols in the palette.
    ///
    /// A palette of at least 3 guarantees population can always avoid the
    /// two preceding same-axis neighbors. Smaller palettes are accepted here
    /// and fail at populate time with `ExhaustedPalette`.
    pub palette_size: u8,

    /// Seed for deterministic play. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// Cascade round cap. `None` removes the guard entirely.
    pub max_cascade_rounds: Option<u32>,
}

impl EngineConfig {
    /// Create a configuration with the default round cap and no fixed seed.
    #[must_use]
    pub fn new(width: usize, height: usize, palette_size: u8) -> Self {
        Self {
            width,
            height,
            palette_size,
            seed: None,
            max_cascade_rounds: Some(DEFAULT_MAX_CASCADE_ROUNDS),
        }
    }

    /// Fix the RNG seed for deterministic play.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the cascade round cap.
    #[must_use]
    pub fn with_max_cascade_rounds(mut self, rounds: u32) -> Self {
        self.max_cascade_rounds = Some(rounds);
        self
    }

    /// Remove the cascade round cap.
    ///
    /// Without the cap the resolve loop relies on the probabilistic
    /// termination of refills; it may in principle run for a very long time.
    #[must_use]
    pub fn unlimited_cascade(mut self) -> Self {
        self.max_cascade_rounds = None;
        self
    }

    /// Check the configuration for structural errors.
    ///
    /// Zero-sized grids, empty palettes, and a zero round cap are rejected.
    /// A palette of 1 or 2 passes validation; it is a *population* failure,
    /// reported as `ExhaustedPalette` when populate first needs a symbol it
    /// cannot supply.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid dimensions must be nonzero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.palette_size == 0 {
            return Err(EngineError::InvalidConfig(
                "palette must contain at least one symbol".to_string(),
            ));
        }
        if self.max_cascade_rounds == Some(0) {
            return Err(EngineError::InvalidConfig(
                "cascade round cap must be nonzero (use unlimited_cascade to remove it)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new(8, 8, 5);

        assert_eq!(config.width, 8);
        assert_eq!(config.height, 8);
        assert_eq!(config.palette_size, 5);
        assert_eq!(config.seed, None);
        assert_eq!(config.max_cascade_rounds, Some(DEFAULT_MAX_CASCADE_ROUNDS));
    }

    #[test]
    fn test_builder_setters() {
        let config = EngineConfig::new(6, 10, 4).with_seed(7).with_max_cascade_rounds(32);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_cascade_rounds, Some(32));

        let config = config.unlimited_cascade();
        assert_eq!(config.max_cascade_rounds, None);
    }

    #[test]
    fn test_validate_rejects_degenerate_configs() {
        assert!(EngineConfig::new(0, 8, 5).validate().is_err());
        assert!(EngineConfig::new(8, 0, 5).validate().is_err());
        assert!(EngineConfig::new(8, 8, 0).validate().is_err());
        assert!(EngineConfig::new(8, 8, 5).with_max_cascade_rounds(0).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_small_palettes() {
        // Palettes below 3 are structurally fine; they fail at populate time.
        assert!(EngineConfig::new(8, 8, 1).validate().is_ok());
        assert!(EngineConfig::new(8, 8, 2).validate().is_ok());
        assert!(EngineConfig::new(1, 1, 3).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::new(8, 8, 5).with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
