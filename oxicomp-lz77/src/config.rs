//! LZ77 configuration.

use oxicomp_core::{OxiCompError, Result};

/// Largest window or match length the one-byte token fields can carry.
pub const MAX_FIELD: usize = u8::MAX as usize;

/// LZ77 configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    /// How many already-processed bytes a match may reach back (1-255).
    pub window: usize,
    /// Longest match a single token may describe (1-255).
    pub max_match: usize,
}

impl Lz77Config {
    /// Default configuration: 255-byte window, 15-byte matches.
    pub const DEFAULT: Self = Self {
        window: 255,
        max_match: 15,
    };

    /// Create a new configuration.
    pub fn new(window: usize, max_match: usize) -> Self {
        Self { window, max_match }
    }

    /// Check that both parameters fit their one-byte token fields.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_FIELD).contains(&self.window) {
            return Err(OxiCompError::invalid_config(format!(
                "LZ77 window {} is outside 1..={MAX_FIELD}",
                self.window
            )));
        }
        if !(1..=MAX_FIELD).contains(&self.max_match) {
            return Err(OxiCompError::invalid_config(format!(
                "LZ77 max match length {} is outside 1..={MAX_FIELD}",
                self.max_match
            )));
        }
        Ok(())
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
