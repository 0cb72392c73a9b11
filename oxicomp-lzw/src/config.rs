//! LZW configuration.

use oxicomp_core::{OxiCompError, Result};

/// Number of single-byte entries every dictionary starts with.
pub const SEED_CODES: usize = 256;

/// Largest dictionary whose codes still fit the 16-bit wire format.
pub const MAX_DICT_LIMIT: usize = 1 << 16;

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Dictionary ceiling, seed entries included. Once reached, no new
    /// strings are added.
    pub max_dict_size: usize,
}

impl LzwConfig {
    /// Default configuration: 4096 entries (12-bit code space).
    pub const DEFAULT: Self = Self {
        max_dict_size: 4096,
    };

    /// Create a new LZW configuration.
    pub fn new(max_dict_size: usize) -> Self {
        Self { max_dict_size }
    }

    /// Check that the ceiling leaves room for at least one learned string and
    /// keeps every code within 16 bits.
    pub fn validate(&self) -> Result<()> {
        if !(SEED_CODES + 1..=MAX_DICT_LIMIT).contains(&self.max_dict_size) {
            return Err(OxiCompError::invalid_config(format!(
                "LZW dictionary size {} is outside {}..={}",
                self.max_dict_size,
                SEED_CODES + 1,
                MAX_DICT_LIMIT
            )));
        }
        Ok(())
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
