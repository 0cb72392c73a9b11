//! # OxiComp-LZW: Pure Rust LZW Compression
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! with a simple, self-describing container.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Fixed-width codes**: every code is a big-endian `u16`
//! - **Bounded dictionary**: 4096 entries by default, configurable up to
//!   the full 16-bit code space
//! - **No clear codes**: once the dictionary is full it is used as is
//!
//! ## Container Format
//!
//! ```text
//! +-----------+------------------------+
//! | codeCount | code * codeCount       |
//! | u32       | u16                    |
//! +-----------+------------------------+
//! ```
//!
//! The dictionary itself is never stored: the decoder rebuilds it from the
//! codes it reads.
//!
//! ## Example
//!
//! ```rust
//! use oxicomp_lzw::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let compressed = compress(original).unwrap();
//!
//! // Decompress
//! let decompressed = decompress(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## The Self-Reference Case
//!
//! The decoder learns every string one step after the encoder, so the
//! encoder may emit a code the decoder does not know yet. This only happens
//! for the entry being created right now, whose content is the previous
//! string plus its own first byte:
//!
//! ```rust
//! use oxicomp_lzw::{LzwDecoder, LzwEncoder};
//!
//! let codes = LzwEncoder::default().encode_codes(b"ABABABAB").unwrap();
//! assert_eq!(codes, vec![65, 66, 256, 258, 66]);
//!
//! let decoded = LzwDecoder::default().decode_codes(&codes).unwrap();
//! assert_eq!(decoded, b"ABABABAB");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod stream;

pub use config::{LzwConfig, MAX_DICT_LIMIT, SEED_CODES};
pub use decoder::LzwDecoder;
pub use dictionary::{LzwDictionary, LzwStringTable};
pub use encoder::LzwEncoder;
pub use stream::{read_codes, write_codes};

use oxicomp_core::{Codec, Result};
use std::path::Path;

/// Codec name used in logs and error messages.
pub const NAME: &str = "lzw";

/// Default extension for LZW containers.
pub const EXTENSION: &str = ".lzw";

/// Compress data with the default 4096-entry dictionary.
///
/// Empty input is rejected with [`oxicomp_core::OxiCompError::EmptyInput`],
/// since a container without codes cannot be decoded.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    LzwEncoder::default().encode(data)
}

/// Decompress data produced with the default 4096-entry dictionary.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    LzwDecoder::default().decode(data)
}

/// Compress data with the given configuration.
///
/// # Example
///
/// ```rust
/// use oxicomp_lzw::{LzwConfig, compress_with, decompress_with};
///
/// let config = LzwConfig::new(65536);
/// let data = b"Hello, World! Hello, World!";
/// let compressed = compress_with(data, config).unwrap();
/// assert_eq!(decompress_with(&compressed, config).unwrap(), data);
/// ```
pub fn compress_with(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    LzwEncoder::new(config)?.encode(data)
}

/// Decompress data with the given configuration.
pub fn decompress_with(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    LzwDecoder::new(config)?.decode(data)
}

/// Compress the file at `input` into `output`.
pub fn compress_file(input: &Path, output: &Path) -> Result<()> {
    LzwCodec::default().compress_file(input, output)
}

/// Decompress the container at `input` into `output`.
pub fn decompress_file(input: &Path, output: &Path) -> Result<()> {
    LzwCodec::default().decompress_file(input, output)
}

/// LZW as an [`oxicomp_core::Codec`].
#[derive(Debug, Clone, Default)]
pub struct LzwCodec {
    encoder: LzwEncoder,
    decoder: LzwDecoder,
}

impl LzwCodec {
    /// Create a codec with a custom dictionary ceiling.
    pub fn with_config(config: LzwConfig) -> Result<Self> {
        Ok(Self {
            encoder: LzwEncoder::new(config)?,
            decoder: LzwDecoder::new(config)?,
        })
    }

    /// The codec's configuration.
    pub fn config(&self) -> LzwConfig {
        self.encoder.config()
    }
}

impl Codec for LzwCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extension(&self) -> &'static str {
        EXTENSION
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encoder.encode(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decoder.decode(input)
    }
}
