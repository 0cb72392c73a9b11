//! # OxiComp-LZ77: Pure Rust LZ77 Compression
//!
//! This crate implements the classic LZ77 sliding-window scheme with
//! byte-sized token fields: every token is a back-reference of up to 255
//! bytes into the last 255 bytes of output, followed by one literal.
//!
//! ## Features
//!
//! - **Simple container**: a token count and three bytes per token
//! - **Configurable**: window and match limits through [`Lz77Config`]
//! - **Overlapping matches**: runs of one byte collapse into one token
//!
//! ## Example
//!
//! ```rust
//! use oxicomp_lz77::{compress, decompress};
//!
//! let original = b"abcabcabcabcabcabc";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! With a custom configuration:
//!
//! ```rust
//! use oxicomp_lz77::{Lz77Config, compress_with, decompress};
//!
//! let config = Lz77Config::new(64, 255);
//! let original = vec![b'x'; 1000];
//! let compressed = compress_with(&original, config).unwrap();
//! assert_eq!(decompress(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;
mod token;

pub use config::{Lz77Config, MAX_FIELD};
pub use decoder::Lz77Decoder;
pub use encoder::Lz77Encoder;
pub use token::{Lz77Token, TOKEN_SIZE, read_tokens, write_tokens};

use oxicomp_core::{Codec, Result};
use std::path::Path;

/// Codec name used in logs and error messages.
pub const NAME: &str = "lz77";

/// Default extension for LZ77 containers.
pub const EXTENSION: &str = ".lz77";

/// Compress `data` with the default configuration.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    Lz77Encoder::default().encode(data)
}

/// Compress `data` with the given configuration.
pub fn compress_with(data: &[u8], config: Lz77Config) -> Result<Vec<u8>> {
    Lz77Encoder::new(config)?.encode(data)
}

/// Decompress an LZ77 container.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Lz77Decoder::new().decode(data)
}

/// Compress the file at `input` into `output` with the default configuration.
pub fn compress_file(input: &Path, output: &Path) -> Result<()> {
    Lz77Codec::default().compress_file(input, output)
}

/// Decompress the container at `input` into `output`.
pub fn decompress_file(input: &Path, output: &Path) -> Result<()> {
    Lz77Codec::default().decompress_file(input, output)
}

/// LZ77 as an [`oxicomp_core::Codec`].
#[derive(Debug, Clone, Default)]
pub struct Lz77Codec {
    encoder: Lz77Encoder,
}

impl Lz77Codec {
    /// Create a codec with a custom configuration.
    pub fn with_config(config: Lz77Config) -> Result<Self> {
        Ok(Self {
            encoder: Lz77Encoder::new(config)?,
        })
    }

    /// The codec's configuration.
    pub fn config(&self) -> Lz77Config {
        self.encoder.config()
    }
}

impl Codec for Lz77Codec {
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
        decompress(input)
    }
}
