//! # OxiComp-Shannon-Fano: Pure Rust Shannon-Fano Coding
//!
//! Shannon-Fano coding assigns prefix codes by repeatedly splitting the
//! frequency-sorted symbol list into two halves of roughly equal weight.
//! The result is prefix-free but not always optimal; Huffman coding never
//! does worse.
//!
//! ## Container Format
//!
//! Codes travel as explicit strings of `'0'` / `'1'` characters, followed by
//! the exact number of payload bits:
//!
//! ```text
//! +-----------+------------------------------+---------------+---------+
//! | tableSize | (symbol, len, "0101...")*    | totalBitCount | payload |
//! | u32       | u8, u16, len ASCII bytes     | u32           | MSB-1st |
//! +-----------+------------------------------+---------------+---------+
//! ```
//!
//! An empty input is valid and produces a container with an empty table and
//! a zero bit count.
//!
//! ## Example
//!
//! ```rust
//! use oxicomp_shannon_fano::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//!
//! assert!(decompress(&compress(b"").unwrap()).unwrap().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod builder;
mod decoder;
mod encoder;
mod header;

pub use builder::{build_code_table, sorted_symbols, split_point};
pub use decoder::ShannonFanoDecoder;
pub use encoder::ShannonFanoEncoder;
pub use header::ShannonFanoHeader;

use oxicomp_core::{Codec, Result};
use std::path::Path;

/// Codec name used in logs and error messages.
pub const NAME: &str = "shannon-fano";

/// Default extension for Shannon-Fano containers.
pub const EXTENSION: &str = ".sf";

/// Compress `data` into a Shannon-Fano container.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    ShannonFanoEncoder::new().encode(data)
}

/// Decompress a Shannon-Fano container.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    ShannonFanoDecoder::new().decode(data)
}

/// Read only the header of a Shannon-Fano container.
pub fn read_header(data: &[u8]) -> Result<ShannonFanoHeader> {
    ShannonFanoHeader::read(&mut &data[..])
}

/// Compress the file at `input` into `output`.
pub fn compress_file(input: &Path, output: &Path) -> Result<()> {
    ShannonFanoCodec.compress_file(input, output)
}

/// Decompress the container at `input` into `output`.
pub fn decompress_file(input: &Path, output: &Path) -> Result<()> {
    ShannonFanoCodec.decompress_file(input, output)
}

/// Shannon-Fano as an [`oxicomp_core::Codec`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ShannonFanoCodec;

impl Codec for ShannonFanoCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extension(&self) -> &'static str {
        EXTENSION
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input)
    }
}
