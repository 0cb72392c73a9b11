//! # OxiComp-Huffman: Pure Rust Huffman Coding
//!
//! This crate compresses byte streams with a static Huffman code built from
//! the byte frequencies of the whole input.
//!
//! ## Features
//!
//! - **Deterministic**: equal frequencies are merged in FIFO order, so the
//!   same input always produces the same container
//! - **Self-describing**: the container carries the original length and the
//!   full code table
//! - **Deep trees**: code lengths up to 255 bits, built and walked without
//!   recursion
//!
//! ## Container Format
//!
//! ```text
//! +----------------------+------------+-------------------------------+---------+
//! | originalByteLength   | tableSize  | (symbol, bitLength, codeBits)*| payload |
//! | u64                  | u32        | u8, u8, ceil(bitLength/8) B   | MSB-1st |
//! +----------------------+------------+-------------------------------+---------+
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxicomp_huffman::{compress, decompress};
//!
//! let original = b"AAAAAAAAAA";
//! let compressed = compress(original).unwrap();
//! assert_eq!(compressed.len(), 17);
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod builder;
mod decoder;
mod encoder;
mod header;

pub use builder::{build_code_table, build_tree};
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use header::HuffmanHeader;

use oxicomp_core::{Codec, Result};
use std::path::Path;

/// Codec name used in logs and error messages.
pub const NAME: &str = "huffman";

/// Default extension for Huffman containers.
pub const EXTENSION: &str = ".huff";

/// Compress `data` into a Huffman container.
///
/// Empty input is rejected with [`oxicomp_core::OxiCompError::EmptyInput`].
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanEncoder::new().encode(data)
}

/// Decompress a Huffman container.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanDecoder::new().decode(data)
}

/// Read only the header of a Huffman container.
///
/// Useful for inspecting the original length and the code table without
/// decoding the payload.
///
/// # Example
///
/// ```rust
/// use oxicomp_huffman::{compress, read_header};
///
/// let compressed = compress(b"AAAAAAAAAA").unwrap();
/// let header = read_header(&compressed).unwrap();
/// assert_eq!(header.original_len, 10);
/// assert_eq!(header.codes.get(b'A').unwrap().to_string(), "0");
/// ```
pub fn read_header(data: &[u8]) -> Result<HuffmanHeader> {
    HuffmanHeader::read(&mut &data[..])
}

/// Compress the file at `input` into `output`.
pub fn compress_file(input: &Path, output: &Path) -> Result<()> {
    HuffmanCodec.compress_file(input, output)
}

/// Decompress the container at `input` into `output`.
pub fn decompress_file(input: &Path, output: &Path) -> Result<()> {
    HuffmanCodec.decompress_file(input, output)
}

/// Huffman as an [`oxicomp_core::Codec`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HuffmanCodec;

impl Codec for HuffmanCodec {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"A").unwrap();
        // 8 + 4 + 3 header bytes, one payload byte
        assert_eq!(compressed.len(), 16);
        assert_eq!(decompress(&compressed).unwrap(), b"A");
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original).unwrap();
        let header = read_header(&compressed).unwrap();
        assert_eq!(header.codes.len(), 256);
        // Uniform frequencies give a complete tree of depth 8.
        assert_eq!(header.codes.max_len(), 8);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_codec_trait() {
        let codec = HuffmanCodec;
        assert_eq!(codec.name(), "huffman");
        assert_eq!(codec.extension(), ".huff");
        let packed = Codec::compress(&codec, b"abracadabra").unwrap();
        assert_eq!(Codec::decompress(&codec, &packed).unwrap(), b"abracadabra");
    }
}
