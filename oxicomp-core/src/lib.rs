//! # OxiComp Core
//!
//! Core components for the OxiComp compression workspace.
//!
//! This crate provides the building blocks shared by the four codecs:
//!
//! - [`frequency`]: Byte histograms and Shannon entropy
//! - [`code`]: Prefix codes and per-symbol code tables
//! - [`tree`]: Index-arena code trees for building and decoding prefix codes
//! - [`bitstream`]: MSB-first bit I/O for packed payloads
//! - [`container`]: Big-endian header primitives
//! - [`traits`]: The [`Codec`] contract and file operations
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI / report runner                                     │
//! │     compress, decompress, entropy, report              │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codecs                                                  │
//! │     Huffman, Shannon-Fano, LZ77, LZW                   │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     FrequencyTable, CodeTree, BitReader/BitWriter      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxicomp_core::bitstream::{BitReader, BitWriter};
//! use oxicomp_core::FrequencyTable;
//!
//! // Measure a buffer
//! let table = FrequencyTable::from_bytes(b"abracadabra");
//! assert_eq!(table.count(b'a'), 5);
//! assert!(table.entropy() > 2.0);
//!
//! // Write and read bits
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b1011, 4).unwrap();
//! let bytes = writer.finish().unwrap();
//! let mut reader = BitReader::new(&bytes[..]);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod code;
pub mod container;
pub mod error;
pub mod frequency;
pub mod traits;
pub mod tree;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use code::{Code, CodeTable, MAX_CODE_LEN};
pub use container::{ContainerReader, ContainerWriter};
pub use error::{OxiCompError, Result};
pub use frequency::{FrequencyTable, SYMBOL_COUNT, count_frequencies, entropy, entropy_of_file};
pub use traits::Codec;
pub use tree::{CodeTree, Node};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::code::{Code, CodeTable};
    pub use crate::error::{OxiCompError, Result};
    pub use crate::frequency::FrequencyTable;
    pub use crate::traits::Codec;
    pub use crate::tree::CodeTree;
}
