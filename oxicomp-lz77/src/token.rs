//! LZ77 tokens and their wire form.
//!
//! ```text
//! tokenCount : u32
//! tokenCount times: offset (u8), length (u8), symbol (u8)
//! ```

use oxicomp_core::container::count_to_u32;
use oxicomp_core::{ContainerReader, ContainerWriter, Result};
use std::io::{Read, Write};

/// Bytes per serialized token.
pub const TOKEN_SIZE: usize = 3;

/// A back-reference followed by one literal byte.
///
/// `offset == 0 && length == 0` is a plain literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Token {
    /// Distance back from the end of the output (0-255).
    pub offset: u8,
    /// Number of bytes to copy (0-255).
    pub length: u8,
    /// Byte appended after the copy.
    pub symbol: u8,
}

impl Lz77Token {
    /// A token with no back-reference.
    pub fn literal(symbol: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            symbol,
        }
    }

    /// Number of output bytes this token produces.
    pub fn output_len(&self) -> usize {
        self.length as usize + 1
    }
}

/// Serialize a token list with its count prefix.
pub fn write_tokens<W: Write>(writer: W, tokens: &[Lz77Token]) -> Result<()> {
    let mut writer = ContainerWriter::new(writer);
    writer.write_u32(count_to_u32(tokens.len(), "token count")?)?;
    for token in tokens {
        writer.write_bytes(&[token.offset, token.length, token.symbol])?;
    }
    Ok(())
}

/// Parse a token list with its count prefix.
pub fn read_tokens<R: Read>(reader: R) -> Result<Vec<Lz77Token>> {
    let mut reader = ContainerReader::new(reader);
    let count = reader.read_u32()? as usize;

    // A lying count must not drive the allocation.
    let mut tokens = Vec::with_capacity(count.min(64 * 1024));
    for _ in 0..count {
        tokens.push(Lz77Token {
            offset: reader.read_u8()?,
            length: reader.read_u8()?,
            symbol: reader.read_u8()?,
        });
    }
    Ok(tokens)
}
