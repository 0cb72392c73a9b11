//! LZ77 decoder.

use crate::token::{Lz77Token, read_tokens};
use log::debug;
use oxicomp_core::{OxiCompError, Result};

/// LZ77 decoder.
///
/// Needs no configuration: any offset that stays inside the output produced
/// so far is accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz77Decoder;

impl Lz77Decoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Apply tokens in order, producing the original bytes.
    pub fn apply(&self, tokens: &[Lz77Token]) -> Result<Vec<u8>> {
        let mut output: Vec<u8> = Vec::with_capacity(tokens.len() * 2);

        for (index, token) in tokens.iter().enumerate() {
            let offset = token.offset as usize;
            if offset > output.len() {
                return Err(OxiCompError::invalid_distance(
                    index as u64,
                    offset,
                    output.len(),
                ));
            }
            if offset == 0 && token.length > 0 {
                return Err(OxiCompError::corrupt(
                    index as u64,
                    format!("copy of {} bytes with zero offset", token.length),
                ));
            }

            // Byte by byte: the copy may overlap the bytes it produces.
            let start = output.len() - offset;
            for i in 0..token.length as usize {
                let byte = output[start + i];
                output.push(byte);
            }
            output.push(token.symbol);
        }

        Ok(output)
    }

    /// Decode an LZ77 container.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let tokens = read_tokens(input)?;
        let output = self.apply(&tokens)?;
        debug!(
            "lz77: decoded {} tokens into {} bytes",
            tokens.len(),
            output.len()
        );
        Ok(output)
    }
}
