//! Shannon-Fano decoder.

use crate::header::ShannonFanoHeader;
use log::debug;
use oxicomp_core::{BitReader, CodeTree, OxiCompError, Result};

/// Shannon-Fano decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShannonFanoDecoder;

impl ShannonFanoDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode a Shannon-Fano container.
    ///
    /// Consumes exactly `totalBitCount` payload bits. The last of them must
    /// complete a code.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut cursor = input;
        let header = ShannonFanoHeader::read(&mut cursor)?;
        if header.is_empty() {
            debug!("shannon-fano: empty container");
            return Ok(Vec::new());
        }

        let tree = CodeTree::from_code_table(&header.codes)?;
        let root = tree
            .root()
            .ok_or_else(|| OxiCompError::invalid_container("code tree has no root"))?;

        let total_bits = u64::from(header.total_bits);
        let available = (cursor.len() as u64).saturating_mul(8);
        let mut output = Vec::with_capacity(total_bits.min(available) as usize);

        let mut reader = BitReader::new(cursor);
        let mut current = root;
        for position in 0..total_bits {
            let bit = reader.read_bit()?;
            current = tree
                .step(current, bit)
                .ok_or_else(|| OxiCompError::corrupt(position, "bit sequence matches no code"))?;
            if let Some(symbol) = tree.symbol(current) {
                output.push(symbol);
                current = root;
            }
        }

        if current != root {
            return Err(OxiCompError::corrupt(total_bits, "payload ends inside a code"));
        }

        debug!(
            "shannon-fano: decoded {} bytes from {} codes ({} payload bits)",
            output.len(),
            header.codes.len(),
            total_bits
        );
        Ok(output)
    }
}
