//! Huffman decoder.

use crate::header::HuffmanHeader;
use log::debug;
use oxicomp_core::{BitReader, CodeTree, OxiCompError, Result};

/// Huffman decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuffmanDecoder;

impl HuffmanDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode a Huffman container.
    ///
    /// Exactly `originalByteLength` symbols are produced; padding bits after
    /// the last symbol are ignored.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut cursor = input;
        let header = HuffmanHeader::read(&mut cursor)?;
        let tree = CodeTree::from_code_table(&header.codes)?;

        // Every symbol costs at least one bit, so the payload bounds the
        // output regardless of the declared length.
        let available = (cursor.len() as u64).saturating_mul(8);
        let capacity = header.original_len.min(available);
        let capacity = usize::try_from(capacity).map_err(|_| {
            OxiCompError::invalid_container(format!(
                "original length {} does not fit in memory",
                header.original_len
            ))
        })?;

        let mut output = Vec::with_capacity(capacity);
        let mut reader = BitReader::new(cursor);
        for _ in 0..header.original_len {
            output.push(tree.decode_symbol(&mut reader)?);
        }

        debug!(
            "huffman: decoded {} bytes from {} codes ({} payload bits used)",
            output.len(),
            header.codes.len(),
            reader.bits_read()
        );
        Ok(output)
    }
}
