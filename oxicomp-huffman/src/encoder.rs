//! Huffman encoder.

use crate::builder::build_tree;
use crate::header::HuffmanHeader;
use log::{debug, trace};
use oxicomp_core::{BitWriter, FrequencyTable, OxiCompError, Result};

/// Huffman encoder.
///
/// Two passes over the input: the first gathers byte frequencies, the second
/// writes every byte's code after the container header.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuffmanEncoder;

impl HuffmanEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode `input` into a Huffman container.
    ///
    /// Fails with [`OxiCompError::EmptyInput`] when `input` is empty.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let frequencies = FrequencyTable::from_bytes(input);
        let tree = build_tree(&frequencies).ok_or(OxiCompError::empty_input(crate::NAME))?;
        let codes = tree.code_table();

        let header = HuffmanHeader {
            original_len: input.len() as u64,
            codes,
        };
        for (symbol, code) in header.codes.iter() {
            trace!("huffman: symbol {symbol:#04x} -> {code}");
        }

        let payload_bits = header.codes.encoded_bits(&frequencies);
        let mut output = Vec::with_capacity(header.encoded_len() + payload_bits.div_ceil(8) as usize);
        header.write(&mut output)?;

        let mut writer = BitWriter::new(output);
        for &byte in input {
            // Every input byte has a code: the table was built from this input.
            let code = header.codes.get(byte).ok_or_else(|| {
                OxiCompError::invalid_container(format!("no code for symbol {byte}"))
            })?;
            writer.write_code(code)?;
        }
        let output = writer.finish()?;

        debug!(
            "huffman: encoded {} bytes with {} codes into {} bytes ({} payload bits)",
            input.len(),
            header.codes.len(),
            output.len(),
            payload_bits
        );
        Ok(output)
    }
}
