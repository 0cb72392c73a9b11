//! Shannon-Fano encoder.

use crate::builder::build_code_table;
use crate::header::ShannonFanoHeader;
use log::{debug, trace};
use oxicomp_core::{BitWriter, FrequencyTable, OxiCompError, Result};

/// Shannon-Fano encoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShannonFanoEncoder;

impl ShannonFanoEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode `input` into a Shannon-Fano container.
    ///
    /// An empty input produces the 8-byte container with no table and no
    /// payload.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let frequencies = FrequencyTable::from_bytes(input);
        let codes = build_code_table(&frequencies);
        for (symbol, code) in codes.iter() {
            trace!("shannon-fano: symbol {symbol:#04x} -> {code}");
        }

        let payload_bits = codes.encoded_bits(&frequencies);
        let total_bits = u32::try_from(payload_bits).map_err(|_| {
            OxiCompError::invalid_container(format!(
                "payload of {payload_bits} bits does not fit the 32-bit bit count"
            ))
        })?;

        let header = ShannonFanoHeader { codes, total_bits };
        let mut output =
            Vec::with_capacity(header.encoded_len() + payload_bits.div_ceil(8) as usize);
        header.write(&mut output)?;

        let mut writer = BitWriter::new(output);
        for &byte in input {
            let code = header.codes.get(byte).ok_or_else(|| {
                OxiCompError::invalid_container(format!("no code for symbol {byte}"))
            })?;
            writer.write_code(code)?;
        }
        let output = writer.finish()?;

        debug!(
            "shannon-fano: encoded {} bytes with {} codes into {} bytes ({} payload bits)",
            input.len(),
            header.codes.len(),
            output.len(),
            total_bits
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let out = ShannonFanoEncoder::new().encode(b"").unwrap();
        assert_eq!(out, vec![0; 8]);
    }

    #[test]
    fn test_single_symbol_layout() {
        let out = ShannonFanoEncoder::new().encode(b"AAA").unwrap();
        assert_eq!(out, vec![0, 0, 0, 1, b'A', 0, 1, b'0', 0, 0, 0, 3, 0x00]);
    }

    #[test]
    fn test_two_symbols() {
        // a -> 0, b -> 1; "aab" -> 0 0 1
        let out = ShannonFanoEncoder::new().encode(b"aab").unwrap();
        assert_eq!(&out[out.len() - 5..], &[0, 0, 0, 3, 0b0010_0000]);
    }
}
