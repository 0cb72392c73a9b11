//! LZW decoder (decompression).

use crate::config::{LzwConfig, SEED_CODES};
use crate::dictionary::LzwStringTable;
use crate::stream::read_codes;
use log::debug;
use oxicomp_core::{OxiCompError, Result};

/// LZW decoder for decompression.
///
/// The decoder must use the same dictionary ceiling as the encoder that
/// produced the stream.
#[derive(Debug, Clone)]
pub struct LzwDecoder {
    config: LzwConfig,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Rebuild the original bytes from a list of codes.
    ///
    /// The decoder learns each string one step after the encoder did, so a
    /// code may refer to the entry about to be created. That entry is always
    /// the previous string followed by its own first byte.
    pub fn decode_codes(&self, codes: &[u16]) -> Result<Vec<u8>> {
        let (&first, rest) = codes
            .split_first()
            .ok_or_else(|| OxiCompError::invalid_container("LZW code count is zero"))?;

        let mut table = LzwStringTable::new(self.config);
        if first as usize >= SEED_CODES {
            return Err(OxiCompError::invalid_code(0, first, table.next_code()));
        }

        let mut output = Vec::with_capacity(codes.len().saturating_mul(2));
        let mut prev = vec![first as u8];
        output.push(first as u8);

        for (i, &code) in rest.iter().enumerate() {
            let entry = match table.get(code) {
                Some(string) => string.to_vec(),
                None if code as usize == table.next_code() && !table.is_full() => {
                    let mut string = prev.clone();
                    string.push(prev[0]);
                    string
                }
                None => {
                    return Err(OxiCompError::invalid_code(
                        i as u64 + 1,
                        code,
                        table.next_code(),
                    ));
                }
            };

            output.extend_from_slice(&entry);

            let mut learned = prev;
            learned.push(entry[0]);
            table.add(learned);
            prev = entry;
        }

        debug!(
            "lzw: {} codes -> {} bytes, dictionary {} of {} entries",
            codes.len(),
            output.len(),
            table.len(),
            self.config.max_dict_size
        );
        Ok(output)
    }

    /// Decode an LZW container.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let codes = read_codes(input)?;
        self.decode_codes(&codes)
    }
}

impl Default for LzwDecoder {
    fn default() -> Self {
        Self {
            config: LzwConfig::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::LzwEncoder;

    #[test]
    fn test_decode_self_reference() {
        // 258 is used before the decoder has learned it.
        let out = LzwDecoder::default()
            .decode_codes(&[65, 66, 256, 258, 66])
            .unwrap();
        assert_eq!(out, b"ABABABAB");
    }

    #[test]
    fn test_decode_without_self_reference() {
        let out = LzwDecoder::default()
            .decode_codes(&[84, 79, 66, 69, 79, 82, 78, 79, 84, 256, 258, 260])
            .unwrap();
        assert_eq!(out, b"TOBEORNOTTOBEOR");
    }

    #[test]
    fn test_first_code_must_be_a_byte() {
        let err = LzwDecoder::default().decode_codes(&[256]).unwrap_err();
        assert!(matches!(err, OxiCompError::CorruptStream { offset: 0, .. }));
    }

    #[test]
    fn test_code_beyond_next() {
        let err = LzwDecoder::default()
            .decode_codes(&[65, 66, 300])
            .unwrap_err();
        assert!(matches!(err, OxiCompError::CorruptStream { offset: 2, .. }));
    }

    #[test]
    fn test_empty_code_list() {
        let err = LzwDecoder::default().decode_codes(&[]).unwrap_err();
        assert!(matches!(err, OxiCompError::InvalidContainer { .. }));
    }

    #[test]
    fn test_roundtrip_small_dictionary() {
        let config = LzwConfig::new(257);
        let encoder = LzwEncoder::new(config).unwrap();
        let decoder = LzwDecoder::new(config).unwrap();
        let original = b"aaaaaaaaaabbbbbbbbbbabababab".repeat(10);
        let codes = encoder.encode_codes(&original).unwrap();
        assert!(codes.iter().all(|&c| c <= 256));
        assert_eq!(decoder.decode_codes(&codes).unwrap(), original);
    }
}
