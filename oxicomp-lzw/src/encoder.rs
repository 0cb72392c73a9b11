//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use crate::stream::write_codes;
use log::debug;
use oxicomp_core::{OxiCompError, Result};

/// LZW encoder for compression.
///
/// Each call builds its own dictionary, so one encoder can be shared.
#[derive(Debug, Clone)]
pub struct LzwEncoder {
    config: LzwConfig,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The encoder's configuration.
    pub fn config(&self) -> LzwConfig {
        self.config
    }

    /// Turn `input` into a list of dictionary codes.
    ///
    /// # Algorithm
    ///
    /// 1. Start with the 256 single-byte strings (codes 0-255)
    /// 2. Extend the current string while the extension is known
    /// 3. Otherwise emit the current string's code, learn the extension
    ///    (until the dictionary is full) and restart from the new byte
    /// 4. Emit the code of whatever remains
    pub fn encode_codes(&self, input: &[u8]) -> Result<Vec<u16>> {
        if input.is_empty() {
            return Err(OxiCompError::empty_input(crate::NAME));
        }

        let mut dict = LzwDictionary::new(self.config);
        let mut codes = Vec::with_capacity(input.len() / 2 + 1);
        let mut current: Option<u16> = None;

        for &byte in input {
            if let Some(code) = dict.find(current, byte) {
                current = Some(code);
                continue;
            }
            if let Some(prefix) = current {
                codes.push(prefix);
                dict.add(prefix, byte);
            }
            current = Some(u16::from(byte));
        }

        if let Some(code) = current {
            codes.push(code);
        }

        debug!(
            "lzw: {} bytes -> {} codes, dictionary {} of {} entries",
            input.len(),
            codes.len(),
            dict.len(),
            self.config.max_dict_size
        );
        Ok(codes)
    }

    /// Encode `input` into an LZW container.
    ///
    /// Fails with [`OxiCompError::EmptyInput`] when `input` is empty.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let codes = self.encode_codes(input)?;
        let mut output = Vec::with_capacity(4 + codes.len() * 2);
        write_codes(&mut output, &codes)?;
        Ok(output)
    }
}

impl Default for LzwEncoder {
    fn default() -> Self {
        Self {
            config: LzwConfig::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_abababab() {
        let codes = LzwEncoder::default().encode_codes(b"ABABABAB").unwrap();
        assert_eq!(codes, vec![65, 66, 256, 258, 66]);
    }

    #[test]
    fn test_encode_tobeornot() {
        let codes = LzwEncoder::default()
            .encode_codes(b"TOBEORNOTTOBEORTOBEORNOT")
            .unwrap();
        assert_eq!(
            codes,
            vec![
                84, 79, 66, 69, 79, 82, 78, 79, 84, 256, 258, 260, 265, 259, 261, 263
            ]
        );
    }

    #[test]
    fn test_single_byte() {
        let codes = LzwEncoder::default().encode_codes(b"A").unwrap();
        assert_eq!(codes, vec![65]);
        let bytes = LzwEncoder::default().encode(b"A").unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 1, 0, 65]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = LzwEncoder::default().encode(b"").unwrap_err();
        assert!(matches!(err, OxiCompError::EmptyInput { codec: "lzw" }));
    }

    #[test]
    fn test_codes_respect_ceiling() {
        let encoder = LzwEncoder::new(LzwConfig::new(300)).unwrap();
        let input: Vec<u8> = (0..5000u32).map(|i| (i % 7 + i % 13) as u8).collect();
        let codes = encoder.encode_codes(&input).unwrap();
        assert!(codes.iter().all(|&c| (c as usize) < 300));
    }

    #[test]
    fn test_invalid_config() {
        assert!(LzwEncoder::new(LzwConfig::new(100)).is_err());
    }
}
