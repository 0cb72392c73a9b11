//! LZW dictionary (code table) management.
//!
//! The encoder and decoder grow the same table in lockstep, but look it up
//! in opposite directions:
//!
//! - [`LzwDictionary`] answers "which code extends this code by this byte?"
//!   for the encoder. A string is identified by its prefix code plus its last
//!   byte, so no byte strings are stored at all.
//! - [`LzwStringTable`] answers "which bytes does this code stand for?" for
//!   the decoder.
//!
//! Both stop growing at the configured ceiling.

use crate::config::{LzwConfig, SEED_CODES};
use std::collections::HashMap;

/// Encoder-side dictionary: `(prefix code, next byte) -> code`.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Learned strings, keyed by prefix code and extension byte.
    extensions: HashMap<(u16, u8), u16>,
    /// Dictionary ceiling.
    max_size: usize,
    /// Next code to assign.
    next_code: usize,
}

impl LzwDictionary {
    /// Create a dictionary holding the 256 single-byte strings.
    ///
    /// The configuration is expected to be validated.
    pub fn new(config: LzwConfig) -> Self {
        let learned = config.max_dict_size.saturating_sub(SEED_CODES);
        Self {
            extensions: HashMap::with_capacity(learned.min(4096)),
            max_size: config.max_dict_size,
            next_code: SEED_CODES,
        }
    }

    /// Code of the string `prefix` followed by `byte`, if known.
    ///
    /// Single bytes are always known: `None` as prefix yields the byte value.
    pub fn find(&self, prefix: Option<u16>, byte: u8) -> Option<u16> {
        match prefix {
            None => Some(u16::from(byte)),
            Some(prefix) => self.extensions.get(&(prefix, byte)).copied(),
        }
    }

    /// Learn the string `prefix` followed by `byte`.
    ///
    /// Returns the assigned code, or `None` when the dictionary is full.
    pub fn add(&mut self, prefix: u16, byte: u8) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        // next_code < max_size <= 65536
        let code = self.next_code as u16;
        self.extensions.insert((prefix, byte), code);
        self.next_code += 1;
        Some(code)
    }

    /// Number of entries, seed entries included.
    pub fn len(&self) -> usize {
        self.next_code
    }

    /// Always `false`: the seed entries are never removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if the dictionary is full.
    pub fn is_full(&self) -> bool {
        self.next_code >= self.max_size
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> usize {
        self.next_code
    }
}

/// Decoder-side table: `code -> bytes`.
#[derive(Debug)]
pub struct LzwStringTable {
    /// Byte string of every code, seed entries included.
    strings: Vec<Vec<u8>>,
    /// Dictionary ceiling.
    max_size: usize,
}

impl LzwStringTable {
    /// Create a table holding the 256 single-byte strings.
    pub fn new(config: LzwConfig) -> Self {
        let mut strings = Vec::with_capacity(config.max_dict_size.min(4096));
        strings.extend((0..=255u8).map(|byte| vec![byte]));
        Self {
            strings,
            max_size: config.max_dict_size,
        }
    }

    /// Byte string of `code`, if assigned.
    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.strings.get(code as usize).map(Vec::as_slice)
    }

    /// Add a string under the next code.
    ///
    /// Returns the assigned code, or `None` when the table is full.
    pub fn add(&mut self, string: Vec<u8>) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let code = self.strings.len() as u16;
        self.strings.push(string);
        Some(code)
    }

    /// Number of entries, seed entries included.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table has no entries. Never true once created.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Check if the table is full.
    pub fn is_full(&self) -> bool {
        self.strings.len() >= self.max_size
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> usize {
        self.strings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_init() {
        let dict = LzwDictionary::new(LzwConfig::DEFAULT);
        for byte in 0..=255u8 {
            assert_eq!(dict.find(None, byte), Some(u16::from(byte)));
        }
        assert_eq!(dict.next_code(), 256);
        assert_eq!(dict.len(), 256);
        assert_eq!(dict.find(Some(65), 66), None);
    }

    #[test]
    fn test_add_extension() {
        let mut dict = LzwDictionary::new(LzwConfig::DEFAULT);
        assert_eq!(dict.add(65, 66), Some(256));
        assert_eq!(dict.find(Some(65), 66), Some(256));
        assert_eq!(dict.add(256, 65), Some(257));
        assert_eq!(dict.find(Some(256), 65), Some(257));
    }

    #[test]
    fn test_dictionary_ceiling() {
        let mut dict = LzwDictionary::new(LzwConfig::new(258));
        assert!(dict.add(1, 2).is_some());
        assert!(dict.add(2, 3).is_some());
        assert!(dict.is_full());
        assert_eq!(dict.add(3, 4), None);
        assert_eq!(dict.len(), 258);
    }

    #[test]
    fn test_string_table() {
        let mut table = LzwStringTable::new(LzwConfig::new(257));
        assert_eq!(table.get(65), Some(&b"A"[..]));
        assert_eq!(table.get(256), None);

        assert_eq!(table.add(b"AB".to_vec()), Some(256));
        assert_eq!(table.get(256), Some(&b"AB"[..]));
        assert!(table.is_full());
        assert_eq!(table.add(b"BA".to_vec()), None);
        assert_eq!(table.len(), 257);
    }
}
