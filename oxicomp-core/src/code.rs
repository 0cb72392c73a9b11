//! Prefix codes and per-symbol code tables.
//!
//! A [`Code`] is the bit path assigned to one symbol; a [`CodeTable`] holds
//! the codes of every symbol present in an input. Both statistical codecs
//! produce a `CodeTable`, serialize it in their container and rebuild it on
//! the decoding side.

use crate::error::{OxiCompError, Result};
use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use std::fmt;
use std::str::FromStr;

/// Longest code a container can describe (code lengths are stored in one byte).
pub const MAX_CODE_LEN: usize = 255;

/// A variable-length bit string, first bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Create an empty code (used while a path is being built).
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// The one-bit code `0`, given to the only symbol of a single-symbol input.
    pub fn single() -> Self {
        Self { bits: vec![false] }
    }

    /// Return this code extended by one bit.
    pub fn with_bit(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the code has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits in transmission order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Whether `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Pack the bits MSB-first into `ceil(len / 8)` bytes, zero-padded.
    pub fn to_packed(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.bits.len().div_ceil(8)];
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                bytes[i / 8] |= 0x80 >> (i % 8);
            }
        }
        bytes
    }

    /// Unpack `len` bits from MSB-first packed bytes.
    pub fn from_packed(bytes: &[u8], len: usize) -> Result<Self> {
        if len == 0 || len > MAX_CODE_LEN {
            return Err(OxiCompError::invalid_container(format!(
                "code length {len} is outside 1..={MAX_CODE_LEN}"
            )));
        }
        if bytes.len() * 8 < len {
            return Err(OxiCompError::unexpected_eof(len.div_ceil(8) - bytes.len()));
        }

        let bits = (0..len)
            .map(|i| bytes[i / 8] & (0x80 >> (i % 8)) != 0)
            .collect();
        Ok(Self { bits })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = OxiCompError;

    /// Parse a string of `0` and `1` characters.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s.len() > MAX_CODE_LEN {
            return Err(OxiCompError::invalid_container(format!(
                "code length {} is outside 1..={MAX_CODE_LEN}",
                s.len()
            )));
        }

        let bits = s
            .bytes()
            .map(|c| match c {
                b'0' => Ok(false),
                b'1' => Ok(true),
                other => Err(OxiCompError::invalid_container(format!(
                    "invalid code character {:?}",
                    other as char
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { bits })
    }
}

/// Code assignments for the symbols of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeTable {
    /// Create a table with no assigned codes.
    pub fn new() -> Self {
        Self {
            codes: vec![None; SYMBOL_COUNT],
        }
    }

    /// Assign `code` to `symbol`, replacing any previous assignment.
    pub fn insert(&mut self, symbol: u8, code: Code) {
        self.codes[symbol as usize] = Some(code);
    }

    /// Code of `symbol`, if it has one.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Assigned codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }

    /// Whether no code is a prefix of another symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// Number of payload bits needed to encode an input with these frequencies.
    ///
    /// Symbols without a code are ignored.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(symbol, code)| frequencies.count(symbol) * code.len() as u64)
            .sum()
    }
}
