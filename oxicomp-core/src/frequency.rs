//! Symbol histograms and Shannon entropy.
//!
//! A [`FrequencyTable`] counts how often each byte value occurs in a stream.
//! The Huffman and Shannon-Fano codecs build their code tables from it, and
//! [`FrequencyTable::entropy`] gives the information-theoretic lower bound in
//! bits per symbol that those codes approach.
//!
//! # Example
//!
//! ```
//! use oxicomp_core::FrequencyTable;
//!
//! let table = FrequencyTable::from_bytes(b"abab");
//! assert_eq!(table.count(b'a'), 2);
//! assert_eq!(table.total(), 4);
//! assert_eq!(table.entropy(), 1.0);
//! ```

use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Number of distinct byte symbols.
pub const SYMBOL_COUNT: usize = 256;

/// Chunk size used while scanning a reader.
const SCAN_CHUNK: usize = 64 * 1024;

/// Occurrence counts for every byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Create an all-zero table.
    pub fn new() -> Self {
        Self {
            counts: [0; SYMBOL_COUNT],
        }
    }

    /// Count the bytes of an in-memory buffer.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.update(data);
        table
    }

    /// Count every byte produced by `reader` until end of stream.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut table = Self::new();
        let mut buf = vec![0u8; SCAN_CHUNK];

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            table.update(&buf[..n]);
        }

        Ok(table)
    }

    /// Count every byte of the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Increment the counter of one symbol.
    #[inline]
    pub fn increment(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    /// Add all bytes of `data` to the table.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.increment(byte);
        }
    }

    /// Occurrences of `symbol`.
    #[inline]
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether no symbol has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Symbols with a non-zero count, in ascending symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }

    /// Shannon entropy in bits per symbol.
    ///
    /// Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }

        let total = total as f64;
        self.symbols()
            .map(|(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

/// Count byte frequencies of a stream.
pub fn count_frequencies<R: Read>(reader: R) -> Result<FrequencyTable> {
    FrequencyTable::from_reader(reader)
}

/// Shannon entropy of a frequency table in bits per symbol.
pub fn entropy(table: &FrequencyTable) -> f64 {
    table.entropy()
}

/// Shannon entropy of the bytes in the file at `path`.
pub fn entropy_of_file(path: &Path) -> Result<f64> {
    Ok(FrequencyTable::from_file(path)?.entropy())
}
