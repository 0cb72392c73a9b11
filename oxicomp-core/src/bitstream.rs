//! Bit-level I/O for prefix-coded payloads.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! data at the bit level, which is what the variable-length codes produced by
//! the Huffman and Shannon-Fano codecs require.
//!
//! # Bit Ordering
//!
//! All OxiComp containers use MSB-first (Most Significant Bit first) ordering:
//! the first bit of a stream is bit 7 of the first byte. A final partial byte
//! is padded with zero bits on the low side.
//!
//! # Example
//!
//! ```
//! use oxicomp_core::bitstream::{BitReader, BitWriter};
//!
//! // Writing bits
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b101, 3).unwrap();  // Write 3 bits
//! writer.write_bits(0b1100, 4).unwrap(); // Write 4 bits
//! let output = writer.finish().unwrap();
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! // Reading bits
//! let mut reader = BitReader::new(&output[..]);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::code::Code;
use crate::container::read_exact_or_eof;
use crate::error::Result;
use std::io::{Read, Write};

/// A bit-level reader that wraps any `Read` implementation.
///
/// Bytes are pulled from the underlying reader one at a time as bits are
/// consumed, so the reader never reads past the byte holding the last
/// requested bit.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Current byte being consumed (MSB-first).
    current: u8,
    /// Number of unread bits left in `current`.
    bits_in_current: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current: 0,
            bits_in_current: 0,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    ///
    /// Unread bits of a partially consumed byte are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.bits_in_current == 0 {
            let mut byte = [0u8; 1];
            read_exact_or_eof(&mut self.reader, &mut byte)?;
            self.current = byte[0];
            self.bits_in_current = 8;
        }

        self.bits_in_current -= 1;
        self.total_bits_read += 1;
        Ok((self.current >> self.bits_in_current) & 1 == 1)
    }

    /// Read up to 32 bits from the stream.
    ///
    /// The first bit read ends up in the most significant position of the
    /// `count`-bit result.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }

    /// Discard the unread bits of the current byte.
    pub fn align_to_byte(&mut self) {
        self.total_bits_read += self.bits_in_current as u64;
        self.bits_in_current = 0;
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits in an internal buffer and writes complete
/// bytes to the underlying writer. Call [`BitWriter::finish`] when done to
/// pad and write the final partial byte; dropping the writer without calling
/// it loses up to seven trailing bits.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer (MSB-first, only the low `bits_in_buffer` bits are valid).
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the total number of bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.writer.write_all(&[byte])?;
            self.bits_in_buffer -= 8;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;
        Ok(())
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buffer = (self.buffer << 1) | bit as u64;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer >= 8 {
            self.flush_bytes()?;
        }

        Ok(())
    }

    /// Write the low `count` bits of `value` (0-32), most significant first.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        if count == 0 {
            return Ok(());
        }

        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count) - 1
        };

        self.buffer = (self.buffer << count) | (value & mask) as u64;
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write every bit of a prefix code.
    pub fn write_code(&mut self, code: &Code) -> Result<()> {
        for bit in code.iter() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Pad to the next byte boundary with zeros.
    pub fn align_to_byte(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            self.buffer <<= padding;
            self.bits_in_buffer += padding;
            self.flush_bytes()?;
        }
        Ok(())
    }

    /// Pad the final byte, flush the underlying writer and return it.
    pub fn finish(mut self) -> Result<W> {
        self.align_to_byte()?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitreader_basic() {
        // 0b10110101 = 0xB5
        let data = [0xB5u8];
        let mut reader = BitReader::new(&data[..]);

        assert!(reader.read_bit().unwrap()); // MSB first
        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.bits_read(), 8);
    }

    #[test]
    fn test_bitreader_multi_byte() {
        let data = [0xFFu8, 0x00];
        let mut reader = BitReader::new(&data[..]);

        assert_eq!(reader.read_bits(4).unwrap(), 0xF);
        assert_eq!(reader.read_bits(8).unwrap(), 0xF0); // Crosses byte boundary
        assert_eq!(reader.read_bits(4).unwrap(), 0x0);
    }

    #[test]
    fn test_bitreader_eof() {
        let data = [0xAAu8];
        let mut reader = BitReader::new(&data[..]);
        reader.read_bits(8).unwrap();
        assert!(matches!(
            reader.read_bit(),
            Err(crate::OxiCompError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_bitwriter_basic() {
        let mut writer = BitWriter::new(Vec::new());
        for bit in [true, false, true, true, false, true, false, true] {
            writer.write_bit(bit).unwrap();
        }
        assert_eq!(writer.finish().unwrap(), vec![0xB5]);
    }

    #[test]
    fn test_bitwriter_padding() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b11, 2).unwrap();
        writer.write_bits(0b0, 1).unwrap();
        assert_eq!(writer.bits_written(), 3);
        // 110 followed by five zero pad bits
        assert_eq!(writer.finish().unwrap(), vec![0b1100_0000]);
    }

    #[test]
    fn test_bitwriter_wide_values() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0xDEADBEEF, 32).unwrap();
        writer.write_bits(0b1, 1).unwrap();
        assert_eq!(
            writer.finish().unwrap(),
            vec![0xDE, 0xAD, 0xBE, 0xEF, 0x80]
        );
    }

    #[test]
    fn test_roundtrip() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b101, 3).unwrap();
        writer.write_bits(0b1111, 4).unwrap();
        writer.write_bits(0b10, 2).unwrap();
        writer.write_bits(0b110011, 6).unwrap();
        let output = writer.finish().unwrap();

        let mut reader = BitReader::new(&output[..]);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1111);
        assert_eq!(reader.read_bits(2).unwrap(), 0b10);
        assert_eq!(reader.read_bits(6).unwrap(), 0b110011);
    }

    #[test]
    fn test_align_to_byte() {
        let data = [0xFFu8, 0xAA];
        let mut reader = BitReader::new(&data[..]);

        reader.read_bits(3).unwrap(); // Read 3 bits
        reader.align_to_byte(); // Skip remaining 5 bits
        assert_eq!(reader.read_bits(8).unwrap(), 0xAA);
        assert_eq!(reader.bits_read(), 16);
    }
}
