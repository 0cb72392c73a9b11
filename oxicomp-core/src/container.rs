//! Big-endian primitives for container headers.
//!
//! Every OxiComp container starts with a header made of fixed-width unsigned
//! integers in network byte order, followed by a codec-specific body. These
//! helpers keep the byte order and the end-of-file handling identical across
//! codecs.

use crate::error::{OxiCompError, Result};
use std::io::{self, Read, Write};

/// Fill `buf` completely, mapping a short read to [`OxiCompError::UnexpectedEof`].
pub fn read_exact_or_eof<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => OxiCompError::unexpected_eof(buf.len()),
        _ => OxiCompError::Io(e),
    })
}

/// Reads big-endian header fields and tracks how many bytes were consumed.
#[derive(Debug)]
pub struct ContainerReader<R: Read> {
    reader: R,
    position: u64,
}

impl<R: Read> ContainerReader<R> {
    /// Create a new container reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get a mutable reference to the underlying reader.
    ///
    /// Bytes read through it are not counted by [`ContainerReader::position`].
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume the container reader and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        read_exact_or_eof(&mut self.reader, &mut buf)?;
        self.position += N as u64;
        Ok(buf)
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read a big-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read a big-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Read a big-endian `u64`.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// Read exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        read_exact_or_eof(&mut self.reader, &mut buf)?;
        self.position += len as u64;
        Ok(buf)
    }
}

/// Writes big-endian header fields.
#[derive(Debug)]
pub struct ContainerWriter<W: Write> {
    writer: W,
}

impl<W: Write> ContainerWriter<W> {
    /// Create a new container writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the container writer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.writer.write_all(&[value])?;
        Ok(())
    }

    /// Write a big-endian `u16`.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.writer.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    /// Write a big-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.writer.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    /// Write a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.writer.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }
}

/// Convert a count to the 4-byte field used by container headers.
pub fn count_to_u32(count: usize, what: &str) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        OxiCompError::invalid_container(format!("{what} {count} does not fit in 32 bits"))
    })
}
