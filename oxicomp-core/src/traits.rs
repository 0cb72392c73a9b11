//! The codec contract shared by every compressor in the workspace.
//!
//! Each codec turns a complete input into a self-describing container and
//! back. The file-level operations are provided methods, so every codec
//! offers the same `compress(input_path, output_path)` /
//! `decompress(input_path, output_path)` pair.

use crate::error::Result;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A symmetric, whole-buffer lossless codec.
///
/// Implementations hold no state between calls, so one value can be shared
/// across threads working on different files.
pub trait Codec: Send + Sync {
    /// Human-readable codec name.
    fn name(&self) -> &'static str;

    /// Default extension (with leading dot) for files produced by this codec.
    fn extension(&self) -> &'static str;

    /// Compress `input` into a container.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Reconstruct the original bytes from a container.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Compress the file at `input` into a new file at `output`.
    ///
    /// The output file is only created once compression has succeeded, so a
    /// rejected input leaves nothing behind.
    fn compress_file(&self, input: &Path, output: &Path) -> Result<()> {
        let data = read_file(input)?;
        let compressed = self.compress(&data)?;
        debug!(
            "{}: {} -> {} ({} -> {} bytes)",
            self.name(),
            input.display(),
            output.display(),
            data.len(),
            compressed.len()
        );
        write_file(output, &compressed)
    }

    /// Decompress the container at `input` into a new file at `output`.
    ///
    /// Nothing is written when the container is invalid.
    fn decompress_file(&self, input: &Path, output: &Path) -> Result<()> {
        let data = read_file(input)?;
        let decompressed = self.decompress(&data)?;
        debug!(
            "{}: {} -> {} ({} -> {} bytes)",
            self.name(),
            input.display(),
            output.display(),
            data.len(),
            decompressed.len()
        );
        write_file(output, &decompressed)
    }
}

/// Read a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Create (or truncate) `path` and write `data` to it.
///
/// The file handle is flushed and closed before returning, on success and on
/// error.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}
