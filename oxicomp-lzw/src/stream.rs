//! LZW code stream container.
//!
//! ```text
//! codeCount : u32
//! codeCount times: code (u16)
//! ```

use oxicomp_core::container::count_to_u32;
use oxicomp_core::{ContainerReader, ContainerWriter, OxiCompError, Result};
use std::io::{Read, Write};

/// Serialize a code list with its count prefix.
pub fn write_codes<W: Write>(writer: W, codes: &[u16]) -> Result<()> {
    let mut writer = ContainerWriter::new(writer);
    writer.write_u32(count_to_u32(codes.len(), "code count")?)?;
    for &code in codes {
        writer.write_u16(code)?;
    }
    Ok(())
}

/// Parse a code list with its count prefix.
///
/// A zero count is rejected: every valid stream holds at least one code.
pub fn read_codes<R: Read>(reader: R) -> Result<Vec<u16>> {
    let mut reader = ContainerReader::new(reader);
    let count = reader.read_u32()? as usize;
    if count == 0 {
        return Err(OxiCompError::invalid_container("LZW code count is zero"));
    }

    let mut codes = Vec::with_capacity(count.min(64 * 1024));
    for _ in 0..count {
        codes.push(reader.read_u16()?);
    }
    Ok(codes)
}
