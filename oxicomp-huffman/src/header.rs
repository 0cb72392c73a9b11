//! Huffman container header.
//!
//! ```text
//! originalByteLength : u64
//! tableSize          : u32
//! tableSize times:
//!   symbol           : u8
//!   codeBitLength    : u8 (1..=255)
//!   codeBits         : ceil(codeBitLength / 8) bytes, MSB-first
//! ```
//!
//! All integers are big-endian. The bit payload follows the last entry.

use oxicomp_core::container::count_to_u32;
use oxicomp_core::{
    Code, CodeTable, ContainerReader, ContainerWriter, OxiCompError, Result, SYMBOL_COUNT,
};
use std::io::{Read, Write};

/// Parsed Huffman container header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanHeader {
    /// Number of bytes in the original input.
    pub original_len: u64,
    /// Code of every symbol present in the input.
    pub codes: CodeTable,
}

impl HuffmanHeader {
    /// Size of the serialized header in bytes.
    pub fn encoded_len(&self) -> usize {
        12 + self
            .codes
            .iter()
            .map(|(_, code)| 2 + code.len().div_ceil(8))
            .sum::<usize>()
    }

    /// Serialize the header. Entries are written in ascending symbol order.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = ContainerWriter::new(writer);
        writer.write_u64(self.original_len)?;
        writer.write_u32(count_to_u32(self.codes.len(), "table size")?)?;

        for (symbol, code) in self.codes.iter() {
            let len = u8::try_from(code.len()).map_err(|_| {
                OxiCompError::invalid_container(format!(
                    "code for symbol {symbol} is {} bits long",
                    code.len()
                ))
            })?;
            writer.write_u8(symbol)?;
            writer.write_u8(len)?;
            writer.write_bytes(&code.to_packed())?;
        }
        Ok(())
    }

    /// Parse a header, leaving `reader` positioned at the first payload byte.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut reader = ContainerReader::new(reader);
        let original_len = reader.read_u64()?;
        let table_size = reader.read_u32()? as usize;

        if table_size == 0 {
            return Err(OxiCompError::invalid_container("table size is zero"));
        }
        if table_size > SYMBOL_COUNT {
            return Err(OxiCompError::invalid_container(format!(
                "table size {table_size} exceeds {SYMBOL_COUNT} symbols"
            )));
        }

        let mut codes = CodeTable::new();
        for _ in 0..table_size {
            let symbol = reader.read_u8()?;
            let len = reader.read_u8()? as usize;
            if len == 0 {
                return Err(OxiCompError::invalid_container(format!(
                    "symbol {symbol} has a zero-length code"
                )));
            }
            let packed = reader.read_bytes(len.div_ceil(8))?;
            let code = Code::from_packed(&packed, len)?;

            if codes.get(symbol).is_some() {
                return Err(OxiCompError::invalid_container(format!(
                    "symbol {symbol} appears twice in the code table"
                )));
            }
            codes.insert(symbol, code);
        }

        Ok(Self {
            original_len,
            codes,
        })
    }
}
