//! Shannon-Fano container header.
//!
//! ```text
//! tableSize     : u32
//! tableSize times:
//!   symbol      : u8
//!   codeLength  : u16
//!   code        : codeLength ASCII '0' / '1' characters
//! totalBitCount : u32
//! ```
//!
//! All integers are big-endian. The bit payload follows `totalBitCount`.

use oxicomp_core::container::count_to_u32;
use oxicomp_core::{
    Code, CodeTable, ContainerReader, ContainerWriter, OxiCompError, Result, SYMBOL_COUNT,
};
use std::io::{Read, Write};

/// Parsed Shannon-Fano container header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShannonFanoHeader {
    /// Code of every symbol present in the input.
    pub codes: CodeTable,
    /// Number of meaningful payload bits.
    pub total_bits: u32,
}

impl ShannonFanoHeader {
    /// Size of the serialized header in bytes.
    pub fn encoded_len(&self) -> usize {
        8 + self
            .codes
            .iter()
            .map(|(_, code)| 3 + code.len())
            .sum::<usize>()
    }

    /// Whether this is the container of an empty input.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.total_bits == 0
    }

    /// Serialize the header. Entries are written in ascending symbol order.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = ContainerWriter::new(writer);
        writer.write_u32(count_to_u32(self.codes.len(), "table size")?)?;

        for (symbol, code) in self.codes.iter() {
            let text = code.to_string();
            // Codes are at most 255 bits, well inside the u16 prefix.
            writer.write_u8(symbol)?;
            writer.write_u16(text.len() as u16)?;
            writer.write_bytes(text.as_bytes())?;
        }

        writer.write_u32(self.total_bits)?;
        Ok(())
    }

    /// Parse a header, leaving `reader` positioned at the first payload byte.
    ///
    /// A zero table size is accepted only together with a zero bit count.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut reader = ContainerReader::new(reader);
        let table_size = reader.read_u32()? as usize;
        if table_size > SYMBOL_COUNT {
            return Err(OxiCompError::invalid_container(format!(
                "table size {table_size} exceeds {SYMBOL_COUNT} symbols"
            )));
        }

        let mut codes = CodeTable::new();
        for _ in 0..table_size {
            let symbol = reader.read_u8()?;
            let len = reader.read_u16()? as usize;
            let text = reader.read_bytes(len)?;
            let code: Code = std::str::from_utf8(&text)
                .map_err(|_| {
                    OxiCompError::invalid_container(format!(
                        "code for symbol {symbol} is not a bit string"
                    ))
                })?
                .parse()?;

            if codes.get(symbol).is_some() {
                return Err(OxiCompError::invalid_container(format!(
                    "symbol {symbol} appears twice in the code table"
                )));
            }
            codes.insert(symbol, code);
        }

        let total_bits = reader.read_u32()?;
        if table_size == 0 && total_bits != 0 {
            return Err(OxiCompError::invalid_container(format!(
                "empty code table with {total_bits} payload bits"
            )));
        }

        Ok(Self { codes, total_bits })
    }
}
