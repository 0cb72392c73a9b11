//! Error types for OxiComp operations.
//!
//! Every codec in the workspace reports failures through [`OxiCompError`].
//! The variants follow the life of a compressed file: the input could not be
//! read or written, the input was rejected before encoding, the container
//! header is malformed, or the payload disagrees with its header.

use std::io;
use thiserror::Error;

/// The main error type for OxiComp operations.
#[derive(Debug, Error)]
pub enum OxiCompError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The codec refuses to compress a zero-length input.
    #[error("{codec}: cannot compress an empty input")]
    EmptyInput {
        /// Name of the codec that rejected the input.
        codec: &'static str,
    },

    /// The container header is structurally invalid.
    #[error("Invalid container: {message}")]
    InvalidContainer {
        /// Description of the header error.
        message: String,
    },

    /// The payload is inconsistent with the container header.
    #[error("Corrupt stream at offset {offset}: {message}")]
    CorruptStream {
        /// Position where the corruption was detected (bit, token or code
        /// index depending on the codec).
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Unexpected end of input while reading a container field.
    #[error("Unexpected end of file: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Codec parameters are out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },
}

/// Result type alias for OxiComp operations.
pub type Result<T> = std::result::Result<T, OxiCompError>;

impl OxiCompError {
    /// Create an empty input error.
    pub fn empty_input(codec: &'static str) -> Self {
        Self::EmptyInput { codec }
    }

    /// Create an invalid container error.
    pub fn invalid_container(message: impl Into<String>) -> Self {
        Self::InvalidContainer {
            message: message.into(),
        }
    }

    /// Create a corrupt stream error.
    pub fn corrupt(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptStream {
            offset,
            message: message.into(),
        }
    }

    /// Create a corrupt stream error for an LZ77 back-reference that reaches
    /// before the start of the output.
    pub fn invalid_distance(token: u64, distance: usize, history_size: usize) -> Self {
        Self::corrupt(
            token,
            format!("back-reference distance {distance} exceeds history size {history_size}"),
        )
    }

    /// Create a corrupt stream error for an LZW code missing from the
    /// dictionary.
    pub fn invalid_code(index: u64, code: u16, next_code: usize) -> Self {
        Self::corrupt(
            index,
            format!("LZW code {code} is not in the dictionary (next code {next_code})"),
        )
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the underlying reader or writer.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiCompError::empty_input("huffman");
        assert_eq!(err.to_string(), "huffman: cannot compress an empty input");

        let err = OxiCompError::invalid_distance(3, 12, 4);
        assert!(err.to_string().contains("distance 12 exceeds history size 4"));

        let err = OxiCompError::invalid_code(1, 300, 257);
        assert!(err.to_string().contains("LZW code 300"));

        let err = OxiCompError::invalid_container("table size is zero");
        assert!(err.to_string().contains("table size is zero"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiCompError = io_err.into();
        assert!(err.is_io());
        assert!(matches!(err, OxiCompError::Io(_)));
    }
}
