//! Algorithm selection and codec construction.

use clap::{Args, ValueEnum};
use oxicomp_core::{Codec, Result};
use oxicomp_huffman::HuffmanCodec;
use oxicomp_lz77::{Lz77Codec, Lz77Config};
use oxicomp_lzw::{LzwCodec, LzwConfig};
use oxicomp_shannon_fano::ShannonFanoCodec;

/// Compression algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Huffman coding
    Huffman,
    /// Shannon-Fano coding
    ShannonFano,
    /// LZ77 sliding window
    Lz77,
    /// LZW dictionary coding
    Lzw,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Huffman,
        Algorithm::ShannonFano,
        Algorithm::Lz77,
        Algorithm::Lzw,
    ];

    /// Short name, matching the codec's own name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Huffman => oxicomp_huffman::NAME,
            Algorithm::ShannonFano => oxicomp_shannon_fano::NAME,
            Algorithm::Lz77 => oxicomp_lz77::NAME,
            Algorithm::Lzw => oxicomp_lzw::NAME,
        }
    }

    /// Section title used in reports.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Huffman => "HUFFMAN CODING",
            Algorithm::ShannonFano => "SHANNON-FANO CODING",
            Algorithm::Lz77 => "LZ77 COMPRESSION",
            Algorithm::Lzw => "LZW COMPRESSION",
        }
    }

    /// Build the codec with the given options.
    ///
    /// Out-of-range LZ77 or LZW parameters fail here, before any file is
    /// touched.
    pub fn codec(self, options: &CodecOptions) -> Result<Box<dyn Codec>> {
        Ok(match self {
            Algorithm::Huffman => Box::new(HuffmanCodec),
            Algorithm::ShannonFano => Box::new(ShannonFanoCodec),
            Algorithm::Lz77 => Box::new(Lz77Codec::with_config(Lz77Config::new(
                options.window,
                options.max_match,
            ))?),
            Algorithm::Lzw => Box::new(LzwCodec::with_config(LzwConfig::new(options.max_dict))?),
        })
    }
}

/// Tuning parameters for the dictionary codecs.
#[derive(Debug, Clone, Args)]
pub struct CodecOptions {
    /// LZ77 search window in bytes (1-255)
    #[arg(long, default_value_t = Lz77Config::DEFAULT.window)]
    pub window: usize,

    /// LZ77 longest match in bytes (1-255)
    #[arg(long, default_value_t = Lz77Config::DEFAULT.max_match)]
    pub max_match: usize,

    /// LZW dictionary size in entries (257-65536)
    #[arg(long, default_value_t = LzwConfig::DEFAULT.max_dict_size)]
    pub max_dict: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            window: Lz77Config::DEFAULT.window,
            max_match: Lz77Config::DEFAULT.max_match,
            max_dict: LzwConfig::DEFAULT.max_dict_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_names_match() {
        let options = CodecOptions::default();
        for algorithm in Algorithm::ALL {
            let codec = algorithm.codec(&options).unwrap();
            assert_eq!(codec.name(), algorithm.name());
        }
    }

    #[test]
    fn test_extensions() {
        let options = CodecOptions::default();
        let extensions: Vec<_> = Algorithm::ALL
            .iter()
            .map(|a| a.codec(&options).unwrap().extension())
            .collect();
        assert_eq!(extensions, vec![".huff", ".sf", ".lz77", ".lzw"]);
    }

    #[test]
    fn test_invalid_options() {
        let options = CodecOptions {
            window: 0,
            ..CodecOptions::default()
        };
        assert!(Algorithm::Lz77.codec(&options).is_err());
        assert!(Algorithm::Huffman.codec(&options).is_ok());

        let options = CodecOptions {
            max_dict: 100,
            ..CodecOptions::default()
        };
        assert!(Algorithm::Lzw.codec(&options).is_err());
    }
}
