//! LZ77 encoder.
//!
//! # Algorithm
//!
//! At each cursor position the encoder scans the window backwards, nearest
//! candidate first, for the longest run of bytes equal to the bytes at the
//! cursor. A match may run past the cursor into the bytes it describes, which
//! is how a single token covers a long run of one byte. The token records the
//! match and the byte that follows it, so the cursor always advances by at
//! least one.

use crate::config::Lz77Config;
use crate::token::{Lz77Token, TOKEN_SIZE, write_tokens};
use log::debug;
use oxicomp_core::Result;

/// LZ77 encoder.
#[derive(Debug, Clone)]
pub struct Lz77Encoder {
    config: Lz77Config,
}

impl Lz77Encoder {
    /// Create an encoder, validating the configuration.
    pub fn new(config: Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The encoder's configuration.
    pub fn config(&self) -> Lz77Config {
        self.config
    }

    /// Find the token for the cursor at `pos`.
    ///
    /// Among equally long matches the nearest one wins. The search stops as
    /// soon as the longest attainable match is found.
    pub fn find_match(&self, input: &[u8], pos: usize) -> Lz77Token {
        let last = input.len() - 1;
        if pos == last {
            return Lz77Token::literal(input[pos]);
        }

        // Leave room for the trailing literal.
        let max_len = self.config.max_match.min(last - pos);
        let min_pos = pos.saturating_sub(self.config.window);

        let mut best_len = 0usize;
        let mut best_offset = 0usize;
        for candidate in (min_pos..pos).rev() {
            let len = input[candidate..]
                .iter()
                .zip(&input[pos..pos + max_len])
                .take_while(|(a, b)| a == b)
                .count();

            if len > best_len {
                best_len = len;
                best_offset = pos - candidate;
                if best_len == max_len {
                    break;
                }
            }
        }

        // window and max_match are validated to fit one byte.
        Lz77Token {
            offset: best_offset as u8,
            length: best_len as u8,
            symbol: input[pos + best_len],
        }
    }

    /// Split `input` into tokens.
    pub fn tokenize(&self, input: &[u8]) -> Vec<Lz77Token> {
        let mut tokens = Vec::new();
        let mut cursor = 0;
        while cursor < input.len() {
            let token = self.find_match(input, cursor);
            cursor += token.output_len();
            tokens.push(token);
        }
        tokens
    }

    /// Encode `input` into an LZ77 container.
    ///
    /// An empty input produces a container with zero tokens.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let tokens = self.tokenize(input);
        let mut output = Vec::with_capacity(4 + tokens.len() * TOKEN_SIZE);
        write_tokens(&mut output, &tokens)?;

        debug!(
            "lz77: encoded {} bytes into {} tokens ({} bytes, window {}, max match {})",
            input.len(),
            tokens.len(),
            output.len(),
            self.config.window,
            self.config.max_match
        );
        Ok(output)
    }
}

impl Default for Lz77Encoder {
    fn default() -> Self {
        Self {
            config: Lz77Config::DEFAULT,
        }
    }
}
