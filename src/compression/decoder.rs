//! LZ77 token replay.

use super::Decompressor;
use crate::config::{CodecConfig, DEFAULT_MAX_INPUT_SIZE};
use crate::error::{Lz77Error, Result};
use crate::types::Token;

/// Replays a token sequence into a byte buffer.
#[derive(Debug, Clone)]
pub struct Lz77Decompressor {
    max_output_size: usize,
}

impl Default for Lz77Decompressor {
    fn default() -> Self {
        Self {
            max_output_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl Lz77Decompressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the output size limit from a codec configuration.
    pub fn with_config(mut self, config: &CodecConfig) -> Self {
        self.max_output_size = config.max_input_size;
        self
    }

    /// Set the largest output the decompressor will allocate.
    pub fn with_max_output_size(mut self, max_output_size: usize) -> Self {
        self.max_output_size = max_output_size;
        self
    }
}

/// Exact number of bytes `tokens` decode to.
pub fn decoded_len(tokens: &[Token]) -> Result<usize> {
    tokens.iter().try_fold(0usize, |total, token| {
        total
            .checked_add(token.decoded_len())
            .ok_or_else(|| Lz77Error::CorruptStream("decoded size overflows".into()))
    })
}

impl Decompressor for Lz77Decompressor {
    fn decompress(&self, tokens: &[Token]) -> Result<Vec<u8>> {
        let size = decoded_len(tokens)?;
        if size > self.max_output_size {
            return Err(Lz77Error::InputTooLarge {
                size,
                limit: self.max_output_size,
            });
        }

        let mut output = Vec::with_capacity(size);

        for (index, token) in tokens.iter().enumerate() {
            match *token {
                Token::Literal(byte) => output.push(byte),
                Token::Copy {
                    offset,
                    length,
                    next,
                } => {
                    let offset = offset as usize;
                    if offset == 0 || offset > output.len() {
                        return Err(Lz77Error::CorruptStream(format!(
                            "token {index}: offset {offset} outside {} decoded bytes",
                            output.len()
                        )));
                    }

                    // Byte by byte: the source may run into the bytes being written.
                    let start = output.len() - offset;
                    for i in 0..length as usize {
                        let byte = output[start + i];
                        output.push(byte);
                    }

                    if let Some(next) = next {
                        output.push(next.get());
                    }
                }
            }
        }

        if output.len() != size {
            return Err(Lz77Error::CorruptStream(format!(
                "decoded {} bytes, expected {size}",
                output.len()
            )));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU8;

    fn decompress(tokens: &[Token]) -> Result<Vec<u8>> {
        Lz77Decompressor::new().decompress(tokens)
    }

    #[test]
    fn test_empty_sequence() {
        assert!(decompress(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_zero_literal() {
        let tokens = [Token::new(0, 0, 0).unwrap()];
        assert_eq!(decompress(&tokens).unwrap(), vec![0x00]);
    }

    #[test]
    fn test_overlapping_copy() {
        let tokens = [Token::literal(b'a'), Token::copy(1, 4, None).unwrap()];
        assert_eq!(decompress(&tokens).unwrap(), b"aaaaa");
    }

    #[test]
    fn test_copy_with_trailing_byte() {
        let tokens = [
            Token::literal(b'x'),
            Token::literal(b'y'),
            Token::copy(2, 5, NonZeroU8::new(b'!')).unwrap(),
        ];
        assert_eq!(decompress(&tokens).unwrap(), b"xyxyxyx!");
    }

    #[test]
    fn test_zero_length_copy_emits_trailing_byte() {
        let tokens = [Token::literal(b'q'), Token::new(1, 0, b'r' as i8).unwrap()];
        assert_eq!(decompress(&tokens).unwrap(), b"qr");
    }

    #[test]
    fn test_offset_before_start() {
        let tokens = [Token::literal(b'a'), Token::copy(2, 1, None).unwrap()];
        assert!(matches!(decompress(&tokens), Err(Lz77Error::CorruptStream(_))));

        let tokens = [Token::copy(1, 1, None).unwrap()];
        assert!(matches!(decompress(&tokens), Err(Lz77Error::CorruptStream(_))));
    }

    #[test]
    fn test_zero_offset_copy_rejected() {
        let tokens = [
            Token::literal(b'a'),
            Token::Copy {
                offset: 0,
                length: 1,
                next: None,
            },
        ];
        assert!(matches!(decompress(&tokens), Err(Lz77Error::CorruptStream(_))));
    }

    #[test]
    fn test_decoded_len() {
        let tokens = [
            Token::literal(1),
            Token::copy(1, 10, None).unwrap(),
            Token::copy(1, 3, NonZeroU8::new(9)).unwrap(),
        ];
        assert_eq!(decoded_len(&tokens).unwrap(), 1 + 10 + 4);
    }

    #[test]
    fn test_output_limit() {
        let tokens = [Token::literal(1), Token::copy(1, 1_000, None).unwrap()];
        let decompressor = Lz77Decompressor::new().with_max_output_size(100);
        assert!(matches!(
            decompressor.decompress(&tokens),
            Err(Lz77Error::InputTooLarge { size: 1001, limit: 100 })
        ));
    }
}
