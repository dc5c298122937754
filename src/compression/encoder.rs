//! Greedy LZ77 encoder.
//!
//! At each position the longest match in the window is taken. A match is
//! emitted together with the byte that follows it, unless that byte is
//! zero or the input ends there: a trailing zero is left in place and
//! becomes the start of the next token.

use std::num::NonZeroU8;

use super::match_finder::create_match_finder;
use super::window::SlidingWindow;
use super::Compressor;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::types::Token;
use crate::validation::validate_input;

/// Greedy sliding-window compressor.
#[derive(Debug, Clone, Default)]
pub struct Lz77Compressor {
    config: CodecConfig,
}

impl Lz77Compressor {
    /// Compressor with the default 1024-byte window and 256-byte look-ahead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration options.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Compressor for Lz77Compressor {
    fn compress(&self, source: &[u8]) -> Result<Vec<Token>> {
        self.config.validate()?;
        validate_input(source, self.config.max_input_size)?;

        let mut finder = create_match_finder(
            self.config.strategy,
            self.config.window_size,
            self.config.lookahead_size,
        );
        let mut window =
            SlidingWindow::new(source, self.config.window_size, self.config.lookahead_size);
        let mut tokens = Vec::new();

        while let Some(byte) = window.current() {
            let best = finder.find_match(source, window.position());

            if best.is_none() {
                tokens.push(Token::literal(byte));
                window.advance(1);
                continue;
            }

            let next = window.peek(best.length).and_then(NonZeroU8::new);
            tokens.push(Token::copy(best.offset as u32, best.length as u32, next)?);
            window.advance(best.length + usize::from(next.is_some()));
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchStrategy;

    fn compress(data: &[u8]) -> Vec<Token> {
        Lz77Compressor::new().compress(data).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(compress(b"").is_empty());
    }

    #[test]
    fn test_run_of_one_byte() {
        let tokens = compress(b"aaaaa");
        assert_eq!(
            tokens,
            vec![Token::literal(b'a'), Token::copy(1, 4, None).unwrap()]
        );
    }

    #[test]
    fn test_match_takes_trailing_byte() {
        let tokens = compress(b"abcabcX");
        assert_eq!(
            tokens,
            vec![
                Token::literal(b'a'),
                Token::literal(b'b'),
                Token::literal(b'c'),
                Token::copy(3, 3, NonZeroU8::new(b'X')).unwrap(),
            ]
        );
    }

    #[test]
    fn test_zero_after_match_is_deferred() {
        let tokens = compress(&[1, 2, 1, 2, 0, 5]);
        assert_eq!(
            tokens,
            vec![
                Token::literal(1),
                Token::literal(2),
                Token::copy(2, 2, None).unwrap(),
                Token::literal(0),
                Token::literal(5),
            ]
        );
    }

    #[test]
    fn test_abracadabra_tokens() {
        let tokens = compress(b"abracadabra");
        assert_eq!(
            tokens,
            vec![
                Token::literal(b'a'),
                Token::literal(b'b'),
                Token::literal(b'r'),
                Token::copy(3, 1, NonZeroU8::new(b'c')).unwrap(),
                Token::copy(2, 1, NonZeroU8::new(b'd')).unwrap(),
                Token::copy(7, 4, None).unwrap(),
            ]
        );
    }

    #[test]
    fn test_strategies_agree() {
        let data: Vec<u8> = b"the quick brown fox jumps over the lazy dog; "
            .iter()
            .cycle()
            .take(3000)
            .copied()
            .collect();
        let linear = Lz77Compressor::new().compress(&data).unwrap();
        let chain = Lz77Compressor::new()
            .with_config(CodecConfig::default().with_strategy(MatchStrategy::HashChain))
            .compress(&data)
            .unwrap();
        assert_eq!(linear, chain);
    }

    #[test]
    fn test_input_limit() {
        let compressor =
            Lz77Compressor::new().with_config(CodecConfig::default().with_max_input_size(4));
        assert!(compressor.compress(b"1234").is_ok());
        assert!(compressor.compress(b"12345").is_err());
    }

    #[test]
    fn test_invalid_config() {
        let compressor =
            Lz77Compressor::new().with_config(CodecConfig::default().with_window_size(0));
        assert!(compressor.compress(b"abc").is_err());
    }
}
