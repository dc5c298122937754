//! LZ77 compression and decompression.
//!
//! - [`encoder`]: greedy left-to-right tokenization of a byte buffer
//! - [`decoder`]: replay of a token sequence into a byte buffer
//! - [`window`] and [`match_finder`]: longest-match search over the window

pub mod decoder;
pub mod encoder;
pub mod match_finder;
pub mod window;

pub use decoder::Lz77Decompressor;
pub use encoder::Lz77Compressor;
pub use match_finder::{create_match_finder, HashChainMatchFinder, LinearMatchFinder};
pub use window::{find_longest_match, SlidingWindow};

use crate::error::Result;
use crate::types::Token;

/// A back-reference candidate: `length` bytes found `offset` bytes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    pub offset: usize,
    pub length: usize,
}

impl Match {
    /// No usable match.
    pub const NONE: Match = Match {
        offset: 0,
        length: 0,
    };

    #[inline]
    pub fn is_none(&self) -> bool {
        self.length == 0
    }
}

/// Trait for longest-match search.
pub trait MatchFinder {
    /// Longest earlier occurrence of the bytes at `pos`, nearest offset
    /// among equals, or [`Match::NONE`].
    fn find_match(&mut self, data: &[u8], pos: usize) -> Match;

    /// Drop any state tied to the previous buffer.
    fn reset(&mut self);
}

/// Trait for compressing data into tokens.
pub trait Compressor {
    /// Tokenize the whole of `source`.
    fn compress(&self, source: &[u8]) -> Result<Vec<Token>>;
}

/// Trait for decompressing tokens into data.
pub trait Decompressor {
    /// Replay `tokens` into a new buffer.
    fn decompress(&self, tokens: &[Token]) -> Result<Vec<u8>>;
}
