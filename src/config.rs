//! Codec configuration.
//!
//! Window and look-ahead bounds, the match search strategy, and the size
//! guard applied to encoder input and decoder output.

use crate::error::{Lz77Error, Result};
use crate::types::MAX_TOKEN_FIELD;

/// Default search window (maximum back-reference distance).
pub const DEFAULT_WINDOW_SIZE: usize = 1024;

/// Default look-ahead (maximum match length).
pub const DEFAULT_LOOKAHEAD_SIZE: usize = 256;

/// Default limit on input and decoded output size (100 MiB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

/// How the encoder searches the window for the longest match.
///
/// Both strategies produce identical token sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Scan every offset in the window, nearest first.
    #[default]
    Linear,
    /// Walk a per-first-byte chain of earlier positions, nearest first.
    HashChain,
}

/// Configuration options for the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum back-reference distance.
    ///
    /// Default: `1024`.
    pub window_size: usize,

    /// Maximum match length.
    ///
    /// Default: `256`.
    pub lookahead_size: usize,

    /// Match search strategy.
    ///
    /// Default: [`MatchStrategy::Linear`].
    pub strategy: MatchStrategy,

    /// Largest buffer the encoder accepts and the decoder produces.
    ///
    /// Default: 100 MiB.
    pub max_input_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            lookahead_size: DEFAULT_LOOKAHEAD_SIZE,
            strategy: MatchStrategy::Linear,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl CodecConfig {
    /// Set the search window size.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the look-ahead size.
    pub fn with_lookahead_size(mut self, lookahead_size: usize) -> Self {
        self.lookahead_size = lookahead_size;
        self
    }

    /// Set the match search strategy.
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the input/output size limit.
    pub fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }

    /// Check that every bound fits in a token field.
    pub fn validate(&self) -> Result<()> {
        let max = MAX_TOKEN_FIELD as usize;
        if self.window_size == 0 || self.window_size > max {
            return Err(Lz77Error::InvalidConfig(format!(
                "window size must be in 1..={max}, got {}",
                self.window_size
            )));
        }
        if self.lookahead_size == 0 || self.lookahead_size > max {
            return Err(Lz77Error::InvalidConfig(format!(
                "look-ahead size must be in 1..={max}, got {}",
                self.lookahead_size
            )));
        }
        Ok(())
    }
}
