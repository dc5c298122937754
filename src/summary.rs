//! Compression result summary.
//!
//! The compressed size here is an estimate of three bytes per token, not the
//! size of the serialized stream.

use std::fmt;
use std::time::Duration;

/// Estimated bytes per token used for the ratio.
pub const APPROX_TOKEN_SIZE: usize = 3;

/// Outcome of compressing one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionSummary {
    /// Size of the input in bytes.
    pub original_len: usize,
    /// Number of tokens produced.
    pub token_count: usize,
    /// Time spent in the encoder, if measured.
    pub elapsed: Option<Duration>,
}

impl CompressionSummary {
    pub fn new(original_len: usize, token_count: usize) -> Self {
        Self {
            original_len,
            token_count,
            elapsed: None,
        }
    }

    /// Attach the encoder run time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    /// Estimated compressed size (`token_count × 3`).
    pub fn approx_compressed_size(&self) -> usize {
        self.token_count * APPROX_TOKEN_SIZE
    }

    /// `original_len / approx_compressed_size`, or `0` with no tokens.
    pub fn ratio(&self) -> f64 {
        if self.token_count == 0 {
            return 0.0;
        }
        self.original_len as f64 / self.approx_compressed_size() as f64
    }

    /// Space saved in percent (`100 − 100 / ratio`), or `0` when the ratio is `0`.
    pub fn percentage(&self) -> f64 {
        let ratio = self.ratio();
        if ratio == 0.0 {
            return 0.0;
        }
        100.0 - 100.0 / ratio
    }

    /// Check if the estimate is smaller than the input.
    pub fn is_effective(&self) -> bool {
        self.ratio() > 1.0
    }
}

impl fmt::Display for CompressionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Original: {} bytes, Compressed: ~{} tokens ({} bytes), Ratio: {:.2}:1 ({:.1}%)",
            self.original_len,
            self.token_count,
            self.approx_compressed_size(),
            self.ratio(),
            self.percentage()
        )
    }
}
