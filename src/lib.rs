//! # lz77rs
//!
//! A pure Rust LZ77 compressor producing a portable token stream.
//!
//! The encoder scans its input left to right and, at each position, takes
//! the longest earlier occurrence of the upcoming bytes within a bounded
//! window. Each step emits one [`Token`]: a literal byte, or a
//! back-reference `(offset, length)` optionally followed by the next byte.
//! The decoder replays the tokens, copying from its own output.
//!
//! ## Quick Start
//!
//! ```rust
//! use lz77rs::{compress, decompress};
//!
//! let tokens = compress(b"abracadabra")?;
//! assert_eq!(decompress(&tokens)?, b"abracadabra");
//!
//! // Persist the token stream
//! let bytes = lz77rs::io::encode_tokens(&tokens)?;
//! assert_eq!(lz77rs::io::decode_tokens(&bytes)?, tokens);
//! # Ok::<(), lz77rs::Lz77Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`types::Token`] - the compressed unit
//! - [`compression`] - match finders, encoder and decoder behind the
//!   `Compressor` / `Decompressor` traits
//! - [`io`] - the `LZ77TOKENSv1.0` stream format and file helpers
//! - [`app`] - file-level commands and the interactive menu used by the
//!   `lz77` binary

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod app;
pub mod compression;
pub mod config;
pub mod error;
pub mod io;
pub mod summary;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use compression::{Compressor, Decompressor, Lz77Compressor, Lz77Decompressor};
pub use config::{CodecConfig, MatchStrategy};
pub use error::{Lz77Error, Result};
pub use summary::CompressionSummary;
pub use types::Token;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compress `data` with the default configuration.
pub fn compress(data: &[u8]) -> Result<Vec<Token>> {
    Lz77Compressor::new().compress(data)
}

/// Decompress `tokens` with the default output limit.
pub fn decompress(tokens: &[Token]) -> Result<Vec<u8>> {
    Lz77Decompressor::new().decompress(tokens)
}
