//! Error types for lz77rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lz77rs operations
#[derive(Debug, Error)]
pub enum Lz77Error {
    /// A token field holds a value no token may carry
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Serialized token stream does not start with the expected header tag
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Token stream is truncated or references data outside the output
    #[error("Corrupt stream: {0}")]
    CorruptStream(String),

    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Buffer exceeds the configured size limit
    #[error("Input too large: {size} bytes (limit {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    /// Codec configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for lz77rs operations
pub type Result<T> = std::result::Result<T, Lz77Error>;

impl Lz77Error {
    /// Map an unexpected end of input to [`Lz77Error::CorruptStream`],
    /// leaving every other IO failure as [`Lz77Error::Io`].
    pub(crate) fn from_read(err: io::Error, what: &str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Lz77Error::CorruptStream(format!("unexpected end of stream while reading {what}"))
        } else {
            Lz77Error::Io(err)
        }
    }
}
