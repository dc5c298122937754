//! File helpers for raw byte blobs and token streams.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::debug;

use super::token_codec::{TokenReader, TokenWriter};
use crate::error::{Lz77Error, Result};
use crate::types::Token;

/// Read a whole file into memory.
///
/// Fails with [`Lz77Error::NotFound`] if `path` does not exist.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Lz77Error::NotFound(path.to_path_buf()));
    }
    let data = fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "read file");
    Ok(data)
}

/// Write `data` to `path`, replacing any existing file.
pub fn write_bytes<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, data)?;
    debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}

/// Serialize `tokens` into a new file at `path`.
pub fn write_tokens<P: AsRef<Path>>(path: P, tokens: &[Token]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    TokenWriter::new(BufWriter::new(file)).write(tokens)?;
    debug!(path = %path.display(), tokens = tokens.len(), "wrote token stream");
    Ok(())
}

/// Deserialize the token stream stored at `path`.
pub fn read_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<Token>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Lz77Error::NotFound(path.to_path_buf()),
        _ => Lz77Error::Io(e),
    })?;
    let tokens = TokenReader::new(BufReader::new(file)).read()?;
    debug!(path = %path.display(), tokens = tokens.len(), "read token stream");
    Ok(tokens)
}
