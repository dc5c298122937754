//! File-level compress and decompress operations.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::compression::{Compressor, Decompressor, Lz77Compressor, Lz77Decompressor};
use crate::config::CodecConfig;
use crate::error::{Lz77Error, Result};
use crate::io::{read_bytes, read_tokens, write_bytes, write_tokens};
use crate::summary::CompressionSummary;
use crate::validation::validate_decompressed;

/// Compress the file at `input` into a token stream at `output`.
///
/// The written stream is read back and compared with the tokens produced
/// before returning.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &CodecConfig,
) -> Result<CompressionSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let data = read_bytes(input)?;
    debug!(bytes = data.len(), "input loaded");

    let started = Instant::now();
    let tokens = Lz77Compressor::new()
        .with_config(config.clone())
        .compress(&data)?;
    let elapsed = started.elapsed();
    debug!(tokens = tokens.len(), ?elapsed, "tokens generated");

    write_tokens(output, &tokens)?;
    let written = read_tokens(output)?;
    if written != tokens {
        return Err(Lz77Error::CorruptStream(format!(
            "{} does not read back as the tokens written",
            output.display()
        )));
    }

    let summary = CompressionSummary::new(data.len(), tokens.len()).with_elapsed(elapsed);
    info!(input = %input.display(), output = %output.display(), %summary, "compressed");
    Ok(summary)
}

/// Decompress the token stream at `input` into raw bytes at `output`.
///
/// Returns the number of bytes written.
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &CodecConfig,
) -> Result<usize> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let tokens = read_tokens(input)?;

    let data = Lz77Decompressor::new()
        .with_config(config)
        .decompress(&tokens)?;
    validate_decompressed(&tokens, &data)?;

    write_bytes(output, &data)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        tokens = tokens.len(),
        bytes = data.len(),
        "decompressed"
    );
    Ok(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("in.txt");
        let packed = dir.path().join("in.lz77");
        let restored = dir.path().join("out.txt");
        let data = b"to be or not to be, that is the question; to be or not to be".repeat(8);
        std::fs::write(&original, &data).unwrap();

        let config = CodecConfig::default();
        let summary = compress_file(&original, &packed, &config).unwrap();
        assert_eq!(summary.original_len, data.len());
        assert!(summary.token_count > 0);
        assert!(summary.elapsed.is_some());

        let written = decompress_file(&packed, &restored, &config).unwrap();
        assert_eq!(written, data.len());
        assert_eq!(std::fs::read(&restored).unwrap(), data);
    }

    #[test]
    fn test_compress_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = compress_file(
            dir.path().join("missing"),
            dir.path().join("out"),
            &CodecConfig::default(),
        );
        assert!(matches!(result, Err(Lz77Error::NotFound(_))));
    }

    #[test]
    fn test_decompress_rejects_foreign_file() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.lz77");
        std::fs::write(&bogus, [0x00, 0x03, b'B', b'A', b'D', 0, 0, 0, 0]).unwrap();
        let result = decompress_file(&bogus, dir.path().join("out"), &CodecConfig::default());
        assert!(matches!(result, Err(Lz77Error::InvalidFormat(_))));
    }
}
