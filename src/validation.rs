//! Sanity checks on codec input and output.

use crate::error::{Lz77Error, Result};
use crate::types::{Token, MAX_TOKEN_FIELD};

/// Reject a buffer larger than `limit` bytes.
pub fn validate_input(data: &[u8], limit: usize) -> Result<()> {
    if data.len() > limit {
        return Err(Lz77Error::InputTooLarge {
            size: data.len(),
            limit,
        });
    }
    Ok(())
}

/// Check every token against the wire invariants.
///
/// Tokens built through [`Token::new`] or [`Token::copy`] always pass; this
/// catches hand-built `Token::Copy` values with out-of-range fields.
pub fn validate_tokens(tokens: &[Token]) -> Result<()> {
    for (index, token) in tokens.iter().enumerate() {
        if let Token::Copy { offset, length, .. } = *token {
            if offset == 0 || offset > MAX_TOKEN_FIELD || length > MAX_TOKEN_FIELD {
                return Err(Lz77Error::InvalidToken(format!(
                    "token {index}: offset {offset}, length {length} out of range"
                )));
            }
        }
    }
    Ok(())
}

/// Check that decoded output is consistent with the tokens it came from.
pub fn validate_decompressed(tokens: &[Token], output: &[u8]) -> Result<()> {
    if output.is_empty() && !tokens.is_empty() {
        return Err(Lz77Error::CorruptStream(
            "decompressed data is empty but tokens exist".into(),
        ));
    }
    if !output.is_empty() && tokens.is_empty() {
        return Err(Lz77Error::CorruptStream(
            "decompressed data exists but no tokens were provided".into(),
        ));
    }
    Ok(())
}
