//! Binary token stream format.
//!
//! Layout (all integers big-endian):
//!
//! | Field   | Size | Contents                                   |
//! |---------|------|--------------------------------------------|
//! | tag len | 2    | `u16` byte length of the tag               |
//! | tag     | n    | UTF-8 `"LZ77TOKENSv1.0"`                   |
//! | count   | 4    | `i32` number of records                    |
//! | records | 9×N  | `i32` offset, `i32` length, `i8` literal   |
//!
//! Bytes after the last record are ignored.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Lz77Error, Result};
use crate::types::Token;
use crate::validation::validate_tokens;

/// Format tag written at the start of every token stream.
pub const TOKENS_HEADER: &str = "LZ77TOKENSv1.0";

/// Size of one serialized token record.
pub const RECORD_SIZE: usize = 9;

/// Upper bound on records preallocated from the count field.
const MAX_PREALLOCATED_RECORDS: usize = 64 * 1024;

/// Total serialized size of a stream holding `count` tokens.
pub fn serialized_len(count: usize) -> usize {
    2 + TOKENS_HEADER.len() + 4 + count * RECORD_SIZE
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Writes a token stream to any byte sink.
pub struct TokenWriter<W: Write> {
    writer: W,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the header, count and every record.
    pub fn write(&mut self, tokens: &[Token]) -> Result<()> {
        validate_tokens(tokens)?;
        let count = i32::try_from(tokens.len()).map_err(|_| {
            Lz77Error::InvalidFormat(format!("too many tokens for one stream: {}", tokens.len()))
        })?;

        self.write_header()?;
        self.writer.write_i32::<BigEndian>(count)?;
        for token in tokens {
            self.writer.write_i32::<BigEndian>(token.offset())?;
            self.writer.write_i32::<BigEndian>(token.length())?;
            self.writer.write_i8(token.literal_byte())?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        let tag = TOKENS_HEADER.as_bytes();
        self.writer.write_u16::<BigEndian>(tag.len() as u16)?;
        self.writer.write_all(tag)?;
        Ok(())
    }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Reads a token stream from any byte source.
pub struct TokenReader<R: Read> {
    reader: R,
}

impl<R: Read> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the header, count and every record, in stream order.
    pub fn read(&mut self) -> Result<Vec<Token>> {
        self.read_header()?;

        let count = self
            .reader
            .read_i32::<BigEndian>()
            .map_err(|e| Lz77Error::from_read(e, "token count"))?;
        if count < 0 {
            return Err(Lz77Error::CorruptStream(format!(
                "negative token count {count}"
            )));
        }

        let count = count as usize;
        let mut tokens = Vec::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));
        for _ in 0..count {
            tokens.push(self.read_record()?);
        }
        Ok(tokens)
    }

    fn read_header(&mut self) -> Result<()> {
        let len = self
            .reader
            .read_u16::<BigEndian>()
            .map_err(|e| Lz77Error::from_read(e, "header"))?;
        let mut tag = vec![0u8; len as usize];
        self.reader
            .read_exact(&mut tag)
            .map_err(|e| Lz77Error::from_read(e, "header"))?;

        let tag = String::from_utf8(tag)
            .map_err(|_| Lz77Error::InvalidFormat("header tag is not valid UTF-8".into()))?;
        if tag != TOKENS_HEADER {
            return Err(Lz77Error::InvalidFormat(format!(
                "expected header {TOKENS_HEADER:?}, found {tag:?}"
            )));
        }
        Ok(())
    }

    fn read_record(&mut self) -> Result<Token> {
        let offset = self
            .reader
            .read_i32::<BigEndian>()
            .map_err(|e| Lz77Error::from_read(e, "token record"))?;
        let length = self
            .reader
            .read_i32::<BigEndian>()
            .map_err(|e| Lz77Error::from_read(e, "token record"))?;
        let literal = self
            .reader
            .read_i8()
            .map_err(|e| Lz77Error::from_read(e, "token record"))?;
        Token::new(offset, length, literal)
    }
}

/// Serialize tokens into a new buffer.
pub fn encode_tokens(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut writer = TokenWriter::new(Vec::with_capacity(serialized_len(tokens.len())));
    writer.write(tokens)?;
    Ok(writer.into_inner())
}

/// Deserialize tokens from a buffer.
pub fn decode_tokens(bytes: &[u8]) -> Result<Vec<Token>> {
    TokenReader::new(bytes).read()
}
