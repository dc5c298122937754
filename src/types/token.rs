//! LZ77 token type
//!
//! A token is either a single literal byte or a back-reference into the
//! already decoded output, optionally followed by one trailing byte.
//!
//! On the wire every token is the triple `(offset, length, literal)` with
//! `offset == 0` marking a literal and `literal == 0` on a back-reference
//! marking "no trailing byte". [`Token::new`] and the raw accessors convert
//! between that view and the enum.

use std::fmt;
use std::num::NonZeroU8;

use crate::error::{Lz77Error, Result};

/// Largest offset or length a token can carry (the wire fields are `i32`).
pub const MAX_TOKEN_FIELD: u32 = i32::MAX as u32;

/// A single compressed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Emit one raw byte.
    Literal(u8),
    /// Copy `length` bytes starting `offset` bytes behind the output cursor,
    /// then emit `next` if present.
    Copy {
        offset: u32,
        length: u32,
        next: Option<NonZeroU8>,
    },
}

impl Token {
    /// Build a token from its raw wire fields.
    ///
    /// Fails with [`Lz77Error::InvalidToken`] if `offset` or `length` is
    /// negative, or if a literal token (`offset == 0`) carries a length.
    pub fn new(offset: i32, length: i32, literal: i8) -> Result<Self> {
        if offset < 0 {
            return Err(Lz77Error::InvalidToken(format!(
                "offset cannot be negative ({offset})"
            )));
        }
        if length < 0 {
            return Err(Lz77Error::InvalidToken(format!(
                "length cannot be negative ({length})"
            )));
        }

        let byte = literal as u8;
        if offset == 0 {
            if length != 0 {
                return Err(Lz77Error::InvalidToken(format!(
                    "literal token must have length 0, got {length}"
                )));
            }
            return Ok(Token::Literal(byte));
        }

        Ok(Token::Copy {
            offset: offset as u32,
            length: length as u32,
            next: NonZeroU8::new(byte),
        })
    }

    /// Create a literal token.
    #[inline]
    pub const fn literal(byte: u8) -> Self {
        Token::Literal(byte)
    }

    /// Create a back-reference token.
    ///
    /// `offset` must be in `1..=MAX_TOKEN_FIELD` and `length` at most
    /// `MAX_TOKEN_FIELD`.
    pub fn copy(offset: u32, length: u32, next: Option<NonZeroU8>) -> Result<Self> {
        if offset == 0 || offset > MAX_TOKEN_FIELD {
            return Err(Lz77Error::InvalidToken(format!(
                "back-reference offset out of range ({offset})"
            )));
        }
        if length > MAX_TOKEN_FIELD {
            return Err(Lz77Error::InvalidToken(format!(
                "back-reference length out of range ({length})"
            )));
        }
        Ok(Token::Copy {
            offset,
            length,
            next,
        })
    }

    /// Raw offset field; `0` for literals.
    #[inline]
    pub fn offset(&self) -> i32 {
        match *self {
            Token::Literal(_) => 0,
            Token::Copy { offset, .. } => offset as i32,
        }
    }

    /// Raw length field; `0` for literals.
    #[inline]
    pub fn length(&self) -> i32 {
        match *self {
            Token::Literal(_) => 0,
            Token::Copy { length, .. } => length as i32,
        }
    }

    /// Raw literal field as stored on the wire.
    #[inline]
    pub fn literal_byte(&self) -> i8 {
        match *self {
            Token::Literal(byte) => byte as i8,
            Token::Copy { next, .. } => next.map_or(0, NonZeroU8::get) as i8,
        }
    }

    /// Check if this is a literal token
    #[inline]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// Number of output bytes this token produces when replayed.
    #[inline]
    pub fn decoded_len(&self) -> usize {
        match *self {
            Token::Literal(_) => 1,
            Token::Copy { length, next, .. } => length as usize + usize::from(next.is_some()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Literal(byte) => write!(f, "(0,0,{byte:#04x})"),
            Token::Copy {
                offset,
                length,
                next: Some(next),
            } => write!(f, "({offset},{length},{:#04x})", next.get()),
            Token::Copy {
                offset,
                length,
                next: None,
            } => write!(f, "({offset},{length},null)"),
        }
    }
}
