//! I/O module for persisting token streams and raw byte buffers

pub mod file;
pub mod token_codec;

pub use file::{read_bytes, read_tokens, write_bytes, write_tokens};
pub use token_codec::{decode_tokens, encode_tokens, TokenReader, TokenWriter, TOKENS_HEADER};
