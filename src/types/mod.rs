//! Core value types shared by the codec and the token stream format

pub mod token;

pub use token::{Token, MAX_TOKEN_FIELD};
