//! Shared test utilities for lz77rs integration tests.

#![allow(dead_code)]

use lz77rs::{Compressor, Decompressor, Lz77Compressor, Lz77Decompressor, Token};
use lz77rs::{CodecConfig, MatchStrategy};

/// Inputs with very different match structure.
pub fn sample_inputs() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("empty", Vec::new()),
        ("single", vec![42]),
        ("run", vec![b'a'; 5]),
        ("abracadabra", b"abracadabra".to_vec()),
        ("zeros", vec![0u8; 700]),
        ("zero_after_matches", b"ab\0ab\0ab\0\0\0ab".to_vec()),
        ("all_bytes", (0..=255u8).collect()),
        ("all_bytes_twice", (0..=255u8).chain(0..=255u8).collect()),
        ("long_run", vec![0xAB; 5000]),
        ("text", lorem(4096)),
        ("far_repeat", far_repeat()),
    ]
}

/// Repeated prose, long enough to span several windows.
pub fn lorem(len: usize) -> Vec<u8> {
    b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
      tempor incididunt ut labore et dolore magna aliqua. "
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect()
}

/// A block repeated just inside and just outside the default window.
pub fn far_repeat() -> Vec<u8> {
    let block: Vec<u8> = (0..64u8).map(|b| b.wrapping_mul(37)).collect();
    let filler: Vec<u8> = (0..2000u32).map(|i| (i % 251) as u8 ^ 0x5A).collect();
    let mut data = block.clone();
    data.extend_from_slice(&filler[..900]);
    data.extend_from_slice(&block);
    data.extend_from_slice(&filler[900..]);
    data.extend_from_slice(&block);
    data
}

pub fn compress_with(data: &[u8], strategy: MatchStrategy) -> Vec<Token> {
    Lz77Compressor::new()
        .with_config(CodecConfig::default().with_strategy(strategy))
        .compress(data)
        .expect("compression should not fail")
}

pub fn roundtrip(data: &[u8]) -> Vec<u8> {
    let tokens = compress_with(data, MatchStrategy::Linear);
    Lz77Decompressor::new()
        .decompress(&tokens)
        .expect("decompression should not fail")
}
