use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lz77rs::io::{decode_tokens, encode_tokens};
use lz77rs::{CodecConfig, Compressor, Decompressor, Lz77Compressor, Lz77Decompressor, MatchStrategy};

fn text(len: usize) -> Vec<u8> {
    b"It was the best of times, it was the worst of times, it was the age of wisdom, "
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect()
}

fn noisy(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % 16) as u8
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for (name, data) in [("text", text(64 * 1024)), ("noisy", noisy(64 * 1024))] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        for strategy in [MatchStrategy::Linear, MatchStrategy::HashChain] {
            let compressor =
                Lz77Compressor::new().with_config(CodecConfig::default().with_strategy(strategy));
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), name),
                &data,
                |b, data| b.iter(|| compressor.compress(black_box(data)).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let data = text(256 * 1024);
    let tokens = Lz77Compressor::new()
        .with_config(CodecConfig::default().with_strategy(MatchStrategy::HashChain))
        .compress(&data)
        .unwrap();
    let decompressor = Lz77Decompressor::new();

    let mut group = c.benchmark_group("decompress");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("text", |b| {
        b.iter(|| decompressor.decompress(black_box(&tokens)).unwrap())
    });
    group.finish();
}

fn bench_token_stream(c: &mut Criterion) {
    let tokens = lz77rs::compress(&noisy(32 * 1024)).unwrap();
    let bytes = encode_tokens(&tokens).unwrap();

    c.bench_function("token_stream/encode", |b| {
        b.iter(|| encode_tokens(black_box(&tokens)).unwrap())
    });
    c.bench_function("token_stream/decode", |b| {
        b.iter(|| decode_tokens(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_compress, bench_decompress, bench_token_stream);
criterion_main!(benches);
