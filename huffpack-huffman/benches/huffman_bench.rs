//! Performance benchmarks for the Huffman codec.
//!
//! Measures compression and decompression throughput plus achieved
//! ratios across data patterns with very different symbol skew.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huffpack_huffman::{compress_bytes, decompress_bytes};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - a one-symbol alphabet (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - flat symbol distribution (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - the skewed distribution Huffman is built for
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }

    /// Two-valued data - extreme skew, one-bit codes
    pub fn binary_skew(size: usize) -> Vec<u8> {
        (0..size).map(|i| if i % 10 == 0 { 1 } else { 0 }).collect()
    }
}

mod input_sizes {
    /// Small input: 64KB
    pub const SMALL: usize = 64 * 1024;

    /// Medium input: 256KB
    pub const MEDIUM: usize = 256 * 1024;

    /// Large input: 1MB
    pub const LARGE: usize = 1024 * 1024;
}

const SIZES: [(&str, usize); 3] = [
    ("small_64KB", input_sizes::SMALL),
    ("medium_256KB", input_sizes::MEDIUM),
    ("large_1MB", input_sizes::LARGE),
];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("binary_skew", test_data::binary_skew as PatternGenerator),
];

/// Benchmark compression speed for different data sizes and patterns
fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let packed = compress_bytes(black_box(data)).unwrap();
                    black_box(packed);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark decompression speed
fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let original = generator(size);
            let packed = compress_bytes(&original).unwrap();
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &packed, |b, packed| {
                b.iter(|| {
                    let unpacked = decompress_bytes(black_box(packed)).unwrap();
                    black_box(unpacked);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark compression ratios
fn bench_compression_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_ratio");
    group.sample_size(10); // Fewer samples for ratio measurements

    for (pattern_name, generator) in PATTERNS {
        let data = generator(input_sizes::MEDIUM);

        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let packed = compress_bytes(black_box(data)).unwrap();
                    let ratio = packed.len() as f64 / data.len() as f64;
                    black_box(ratio);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark roundtrip (compress + decompress)
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for (size_name, size) in SIZES {
        let data = test_data::text_like(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| {
                let packed = compress_bytes(black_box(data)).unwrap();
                let unpacked = decompress_bytes(&packed).unwrap();
                black_box(unpacked);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_compression_ratio,
    bench_roundtrip,
);
criterion_main!(benches);
