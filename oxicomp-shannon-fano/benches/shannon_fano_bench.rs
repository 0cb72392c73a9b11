//! Shannon-Fano throughput benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxicomp_shannon_fano::{compress, decompress};
use std::hint::black_box;

mod test_data {
    /// Pseudo-random bytes (near 8 bits of entropy).
    pub fn random(size: usize) -> Vec<u8> {
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 32) as u8
            })
            .collect()
    }

    /// English-like text.
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        text.iter().copied().cycle().take(size).collect()
    }
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("shannon_fano_compress");
    for size in [4 * 1024, 64 * 1024] {
        for (name, data) in [
            ("random", test_data::random(size)),
            ("text", test_data::text_like(size)),
        ] {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| compress(black_box(data)))
            });
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("shannon_fano_decompress");
    for size in [4 * 1024, 64 * 1024] {
        let data = test_data::text_like(size);
        let Ok(compressed) = compress(&data) else {
            continue;
        };
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("text", size), &compressed, |b, packed| {
            b.iter(|| decompress(black_box(packed)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
