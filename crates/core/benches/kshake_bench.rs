//! Benchmarks for the KSHAKE320 proof-of-work hash

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kshake320_core::{PowHasher, SHA3_256, SHAKE320, digest, hash320, keccak, pow_hash_batch};

fn header(nonce: u32, version: u8) -> [u8; 120] {
    let mut header = [0u8; 120];
    header[0] = version;
    header[116..120].copy_from_slice(&nonce.to_le_bytes());
    header
}

fn bench_permutation(c: &mut Criterion) {
    let mut lanes = [0u64; 25];
    c.bench_function("keccak_f1600", |b| {
        b.iter(|| keccak::keccak_f1600(black_box(&mut lanes)))
    });
}

fn bench_pow(c: &mut Criterion) {
    let mut hasher = PowHasher::new();

    for version in [1u8, 2] {
        c.bench_function(&format!("kshake320_v{version}"), |b| {
            let mut nonce: u32 = 0;
            b.iter(|| {
                let input = header(nonce, version);
                nonce = nonce.wrapping_add(1);
                hasher.hash(black_box(&input))
            })
        });
    }
}

fn bench_digests(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");
    for size in [64usize, 1024, 16 * 1024] {
        let data = vec![0x5Au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("shake320", size), &data, |b, data| {
            b.iter(|| black_box(hash320(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha3_256", size), &data, |b, data| {
            b.iter(|| black_box(digest(SHA3_256, data)))
        });
        group.bench_with_input(BenchmarkId::new("shake320_vec", size), &data, |b, data| {
            b.iter(|| black_box(digest(SHAKE320, data)))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let headers: Vec<[u8; 120]> = (0..64).map(|n| header(n, 1)).collect();
    let refs: Vec<&[u8]> = headers.iter().map(|h| h.as_slice()).collect();

    c.bench_function("kshake320_batch_64", |b| {
        b.iter(|| pow_hash_batch(black_box(&refs)))
    });
}

criterion_group!(benches, bench_permutation, bench_pow, bench_digests, bench_batch);
criterion_main!(benches);
