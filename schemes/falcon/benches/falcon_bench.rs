//! Benchmarks for Falcon.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pqsigs_falcon::fft::{fft, ifft};
use pqsigs_falcon::fpr::Fpr;
use pqsigs_falcon::hash::hash_message;
use pqsigs_falcon::params::NONCE_SIZE;
use pqsigs_falcon::poly::{mq_intt, mq_ntt};
use pqsigs_falcon::{keygen_with_seed, sign_dyn, sign_with_expanded, verify, FALCON_1024, FALCON_512};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");

    for logn in [9u32, 10] {
        let data: Vec<Fpr> = (0..1i64 << logn).map(|i| Fpr::of(i % 100 - 50)).collect();

        group.bench_function(format!("fft_{}", 1 << logn), |b| {
            b.iter(|| {
                let mut d = data.clone();
                fft(black_box(&mut d), logn);
                d
            })
        });

        group.bench_function(format!("ifft_{}", 1 << logn), |b| {
            b.iter(|| {
                let mut d = data.clone();
                ifft(black_box(&mut d), logn);
                d
            })
        });
    }

    group.finish();
}

fn bench_ntt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt");

    let data: Vec<u16> = (0..512u16).map(|i| (i * 37) % 12289).collect();
    group.bench_function("ntt_intt_512", |b| {
        b.iter(|| {
            let mut d = data.clone();
            mq_ntt(black_box(&mut d), 9);
            mq_intt(&mut d, 9);
            d
        })
    });

    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    let message = b"This is a test message for Falcon signing.";
    let nonce = [0u8; NONCE_SIZE];

    group.bench_function("hash_to_point_512", |b| {
        b.iter(|| black_box(hash_message(&nonce, message, 9)))
    });

    group.finish();
}

fn bench_protocol(c: &mut Criterion) {
    let mut group = c.benchmark_group("falcon");
    group.sample_size(10);

    for params in [FALCON_512, FALCON_1024] {
        let n = params.n;
        group.bench_function(format!("keygen_{}", n), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(keygen_with_seed(&seed.to_le_bytes(), &params))
            })
        });

        let kp = match keygen_with_seed(b"bench", &params) {
            Ok(kp) => kp,
            Err(e) => panic!("keygen failed: {}", e),
        };
        let esk = kp.sk.expand();
        let mut rng = StdRng::seed_from_u64(n as u64);

        group.bench_function(format!("expand_{}", n), |b| {
            b.iter(|| black_box(kp.sk.expand()))
        });

        group.bench_function(format!("sign_tree_{}", n), |b| {
            b.iter(|| black_box(sign_with_expanded(&esk, b"bench", &mut rng)))
        });

        group.bench_function(format!("sign_dyn_{}", n), |b| {
            b.iter(|| black_box(sign_dyn(&kp.sk, b"bench", &mut rng)))
        });

        let pk = kp.pk.to_bytes().unwrap_or_default();
        group.bench_function(format!("verify_{}", n), |b| {
            b.iter_batched(
                || {
                    sign_with_expanded(&esk, b"bench", &mut rng)
                        .and_then(|s| s.to_bytes())
                        .unwrap_or_default()
                },
                |sig| black_box(verify(b"bench", &sig, &pk)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fft, bench_ntt, bench_hash, bench_protocol);
criterion_main!(benches);
