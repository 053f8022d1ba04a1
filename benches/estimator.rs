//! BER sweep benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ber_sim::{estimator, SimConfig};

fn benchmark_reference_sweep_10k_bits(c: &mut Criterion) {
    let config = SimConfig::sweep(10_000, 0.0, 2.0, 7);

    c.bench_function("ber_sweep_7_points_10k_bits", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            black_box(estimator::run(&config, &mut rng).unwrap())
        })
    });
}

fn benchmark_single_point_100k_bits(c: &mut Criterion) {
    c.bench_function("ber_point_100k_bits_6db", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            black_box(estimator::simulate_point(6.0, 100_000, &mut rng))
        })
    });
}

criterion_group!(
    benches,
    benchmark_reference_sweep_10k_bits,
    benchmark_single_point_100k_bits
);
criterion_main!(benches);
