//! Criterion benchmarks comparing the small-window and large-window
//! engines, plus the oracle, across a range of window widths.
//!
//! Inputs are synthetic (no file/CLI input) since the language-neutral
//! benchmark CLI described in the design notes is explicitly out of scope
//! for this crate.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sliding_median::{oracle::oracle, sliding_median, sliding_median_big, sliding_median_tiny, NanPolicy};

const SEED: u64 = 0xC0FFEE;

fn synthetic_input(len: usize) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    (0..len).map(|_| rng.random_range(-100.0..100.0)).collect()
}

fn bench_small_window(c: &mut Criterion) {
    let x = synthetic_input(10_000);
    let mut group = c.benchmark_group("small_window");
    for w in [2usize, 4, 8] {
        let m = (x.len() - w) + 1;
        let mut y = vec![0.0; m];
        group.bench_with_input(BenchmarkId::from_parameter(w), &w, |b, &w| {
            b.iter(|| {
                sliding_median_tiny(black_box(&x), w, 1, NanPolicy::Exclude, &mut y).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_large_window(c: &mut Criterion) {
    let x = synthetic_input(10_000);
    let mut group = c.benchmark_group("large_window");
    for w in [16usize, 64, 256] {
        let m = (x.len() - w) + 1;
        let mut y = vec![0.0; m];
        group.bench_with_input(BenchmarkId::from_parameter(w), &w, |b, &w| {
            b.iter(|| {
                sliding_median_big(black_box(&x), w, 1, NanPolicy::Exclude, &mut y).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_dispatcher_vs_oracle(c: &mut Criterion) {
    let x = synthetic_input(2_000);
    let w = 32;
    let m = (x.len() - w) + 1;
    let mut y = vec![0.0; m];
    let mut group = c.benchmark_group("dispatcher_vs_oracle");
    group.bench_function("dispatcher", |b| {
        b.iter(|| {
            sliding_median(black_box(&x), w, 1, NanPolicy::Poison, &mut y).unwrap();
        });
    });
    group.bench_function("oracle", |b| {
        b.iter(|| {
            oracle(black_box(&x), w, 1, NanPolicy::Poison, &mut y).unwrap();
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_small_window,
    bench_large_window,
    bench_dispatcher_vs_oracle
);
criterion_main!(benches);
