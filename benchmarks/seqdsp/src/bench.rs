//! Sequence operation benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Sliding filters (mean and median) across widths and sizes
//! - Resampling (upsampling and downsampling)
//! - Elementwise arithmetic on the SIMD lane kernels (f64 and f32)
//! - Single-pass scans (extrema, mean, differences)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::Normal;
use seqdsp::prelude::*;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy sine wave.
fn generate_signal(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    (0..size)
        .map(|i| (i as f64 * 10.0 / size as f64).sin() + noise_dist.sample(&mut rng))
        .collect()
}

/// Generate a noisy sine wave in single precision.
fn generate_signal_f32(size: usize, seed: u64) -> Vec<f32> {
    generate_signal(size, seed).into_iter().map(|v| v as f32).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_average_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_filter");
    group.sample_size(50);

    for size in SIZES {
        let signal = generate_signal(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for width in [5isize, 51] {
            group.bench_with_input(
                BenchmarkId::new(format!("width_{width}"), size),
                &size,
                |b, _| b.iter(|| average_filter(black_box(&signal), black_box(width))),
            );
        }
    }
    group.finish();
}

fn bench_median_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_filter");
    group.sample_size(30);

    for size in SIZES {
        let signal = generate_signal(size, 43);
        group.throughput(Throughput::Elements(size as u64));

        for width in [5isize, 51] {
            group.bench_with_input(
                BenchmarkId::new(format!("width_{width}"), size),
                &size,
                |b, _| b.iter(|| median_filter(black_box(&signal), black_box(width))),
            );
        }
    }
    group.finish();
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    group.sample_size(50);

    for size in SIZES {
        let signal = generate_signal(size, 44);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("upsample_x2", size), &size, |b, &size| {
            b.iter(|| resample(black_box(&signal), (2 * size) as isize))
        });
        group.bench_with_input(BenchmarkId::new("downsample_x4", size), &size, |b, &size| {
            b.iter(|| resample(black_box(&signal), (size / 4) as isize))
        });
    }
    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    group.sample_size(100);

    for size in SIZES {
        let a = generate_signal(size, 45);
        let b64 = generate_signal(size, 46);
        let a32 = generate_signal_f32(size, 47);
        let b32 = generate_signal_f32(size, 48);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("add_f64", size), &size, |b, _| {
            b.iter(|| add::<f64, _>(black_box(&[&a, &b64])))
        });
        group.bench_with_input(BenchmarkId::new("mul_f64", size), &size, |b, _| {
            b.iter(|| mul::<f64, _>(black_box(&[&a, &b64])))
        });
        group.bench_with_input(BenchmarkId::new("add_f32", size), &size, |b, _| {
            b.iter(|| add::<f32, _>(black_box(&[&a32, &b32])))
        });
        group.bench_with_input(BenchmarkId::new("scale_f32", size), &size, |b, _| {
            b.iter(|| scale(black_box(&a32), black_box(0.5)))
        });
        group.bench_with_input(BenchmarkId::new("safe_div_f64", size), &size, |b, _| {
            b.iter(|| safe_div(black_box(&a), black_box(&b64), 0.0))
        });
    }
    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("scans");
    group.sample_size(100);

    for size in SIZES {
        let signal = generate_signal(size, 49);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("min_max", size), &size, |b, _| {
            b.iter(|| min_max(black_box(&signal)))
        });
        group.bench_with_input(BenchmarkId::new("average", size), &size, |b, _| {
            b.iter(|| average(black_box(&signal)))
        });
        group.bench_with_input(BenchmarkId::new("nth_derivative_3", size), &size, |b, _| {
            b.iter(|| nth_derivative(black_box(&signal), 3))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_average_filter,
    bench_median_filter,
    bench_resample,
    bench_elementwise,
    bench_scans,
);

criterion_main!(benches);
