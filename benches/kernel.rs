//! Kernel benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Row echelon form and rank across sizes (2x2 to 8x8)
//! - Gauss–Jordan inversion of well-conditioned and singular inputs
//! - Characteristic polynomials and eigenvalues (2x2, 3x3)
//! - Root finder sampling density
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use matcalc_rs::prelude::*;
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Random `n x n` matrix with entries in `[-10, 10]`.
fn random_matrix(n: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f64> = (0..n * n).map(|_| rng.random_range(-10.0..10.0)).collect();
    Matrix::from_row_major(n, n, data).unwrap()
}

/// Random `n x n` matrix whose last row repeats the first.
fn random_singular_matrix(n: usize, seed: u64) -> Matrix<f64> {
    let a = random_matrix(n, seed);
    let mut rows = a.to_rows();
    rows[n - 1] = rows[0].clone();
    Matrix::from_rows(&rows).unwrap()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_row_echelon(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_echelon");
    group.sample_size(100);

    for n in [2, 3, 4, 6, 8] {
        let a = random_matrix(n, 42);
        group.bench_with_input(BenchmarkId::new("random", n), &a, |b, a| {
            b.iter(|| row_echelon(black_box(a)))
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    group.sample_size(100);

    for n in [2, 3, 4, 6, 8] {
        let a = random_matrix(n, 7);
        group.bench_with_input(BenchmarkId::new("random", n), &a, |b, a| {
            b.iter(|| inverse(black_box(a)))
        });

        let s = random_singular_matrix(n, 7);
        group.bench_with_input(BenchmarkId::new("singular", n), &s, |b, s| {
            b.iter(|| rank_and_inverse(black_box(s)))
        });
    }

    group.finish();
}

fn bench_eigen(c: &mut Criterion) {
    let mut group = c.benchmark_group("characteristic_polynomial");
    group.sample_size(100);

    for n in [2, 3] {
        let a = random_matrix(n, 2024);
        group.bench_with_input(BenchmarkId::new("random", n), &a, |b, a| {
            b.iter(|| characteristic_polynomial(black_box(a)))
        });
    }

    group.finish();
}

fn bench_sample_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_steps");
    group.sample_size(50);

    let a = Matrix::from_rows(&[[3.0, 1.0, 2.0], [0.0, 4.0, 1.0], [0.0, 0.0, -1.0]]).unwrap();
    for steps in [50, 200, 1000, 5000] {
        let kernel = Kernel::<f64>::new().sample_steps(steps).build().unwrap();
        group.bench_with_input(BenchmarkId::new("cubic", steps), &kernel, |b, kernel| {
            b.iter(|| kernel.characteristic_polynomial(black_box(&a)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_row_echelon,
    bench_inverse,
    bench_eigen,
    bench_sample_steps
);
criterion_main!(benches);
