//! Benchmark module for summation and moments.
//! Run with: cargo bench -p tally --features bench --bench moments

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};

use crate::{elementwise, moments, sum};

const SIZES: [usize; 5] = [64, 1024, 4096, 16384, 100_000];

fn make_test_data(size: usize) -> Vec<f64> {
    (0..size).map(|x| (x as f64 * 0.001).sin() * 1e3).collect()
}

/// Register tally benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    benchmark_sum(c);
    benchmark_product(c);
    benchmark_moments(c);
}

/// Scalar compensated sum vs the interleaved lane-wise sum.
fn benchmark_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for size in SIZES {
        let values = make_test_data(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("naive", size), |b| {
            b.iter(|| black_box(black_box(&values).iter().sum::<f64>()))
        });

        group.bench_function(BenchmarkId::new("compensated", size), |b| {
            b.iter(|| black_box(sum::sum(black_box(&values))))
        });

        group.bench_function(BenchmarkId::new("lanewise", size), |b| {
            b.iter(|| black_box(sum::sum_lanewise(black_box(&values))))
        });
    }

    group.finish();
}

/// Scalar product loop vs the dispatched kernel.
fn benchmark_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("product");

    for size in SIZES {
        let x = make_test_data(size);
        let y: Vec<f64> = x.iter().rev().copied().collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("scalar", size), |b| {
            let mut dst = x.clone();
            b.iter(|| {
                dst.copy_from_slice(&x);
                elementwise::scalar::mul_assign(black_box(&mut dst), black_box(&y));
            })
        });

        group.bench_function(BenchmarkId::new("dispatch", size), |b| {
            let mut dst = x.clone();
            b.iter(|| {
                dst.copy_from_slice(&x);
                let _ = elementwise::product_in_place(black_box(&mut dst), black_box(&y));
            })
        });
    }

    group.finish();
}

fn benchmark_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("moments");

    for size in SIZES {
        let values = make_test_data(size);
        let weights: Vec<f64> = (0..size).map(|i| (i % 5 + 1) as f64).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("mean", size), |b| {
            b.iter(|| black_box(moments::mean(black_box(&values))))
        });

        group.bench_function(BenchmarkId::new("unbiased_variance", size), |b| {
            b.iter(|| black_box(moments::unweighted_unbiased_variance(black_box(&values), None)))
        });

        group.bench_function(BenchmarkId::new("weighted_biased_variance", size), |b| {
            b.iter(|| {
                black_box(moments::weighted_biased_variance(
                    black_box(&values),
                    None,
                    black_box(&weights),
                ))
            })
        });
    }

    group.finish();
}
