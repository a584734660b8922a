//! Performance benchmarks for tenuniq-kernels
//!
//! Run with: cargo bench -p tenuniq-kernels
//!
//! Benchmarks cover:
//! - 1-D unique over int32 and float32 with few and many distinct values
//! - Row dedup of 2-D tensors (serial & parallel key computation)
//! - Inner-axis dedup of rank-3 tensors
//! - Text slices

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tenuniq_core::DenseND;
use tenuniq_kernels::*;

fn bench_unique_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_1d");

    for &size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(size as u64));

        for &distinct in [16usize, 4096].iter() {
            let ints = DenseND::from_vec((0..size).map(|i| (i % distinct) as i32).collect(), &[size])
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("int32_d{}", distinct), size),
                &size,
                |bencher, _| {
                    bencher.iter(|| black_box(unique_along(&ints, 0).unwrap()));
                },
            );

            let floats = DenseND::from_vec(
                (0..size)
                    .map(|i| {
                        if i % 97 == 0 {
                            f32::NAN
                        } else {
                            (i % distinct) as f32
                        }
                    })
                    .collect(),
                &[size],
            )
            .unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("float32_d{}", distinct), size),
                &size,
                |bencher, _| {
                    bencher.iter(|| black_box(unique_along(&floats, 0).unwrap()));
                },
            );
        }
    }
    group.finish();
}

fn bench_unique_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_rows");

    for &rows in [1_000, 10_000, 50_000].iter() {
        let cols = 16;
        let data: Vec<f64> = (0..rows * cols)
            .map(|i| ((i / cols) % 257 + i % cols) as f64)
            .collect();
        let tensor = DenseND::from_vec(data, &[rows, cols]).unwrap();
        group.throughput(Throughput::Elements((rows * cols) as u64));

        let serial = UniqueConfig::new().sequential();
        group.bench_with_input(
            BenchmarkId::new("serial", format!("{}x{}", rows, cols)),
            &rows,
            |bencher, _| {
                bencher.iter(|| black_box(unique_along_with_config(&tensor, &serial).unwrap()));
            },
        );

        #[cfg(feature = "parallel")]
        {
            let parallel = UniqueConfig::new().with_parallel_threshold(1);
            group.bench_with_input(
                BenchmarkId::new("parallel", format!("{}x{}", rows, cols)),
                &rows,
                |bencher, _| {
                    bencher
                        .iter(|| black_box(unique_along_with_config(&tensor, &parallel).unwrap()));
                },
            );
        }
    }
    group.finish();
}

fn bench_unique_inner_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_inner_axis");

    for &size in [16, 32, 64].iter() {
        let shape = [size, size, size];
        let data: Vec<i32> = (0..size * size * size).map(|i| ((i % size) % 8) as i32).collect();
        let tensor = DenseND::from_vec(data, &shape).unwrap();
        group.throughput(Throughput::Elements((size * size * size) as u64));

        for axis in 0..3 {
            group.bench_with_input(
                BenchmarkId::new(format!("axis{}", axis), format!("{}^3", size)),
                &axis,
                |bencher, &axis| {
                    bencher.iter(|| black_box(unique_along(&tensor, axis).unwrap()));
                },
            );
        }
    }
    group.finish();
}

fn bench_unique_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_strings");

    for &rows in [1_000, 10_000].iter() {
        let words = ["alpha", "beta", "gamma,delta", "epsilon"];
        let data: Vec<String> = (0..rows * 4)
            .map(|i| words[(i * 7 / 3) % words.len()].to_string())
            .collect();
        let tensor = DenseND::from_vec(data, &[rows, 4]).unwrap();
        group.throughput(Throughput::Elements((rows * 4) as u64));

        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |bencher, _| {
            bencher.iter(|| black_box(unique_along(&tensor, 0).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_unique_1d,
    bench_unique_rows,
    bench_unique_inner_axis,
    bench_unique_strings
);
criterion_main!(benches);
