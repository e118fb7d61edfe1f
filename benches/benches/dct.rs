//! Benchmark comparing the orthonormal and classic DCT formulations
//!
//! Run with: cargo bench --bench dct

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jpeg_core::Grid;
use jpeg_transform::{
    classic_forward_dct, dct_channel, forward_dct, forward_dct_serial, idct_channel,
    TransformOptions,
};

fn test_grid(n: usize) -> Grid<f64> {
    Grid::from_fn(n, n, |r, c| ((r * 31 + c * 7) % 255) as f64 - 128.0).unwrap()
}

fn bench_dct_8x8_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 8x8 Comparison");
    let block = test_grid(8);

    group.bench_function("orthonormal_forward", |b| {
        b.iter(|| forward_dct_serial(black_box(&block)));
    });

    group.bench_function("classic_forward", |b| {
        b.iter(|| classic_forward_dct(black_box(&block)));
    });

    group.finish();
}

fn bench_partitioned_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("Partitioned DCT");

    for &size in &[32, 64, 128] {
        let grid = test_grid(size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), &grid, |b, grid| {
            b.iter(|| forward_dct_serial(black_box(grid)));
        });

        let options = TransformOptions::default();
        group.bench_with_input(BenchmarkId::new("parallel", size), &grid, |b, grid| {
            b.iter(|| forward_dct(black_box(grid), &options));
        });
    }

    group.finish();
}

fn bench_dct_channel(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT Channel");

    for &size in &[64, 256] {
        let channel: Vec<f32> = (0..size * size).map(|i| (i % 256) as f32 - 128.0).collect();
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_function(format!("forward_{}x{}", size, size), |b| {
            b.iter(|| dct_channel(black_box(&channel), size, size).unwrap());
        });

        group.bench_function(format!("inverse_{}x{}", size, size), |b| {
            b.iter(|| idct_channel(black_box(&channel), size, size).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dct_8x8_comparison,
    bench_partitioned_dct,
    bench_dct_channel
);
criterion_main!(benches);
