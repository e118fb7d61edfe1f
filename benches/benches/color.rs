//! Color conversion benchmarks
//!
//! Run with: cargo bench --bench color

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jpeg_color::{rgb_buffer_to_ycbcr, ycbcr_buffer_to_rgb, Pixel};
use jpeg_core::PixelFormat;

fn bench_buffer_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color Buffer Conversion");
    let pixel_count = 256 * 256;
    let input: Vec<f32> = (0..pixel_count * 3).map(|i| (i % 256) as f32).collect();
    let mut output = vec![0.0f32; input.len()];

    group.throughput(Throughput::Elements(pixel_count as u64));

    group.bench_function("rgb_to_ycbcr", |b| {
        b.iter(|| rgb_buffer_to_ycbcr(black_box(&input), black_box(&mut output)));
    });

    group.bench_function("ycbcr_to_rgb", |b| {
        b.iter(|| ycbcr_buffer_to_rgb(black_box(&input), black_box(&mut output)));
    });

    group.finish();
}

fn bench_pixel_conversion(c: &mut Criterion) {
    let pixels: Vec<Pixel> = (0..4096)
        .map(|i| Pixel::rgb((i % 256) as f32, (i / 16 % 256) as f32, 77.0))
        .collect();

    c.bench_function("pixel_to_ycbcr", |b| {
        b.iter(|| {
            pixels
                .iter()
                .map(|p| p.to_format(PixelFormat::YCbCr))
                .fold(0.0f32, |acc, p| acc + p.y())
        });
    });
}

criterion_group!(benches, bench_buffer_conversion, bench_pixel_conversion);
criterion_main!(benches);
