//! Whole-image transform benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jpeg::{reconstruct_raster, transform_raster, ClassicDct, ImageTransformer, Matrix, Raster};

fn create_test_raster(width: usize, height: usize) -> Raster {
    let mut raster = Raster::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            raster.set_pixel(x, y, [((x * 255) / width) as u8, ((y * 255) / height) as u8, 128]);
        }
    }
    raster
}

fn bench_forward_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward by Image Size");

    for &size in &[64, 256, 512] {
        let raster = create_test_raster(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &raster,
            |b, raster| {
                b.iter(|| transform_raster(black_box(raster)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let raster = create_test_raster(256, 256);
    let coefficients = transform_raster(&raster).unwrap();

    c.bench_function("reconstruct_256x256", |b| {
        b.iter(|| reconstruct_raster(black_box(&coefficients)).unwrap());
    });

    let matrix = Matrix::from_raster(&raster);
    let classic = ImageTransformer::with_transform(ClassicDct);
    c.bench_function("classic_forward_256x256", |b| {
        b.iter(|| classic.forward(black_box(&matrix)).unwrap());
    });
}

criterion_group!(benches, bench_forward_by_size, bench_roundtrip);
criterion_main!(benches);
