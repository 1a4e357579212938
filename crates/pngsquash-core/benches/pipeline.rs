//! Benchmarks for the pngsquash conversion stages.
//!
//! Run with: cargo bench -p pngsquash-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use pngsquash_core::config::{ConversionConfig, ResizeFilter};
use pngsquash_core::pipeline::{ReEncoder, Resizer};

fn sample_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(1600, 1200, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    }))
}

fn benchmark_resize(c: &mut Criterion) {
    let img = sample_image();

    for filter in [ResizeFilter::Nearest, ResizeFilter::Lanczos3] {
        let resizer = Resizer::new(&ConversionConfig {
            filter,
            ..ConversionConfig::default()
        });
        c.bench_function(&format!("resize_1600x1200_{filter:?}"), |b| {
            b.iter(|| resizer.resize(black_box(&img)))
        });
    }
}

fn benchmark_reencode(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("bench.png");
    let temporary = dir.path().join("bench_temp.jpg");
    sample_image().save(&source).unwrap();

    let reencoder = ReEncoder::new(30);
    c.bench_function("reencode_1600x1200_q30", |b| {
        b.iter(|| reencoder.reencode(black_box(&source), &temporary).unwrap())
    });
}

criterion_group!(benches, benchmark_resize, benchmark_reencode);
criterion_main!(benches);
