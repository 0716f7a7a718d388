use nist_downsampler::decimation::decimate;
use nist_downsampler::filter::{build_kernel, convolve};
use nist_downsampler::{downsample, GaussianParameters, Raster, NIST_RADIUS, NIST_SIGMA};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn test_raster(width: usize, height: usize) -> Raster {
    let samples = (0..width * height).map(|i| (i % 251) as u8).collect();
    Raster::from_samples(width, height, 1, samples).expect("valid raster")
}

fn convolve_bench(c: &mut Criterion) {
    let raster = test_raster(640, 480);
    let kernel = build_kernel(NIST_RADIUS, NIST_SIGMA).expect("valid kernel");
    c.bench_function("convolve 9x9 Gaussian, 640x480", |b| {
        b.iter(|| black_box(convolve(black_box(&raster), &kernel)));
    });
}

fn decimate_bench(c: &mut Criterion) {
    let raster = test_raster(1280, 960);
    c.bench_function("decimate 1280x960", |b| {
        b.iter(|| black_box(decimate(black_box(&raster))));
    });
}

fn downsample_bench(c: &mut Criterion) {
    let raster = test_raster(640, 480);
    let parameters = GaussianParameters::default();
    c.bench_function("downsample 640x480", |b| {
        b.iter(|| black_box(downsample(black_box(&raster), &parameters)));
    });
}

criterion_group!(benches, convolve_bench, decimate_bench, downsample_bench);
criterion_main!(benches);
