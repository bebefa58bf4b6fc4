use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{Rgba, RgbaImage};
use imgcarve::energy::energy_field;
use imgcarve::seam::{self, SeamMode};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn checkerboard(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let v = if (x / 8 + y / 8) % 2 == 0 { 30 } else { 210 };
        Rgba([v, v, v, 255])
    })
}

fn bench_energy_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_field");
    for size in [64u32, 256, 512].iter() {
        let image = checkerboard(*size, *size);
        group.bench_with_input(BenchmarkId::new("sobel", size), &image, |b, image| {
            b.iter(|| energy_field(black_box(image)));
        });
    }
    group.finish();
}

fn bench_seam_finders(c: &mut Criterion) {
    let mut group = c.benchmark_group("seam_find_one");
    let image = checkerboard(256, 256);
    let energy = energy_field(&image);

    for mode in [SeamMode::Dynamics, SeamMode::Greedy, SeamMode::Random] {
        group.bench_with_input(BenchmarkId::new("mode", format!("{:?}", mode)), &mode, |b, mode| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| seam::find_one(black_box(&energy), *mode, &mut rng));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_energy_field, bench_seam_finders);
criterion_main!(benches);
