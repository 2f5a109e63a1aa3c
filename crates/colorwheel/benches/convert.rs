use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use colorwheel::conversion::{hex_to_hsl, rgb_to_lab};
use colorwheel::palette::{PaletteGenerator, Scheme};
use colorwheel::{conversion_fn, gen_all_color_values, rgb, ColorFormat, Hex, Rgb};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let rgb = Rgb::new(215.0, 40.0, 39.0);
    group.bench_function("rgb-to-lab", |b| b.iter(|| rgb_to_lab(black_box(&rgb))));

    let hex = Hex::from_rgb(0xd7, 0x28, 0x27, 1.0);
    group.bench_function("hex-to-hsl", |b| b.iter(|| hex_to_hsl(black_box(&hex))));

    let color = rgb!(215, 40, 39);
    if let Some(converter) = conversion_fn(ColorFormat::Rgb, ColorFormat::Cmyk) {
        group.bench_function("dispatch", |b| {
            b.iter(|| converter.convert(black_box(&color)))
        });
    }

    group.bench_function("all-values", |b| {
        b.iter(|| gen_all_color_values(black_box(&color)))
    });

    group.finish();

    let mut group = c.benchmark_group("palette");
    let mut generator = PaletteGenerator::with_rng(StdRng::seed_from_u64(42));

    for scheme in [Scheme::Analogous, Scheme::Hexadic, Scheme::Random] {
        group.bench_function(scheme.name(), |b| {
            b.iter(|| generator.generate(scheme, black_box(8), Some(&color), ColorFormat::Lab))
        });
    }

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
