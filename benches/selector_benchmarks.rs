use criterion::{black_box, criterion_group, criterion_main, Criterion};
use icoforge::converter::ExtensionFilter;
use icoforge::selector::{select_sizes, SizeLadder};
use icoforge::utils::naming::{normalize_path_input, strip_extension};

fn benchmark_size_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Size Selection");
    let ladder = SizeLadder::default();
    let widths = [8, 16, 31, 32, 100, 255, 256, 4096];

    for width in widths {
        group.bench_function(format!("{}px", width), |b| {
            b.iter(|| ladder.select(black_box(width)))
        });
    }

    group.bench_function("default ladder, owned", |b| {
        b.iter(|| select_sizes(black_box(100)))
    });

    group.finish();
}

fn benchmark_name_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Name Helpers");

    group.bench_function("strip_extension", |b| {
        b.iter(|| strip_extension(black_box("holiday.photo.final.png")))
    });

    group.bench_function("normalize_path_input", |b| {
        b.iter(|| normalize_path_input(black_box("  \"/home/user/My Pictures/logo.png\"  ")))
    });

    let filter = ExtensionFilter::parse(".PNG").unwrap();
    group.bench_function("extension_filter", |b| {
        b.iter(|| filter.matches(black_box("Screenshot 2024-01-01.png")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_size_selection, benchmark_name_helpers);
criterion_main!(benches);
