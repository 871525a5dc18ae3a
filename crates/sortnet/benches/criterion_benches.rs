//! Criterion benchmarks for median-sortnet
//!
//! Measures wall-clock time to sort one window with each backend.
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, Criterion};
use median_sortnet::{ComparisonBackend, FixedWindow, NetworkBackend, Window16, Window8};
use std::hint::black_box;

fn scrambled8() -> Window8 {
    Window8::from_array(core::array::from_fn(|i| ((i * 5 + 3) % 8) as f64 * 1000.0 - 3500.0))
}

fn scrambled16() -> Window16 {
    Window16::from_array(core::array::from_fn(|i| ((i * 7 + 3) % 16) as f32 * 1000.0 - 7500.0))
}

/// Sort an eight-lane window
fn bench_sort8(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort8");
    let input = scrambled8();

    group.bench_function("comparison", |bencher| {
        bencher.iter(|| {
            let mut w = black_box(input);
            w.sort_with::<ComparisonBackend>();
            black_box(w)
        })
    });

    group.bench_function("network", |bencher| {
        bencher.iter(|| {
            let mut w = black_box(input);
            w.sort_with::<NetworkBackend>();
            black_box(w)
        })
    });

    #[cfg(all(feature = "avx512", target_arch = "x86_64"))]
    if median_sortnet::Avx512Backend::is_supported() {
        group.bench_function("avx512", |bencher| {
            bencher.iter(|| {
                let mut w = black_box(input);
                w.sort_with::<median_sortnet::Avx512Backend>();
                black_box(w)
            })
        });
    }

    group.finish();
}

/// Sort a sixteen-lane window
fn bench_sort16(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort16");
    let input = scrambled16();

    group.bench_function("comparison", |bencher| {
        bencher.iter(|| {
            let mut w = black_box(input);
            w.sort_with::<ComparisonBackend>();
            black_box(w)
        })
    });

    group.bench_function("network", |bencher| {
        bencher.iter(|| {
            let mut w = black_box(input);
            w.sort_with::<NetworkBackend>();
            black_box(w)
        })
    });

    #[cfg(all(feature = "avx512", target_arch = "x86_64"))]
    if median_sortnet::Avx512Backend::is_supported() {
        group.bench_function("avx512", |bencher| {
            bencher.iter(|| {
                let mut w = black_box(input);
                w.sort_with::<median_sortnet::Avx512Backend>();
                black_box(w)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort8, bench_sort16);
criterion_main!(benches);
