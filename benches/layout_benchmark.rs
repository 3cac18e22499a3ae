//! Layout performance benchmarks.
//!
//! Verifies that `ensure_laid_out` scales linearly with item count and that
//! visible-range queries stay logarithmic in the number of laid-out items.
//!
//! Run with: cargo bench --bench layout_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waterfall::layout::{ItemIndex, LayoutEngine, LayoutParams};

/// Deterministic pseudo-random heights in [100, 400).
fn height_for(index: ItemIndex, column_width: f64) -> f64 {
    let hash = (index.get() as u64).wrapping_mul(2_654_435_761) % 300;
    (100 + hash) as f64 * column_width / 200.0
}

fn generate_engine(num_items: usize, columns: usize) -> LayoutEngine {
    let mut engine = LayoutEngine::new(LayoutParams::new(columns, 1200.0, 4.0, 4.0))
        .expect("valid params");
    engine
        .ensure_laid_out(num_items, &mut height_for)
        .expect("positive heights");
    engine
}

/// Benchmark a full layout pass with varying item counts.
fn benchmark_full_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensure_laid_out");

    for num_items in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("items", num_items),
            &num_items,
            |b, &num_items| {
                b.iter(|| generate_engine(black_box(num_items), 4));
            },
        );
    }

    group.finish();
}

/// Benchmark appending a page of items to an existing layout.
fn benchmark_incremental_append(c: &mut Criterion) {
    let base = generate_engine(100_000, 4);

    c.bench_function("append_100_to_100k", |b| {
        b.iter_batched(
            || base.clone(),
            |mut engine| {
                engine
                    .ensure_laid_out(black_box(100_100), &mut height_for)
                    .expect("positive heights");
                engine
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark visible-range queries at different scroll positions.
fn benchmark_items_in_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("items_in_rect");

    for num_items in [1_000, 10_000, 100_000] {
        let engine = generate_engine(num_items, 4);
        let extent = engine.content_extent();
        println!(
            "Generated {} items, content extent: {:.0}",
            num_items, extent
        );

        group.bench_with_input(
            BenchmarkId::new("items", num_items),
            &engine,
            |b, engine| {
                b.iter(|| {
                    for fraction in [0.0, 0.25, 0.5, 0.75, 0.99] {
                        let top = extent * fraction;
                        let _visible = engine.items_in_rect(black_box(top), black_box(top + 900.0));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_full_layout, benchmark_incremental_append, benchmark_items_in_rect
}

criterion_main!(benches);
