//! Sampling engine benchmarks.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pisim::prelude::*;

fn bench_next_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_batch");
    group.confidence_level(0.95);

    for k in [1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter_batched(
                || SamplingEngine::with_seed(42),
                |mut engine| black_box(engine.next_batch(k).inside_count()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_slice_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_statistics");

    for n in [10_000usize, 100_000, 1_000_000] {
        let mut engine = SamplingEngine::with_seed(42);
        engine.next_batch(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &engine, |b, engine| {
            b.iter(|| {
                black_box(
                    engine
                        .compute_slice_statistics(Axis::Z, black_box(0.3), 0.05)
                        .map(|s| s.slice_total),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_next_batch, bench_slice_statistics);
criterion_main!(benches);
