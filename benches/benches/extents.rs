// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hedgerow_extents::{ExtentModel, FixedExtents, VariableExtents};

fn bench_index_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("extents/index_at_offset");

    // Hypothesis: fixed lookup is flat in the strip length, variable
    // lookup grows logarithmically; both stay far under a frame budget
    // even at multi-million-entry scale.
    for len in [1_000_usize, 100_000, 1_000_000] {
        let fixed = FixedExtents::new(len, 40.0);
        let variable = VariableExtents::from_fn(len, |i| 30.0 + (i % 7) as f64);
        let probe = fixed.total_extent() * 0.61;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("fixed", len), &probe, |b, &offset| {
            b.iter(|| black_box(fixed.index_at_offset(black_box(offset))));
        });
        let probe = variable.total_extent() * 0.61;
        group.bench_with_input(BenchmarkId::new("variable", len), &probe, |b, &offset| {
            b.iter(|| black_box(variable.index_at_offset(black_box(offset))));
        });
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("extents/rebuild");

    for len in [10_000_usize, 1_000_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let model = VariableExtents::from_fn(len, |i| 30.0 + (i % 7) as f64);
                black_box(model.total_extent());
            });
        });
    }
    group.finish();
}

fn bench_suffix_patch(c: &mut Criterion) {
    let mut group = c.benchmark_group("extents/set_extent");

    // A patch near the end should be near-free; near the start it pays
    // for the whole suffix.
    let len = 1_000_000_usize;
    for (name, index) in [("near_end", len - 10), ("near_start", 10)] {
        group.bench_function(name, |b| {
            let mut model = VariableExtents::from_fn(len, |_| 40.0);
            let mut extent = 41.0;
            b.iter(|| {
                model.set_extent(black_box(index), extent);
                extent = if extent > 40.5 { 40.0 } else { 41.0 };
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_lookup, bench_rebuild, bench_suffix_patch);
criterion_main!(benches);
