// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hedgerow_compression::SpaceMap;
use hedgerow_extents::{ExtentModel, FixedExtents};
use hedgerow_viewport::compute_viewport;

fn bench_compute_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/compute");

    // The full per-scroll-event computation, uncompressed and
    // compressed; this is the hot path of the engine.
    for len in [10_000_usize, 500_000, 5_000_000] {
        let model = FixedExtents::new(len, 40.0);
        let map = SpaceMap::new(model.total_extent(), 600.0);
        let offset = map.actual_extent() * 0.37;
        let label = if map.is_compressed() {
            "compressed"
        } else {
            "plain"
        };
        group.bench_with_input(
            BenchmarkId::new(label, len),
            &offset,
            |b, &offset| {
                b.iter(|| {
                    black_box(compute_viewport(
                        black_box(offset),
                        600.0,
                        &map,
                        &model,
                        3,
                    ));
                });
            },
        );
    }
    group.finish();
}

fn bench_space_map_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression/round_trip");

    let map = SpaceMap::new(200_000_000.0, 600.0);
    group.bench_function("virtual_actual_virtual", |b| {
        let mut offset = 12_345_678.0;
        b.iter(|| {
            let actual = map.virtual_to_actual(black_box(offset));
            offset = map.actual_to_virtual(actual) + 1.0;
            if offset > 199_000_000.0 {
                offset = 12_345_678.0;
            }
            black_box(offset);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_compute_viewport, bench_space_map_round_trip);
criterion_main!(benches);
