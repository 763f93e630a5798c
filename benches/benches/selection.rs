// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use seatmap_scene::{Placement, SceneBuilder};
use seatmap_selection::{BoundedSelection, SelectionConfig, SelectionStore};
use std::sync::Arc;

fn bench_store_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/store_toggle");

    // Every toggle clones the state before committing; capacity bounds that cost.
    for capacity in [8usize, 64, 512] {
        let scene = Arc::new(
            SceneBuilder::new(2_000.0, 2_000.0)
                .grid_section("A", Placement::IDENTITY, 32, 32)
                .build()
                .unwrap(),
        );
        let items: Vec<_> = scene.items().take(capacity).cloned().collect();
        group.throughput(Throughput::Elements(items.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &items,
            |b, items| {
                b.iter_batched(
                    || {
                        let config = SelectionConfig::default().with_max_selection(capacity);
                        let mut store = SelectionStore::new(config);
                        store.load_scene(scene.clone());
                        store
                    },
                    |mut store| {
                        for item in items {
                            store.toggle(item.clone());
                        }
                        black_box(store.total_price());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_bounded_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/bounded_insert");

    // Linear de-dup scan per insert; quadratic in capacity.
    for capacity in [8usize, 64, 512] {
        let keys: Vec<u32> = (0..(capacity as u32)).collect();
        group.throughput(Throughput::Elements(capacity as u64));

        group.bench_with_input(BenchmarkId::from_parameter(capacity), &keys, |b, keys| {
            b.iter_batched(
                || BoundedSelection::<u32>::new(capacity),
                |mut sel| {
                    for &k in keys {
                        sel.insert(k);
                    }
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_store_toggle, bench_bounded_insert);
criterion_main!(benches);
