// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use seatmap::scene::{Placement, SceneBuilder};
use seatmap::{SeatingConfig, SeatingMap};
use std::sync::Arc;

fn map_with(rows: u32, cols: u32, cull: bool) -> SeatingMap {
    let scene = SceneBuilder::new(1_200.0, 1_200.0)
        .grid_section("A", Placement::IDENTITY, rows, cols)
        .build()
        .unwrap();
    let mut map = SeatingMap::new(SeatingConfig {
        cull_to_viewport: cull,
        ..SeatingConfig::default()
    });
    map.set_container(Rect::new(0.0, 0.0, 1_280.0, 720.0));
    map.load_scene(Arc::new(scene));
    for col in 1..=8 {
        map.click_seat(&format!("A-1-{col}"));
    }
    map
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/frame");

    // 999 stays direct, 1_000 switches to the 20-seat window.
    for (rows, cols) in [(10u32, 20u32), (27, 37), (25, 40), (100, 100)] {
        let seats = u64::from(rows * cols);
        group.throughput(Throughput::Elements(seats));
        for cull in [false, true] {
            let map = map_with(rows, cols, cull);
            let name = if cull { "culled" } else { "all" };
            group.bench_with_input(BenchmarkId::new(name, seats), &map, |b, map| {
                b.iter(|| black_box(map.render()));
            });
        }
    }

    group.finish();
}

fn bench_wheel_zoom(c: &mut Criterion) {
    c.bench_function("render/wheel_zoom_then_frame", |b| {
        let mut map = map_with(10, 20, true);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            map.zoom_at(Point::new(640.0, 360.0), if flip { 1.1 } else { 1.0 / 1.1 });
            black_box(map.render());
        });
    });
}

criterion_group!(benches, bench_render, bench_wheel_zoom);
criterion_main!(benches);
