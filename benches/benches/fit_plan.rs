// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use seatplan_geometry::{Area, Scene, Table, TableId, TableShape};
use seatplan_view2d::FitPlan;

fn populated_scene(tables: usize) -> Scene {
    Scene {
        areas: vec![Area::new(vec![
            Point::new(0.0, 0.0),
            Point::new(600.0, 0.0),
            Point::new(600.0, 400.0),
            Point::new(0.0, 400.0),
        ])],
        tables: (0..tables)
            .map(|i| {
                Table::new(
                    TableId(i as u64),
                    Point::new((i % 40) as f64 * 110.0, (i / 40) as f64 * 110.0),
                    TableShape::rect(80.0, 60.0),
                )
            })
            .collect(),
        seats: (0..64).map(|i| Point::new(f64::from(i) * 45.0, -200.0)).collect(),
        hall: Some(Size::new(1800.0, 1200.0)),
    }
}

fn bench_extent_and_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("view2d/fit_plan");
    let view = Size::new(800.0, 600.0);

    for len in [16usize, 128, 1_024] {
        let scene = populated_scene(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &scene, |b, scene| {
            b.iter(|| black_box(FitPlan::compute(scene.extent(), view)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extent_and_plan);
criterion_main!(benches);
