// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use seatplan_geometry::{Table, TableId, TableShape};
use seatplan_selection::{SelectMode, SelectionSet, resolve};

/// A square-ish grid of alternating rect/round tables, 120 world units apart.
fn table_grid(len: usize) -> Vec<Table> {
    let cols = (len as f64).sqrt().ceil() as usize;
    (0..len)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            let center = Point::new(col as f64 * 120.0, row as f64 * 120.0);
            let shape = if i % 2 == 0 {
                TableShape::rect(80.0, 60.0)
            } else {
                TableShape::round(60.0)
            };
            Table::new(TableId(i as u64), center, shape)
        })
        .collect()
}

fn bench_hits_in_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/hits_in_rect");

    for len in [64usize, 256, 1_024, 4_096] {
        let tables = table_grid(len);
        // A lasso covering roughly a quarter of the grid.
        let side = (len as f64).sqrt().ceil() * 120.0;
        let lasso = Rect::new(0.0, 0.0, side / 2.0, side / 2.0);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &tables, |b, tables| {
            b.iter(|| black_box(resolve::hits_in_rect(tables, lasso)));
        });
    }

    group.finish();
}

fn bench_apply_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/apply_rect_select");

    let tables = table_grid(1_024);
    let lasso = Rect::new(0.0, 0.0, 2_000.0, 2_000.0);

    for (name, mode) in [
        ("replace", SelectMode::Replace),
        ("append", SelectMode::Append),
    ] {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter_batched(
                SelectionSet::<TableId>::new,
                |mut sel| {
                    resolve::apply_rect_select(&mut sel, &tables, lasso, mode);
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hits_in_rect, bench_apply_modes);
criterion_main!(benches);
