// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gridscope_grid::{Entity, EntityKind, GridSpec, Viewport};
use gridscope_lod::LodPolicy;
use gridscope_plan::{GridCanvas, RenderPlanner, compute_render_plan};
use kurbo::{Point, Size};

fn diagonal(grid: &GridSpec, n: u32) -> Vec<Entity<u32>> {
    (0..n)
        .map(|i| {
            let col = (i * 7) % grid.cols();
            let row = (i * 13) % grid.rows();
            Entity::placed(i, EntityKind::Bot, grid.cell_origin(col, row))
        })
        .collect()
}

fn bench_plan_per_tier(c: &mut Criterion) {
    let policy = LodPolicy::default();
    let mut group = c.benchmark_group("compute_render_plan");
    // High, Medium and Low tier grids at a 1080p container.
    for &(rows, cols, cell) in &[(20u32, 20u32, 50.0), (400, 400, 20.0), (1000, 1000, 50.0)] {
        let grid = GridSpec::new(rows, cols, cell).unwrap();
        let entities = diagonal(&grid, 2_000);
        let viewport = Viewport::new(200.0, 200.0, 1920.0, 1080.0);
        let label = format!("{rows}x{cols}@{cell}");
        group.bench_function(BenchmarkId::new("scan", &label), |b| {
            b.iter(|| {
                let plan = compute_render_plan(&entities, &grid, &viewport, 1.0, &policy, None);
                black_box(plan.lines.len() + plan.visible_objects.len())
            })
        });
        group.bench_function(BenchmarkId::new("planner", &label), |b| {
            let mut planner = RenderPlanner::new(policy);
            b.iter(|| {
                let plan = planner.plan(&entities, 1, &grid, &viewport, 1.0);
                black_box(plan.lines.len() + plan.visible_objects.len())
            })
        });
    }
    group.finish();
}

fn bench_pan_session(c: &mut Criterion) {
    let grid = GridSpec::new(1000, 1000, 50.0).unwrap();
    let entities = diagonal(&grid, 10_000);
    c.bench_function("canvas_pan_session", |b| {
        b.iter(|| {
            let mut canvas: GridCanvas<u32> = GridCanvas::new(grid);
            canvas.on_resize(Size::new(1920.0, 1080.0), Duration::ZERO);
            let mut plans = 0;
            for frame in 0..120_u32 {
                let now = Duration::from_millis(u64::from(frame) * 8);
                let x = -f64::from(frame) * 25.0;
                canvas.on_drag_move(Point::new(x, x / 2.0), 1.0, now);
                if canvas.tick(now, &entities, 1).is_some() {
                    plans += 1;
                }
            }
            plans += usize::from(canvas.tick(Duration::from_secs(5), &entities, 1).is_some());
            black_box(plans)
        })
    });
}

criterion_group!(benches, bench_plan_per_tier, bench_pan_session);
criterion_main!(benches);
