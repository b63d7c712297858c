// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use gridscope_grid::{CellRange, Entity, EntityKind, GridSpec};
use gridscope_index::{BucketIndex, CellQuery, FlatScan};
use gridscope_plan::cull;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u32) -> u32 {
        u32::try_from(self.next_u64() % u64::from(n)).unwrap()
    }
}

fn scatter(grid: &GridSpec, n: usize, seed: u64) -> Vec<Entity<u32>> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|i| {
            let col = rng.below(grid.cols());
            let row = rng.below(grid.rows());
            Entity::placed(u32::try_from(i).unwrap(), EntityKind::Bot, grid.cell_origin(col, row))
        })
        .collect()
}

/// A screenful of cells near the middle of the grid.
fn screen_range(grid: &GridSpec) -> CellRange {
    let (cx, cy) = (grid.cols() / 2, grid.rows() / 2);
    CellRange::new(cx.saturating_sub(12), (cx + 12).min(grid.cols()), cy.saturating_sub(9), (cy + 9).min(grid.rows()))
}

fn bench_rebuild(c: &mut Criterion) {
    let grid = GridSpec::new(1000, 1000, 50.0).unwrap();
    let mut group = c.benchmark_group("bucket_rebuild");
    for &n in &[500usize, 5_000, 50_000] {
        let entities = scatter(&grid, n, 0xC0FFEE);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter_batched(
                || BucketIndex::new(&grid),
                |mut index| {
                    index.rebuild(&entities);
                    index
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_screen(c: &mut Criterion) {
    let grid = GridSpec::new(1000, 1000, 50.0).unwrap();
    let range = screen_range(&grid);
    let mut group = c.benchmark_group("query_screen");
    for &n in &[500usize, 5_000, 50_000] {
        let entities = scatter(&grid, n, 0xBEEF);
        let mut index = BucketIndex::new(&grid);
        index.rebuild(&entities);
        let scan = FlatScan::new(&entities, &grid);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::new("FlatScan", n), |b| {
            b.iter(|| black_box(scan.query_range(range)).len())
        });
        group.bench_function(BenchmarkId::new("BucketIndex", n), |b| {
            b.iter(|| black_box(index.query_range(range)).len())
        });
    }
    group.finish();
}

fn bench_cull_budget(c: &mut Criterion) {
    // Every entity packed onto a small corner: the budget cuts the walk short.
    let grid = GridSpec::new(1000, 1000, 50.0).unwrap();
    let corner = GridSpec::new(40, 40, 50.0).unwrap();
    let entities = scatter(&corner, 20_000, 7);
    let mut index = BucketIndex::new(&grid);
    index.rebuild(&entities);
    let range = CellRange::new(0, 40, 0, 40);

    let mut group = c.benchmark_group("cull_budget");
    for &budget in &[500usize, 1_000, 2_000] {
        group.bench_function(BenchmarkId::new("scan", budget), |b| {
            b.iter(|| cull(&entities, &range, &grid, budget, None).len())
        });
        group.bench_function(BenchmarkId::new("index", budget), |b| {
            b.iter(|| cull(&entities, &range, &grid, budget, Some(&index)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_query_screen, bench_cull_budget);
criterion_main!(benches);
