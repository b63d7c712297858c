// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use gridscope_grid::{CellRange, Entity, GridSpec};
use gridscope_index::{BucketIndex, CellQuery, FlatScan};

/// Slots of the placed entities whose cell lies in `range`, at most `max_visible` of them.
///
/// With an `index` the cells are walked column by column and each bucket in
/// insertion order; without one the entities are scanned in slice order.
/// Either way the truncation is deterministic for a given snapshot. The
/// index must have been rebuilt from `entities` on `grid`.
#[must_use]
pub fn cull<K>(
    entities: &[Entity<K>],
    range: &CellRange,
    grid: &GridSpec,
    max_visible: usize,
    index: Option<&BucketIndex>,
) -> Vec<usize> {
    match index {
        Some(index) => index.query_range_limited(*range, max_visible),
        None => FlatScan::new(entities, grid).query_range_limited(*range, max_visible),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use gridscope_grid::{CellRange, Entity, EntityKind, GridSpec};
    use gridscope_index::BucketIndex;
    use kurbo::Point;

    use super::cull;

    fn scattered(grid: &GridSpec, n: u32) -> Vec<Entity<u32>> {
        (0..n)
            .map(|i| {
                let col = i % grid.cols();
                let row = (i / grid.cols()) % grid.rows();
                Entity::placed(i, EntityKind::Bot, grid.cell_origin(col, row))
            })
            .collect()
    }

    #[test]
    fn budget_is_a_hard_cap() {
        let grid = GridSpec::new(20, 20, 50.0).unwrap();
        let entities = scattered(&grid, 400);
        let mut index = BucketIndex::new(&grid);
        index.rebuild(&entities);
        let full = CellRange::full(&grid);

        for budget in [0, 1, 37, 400, 1_000] {
            let scanned = cull(&entities, &full, &grid, budget, None);
            let indexed = cull(&entities, &full, &grid, budget, Some(&index));
            assert_eq!(scanned.len(), budget.min(400));
            assert_eq!(indexed.len(), budget.min(400));
        }
    }

    #[test]
    fn scan_keeps_source_order_and_skips_unplaced() {
        let grid = GridSpec::new(10, 10, 50.0).unwrap();
        let entities = [
            Entity::placed(0, EntityKind::Bot, Point::new(400.0, 0.0)),
            Entity::unplaced(1, EntityKind::Bot),
            Entity::placed(2, EntityKind::Station, Point::new(0.0, 0.0)),
            Entity::placed(3, EntityKind::Station, Point::new(480.0, 480.0)),
        ];
        let range = CellRange::new(0, 9, 0, 9);
        assert_eq!(cull(&entities, &range, &grid, 10, None), [0, 2]);
        assert_eq!(cull(&entities, &range, &grid, 1, None), [0]);
    }

    #[test]
    fn index_walks_columns_first() {
        let grid = GridSpec::new(10, 10, 50.0).unwrap();
        let entities = [
            Entity::placed(0, EntityKind::Bot, Point::new(400.0, 0.0)),
            Entity::placed(1, EntityKind::Bot, Point::new(0.0, 200.0)),
            Entity::placed(2, EntityKind::Bot, Point::new(0.0, 0.0)),
        ];
        let mut index = BucketIndex::new(&grid);
        index.rebuild(&entities);
        let full = CellRange::full(&grid);
        assert_eq!(cull(&entities, &full, &grid, 10, Some(&index)), [2, 1, 0]);
        assert_eq!(cull(&entities, &full, &grid, 2, Some(&index)), [2, 1]);
    }
}
