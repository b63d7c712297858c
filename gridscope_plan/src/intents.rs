// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer intents the canvas reports back to the entity owner.
//!
//! Nothing here mutates entities. Hosts turn a picked slot into a selection
//! and a snapped position into a move request against their own store.

use core::ops::ControlFlow;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use gridscope_grid::{CellRange, Entity, GridSpec};
use gridscope_index::CellQuery;
use kurbo::{Point, Rect};

/// Topmost placed entity whose cell-sized footprint contains `point`.
///
/// `point` is in logical pixels. Later slots are drawn over earlier ones, so
/// among overlapping hits the largest slot wins. `query` must cover the same
/// snapshot as `entities`; only the point's cell and its up-left neighbours
/// are visited, since a footprint reaches at most one cell to the right and
/// down from its origin.
#[must_use]
pub fn pick_entity<K, Q>(
    entities: &[Entity<K>],
    query: &Q,
    grid: &GridSpec,
    point: Point,
) -> Option<usize>
where
    Q: CellQuery,
{
    if !grid.bounds().contains(point) {
        return None;
    }
    let (bx, by) = grid.bucket_of(point);
    let to_u32 = |v: i64| u32::try_from(v.max(0)).ok();
    let range = CellRange::new(to_u32(bx - 1)?, to_u32(bx + 1)?, to_u32(by - 1)?, to_u32(by + 1)?);
    let cell = grid.cell_size();
    let mut hit = None;
    let _ = query.visit_range(range, |slot| {
        let inside = entities
            .get(slot)
            .and_then(|e| e.position)
            .is_some_and(|p| Rect::from_origin_size(p, (cell, cell)).contains(point));
        if inside && hit.is_none_or(|best| slot > best) {
            hit = Some(slot);
        }
        ControlFlow::Continue(())
    });
    hit
}

/// Snaps a dropped footprint to the cell under its center.
///
/// `dropped` is the footprint's top-left corner in logical pixels. The result
/// is a cell origin, clamped so the whole footprint stays on the grid.
#[must_use]
pub fn snap_drop(grid: &GridSpec, dropped: Point) -> Point {
    let cell = grid.cell_size();
    let half = cell / 2.0;
    let snap = |v: f64| ((v + half) / cell).floor() * cell;
    bound_drag(grid, Point::new(snap(dropped.x), snap(dropped.y)))
}

/// Clamps an in-flight drag position so the footprint stays on the grid.
#[must_use]
pub fn bound_drag(grid: &GridSpec, pos: Point) -> Point {
    let cell = grid.cell_size();
    let max_x = (grid.width() - cell).max(0.0);
    let max_y = (grid.height() - cell).max(0.0);
    Point::new(pos.x.min(max_x).max(0.0), pos.y.min(max_y).max(0.0))
}
