// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brute-force scan over a borrowed entity slice. No build step; good for small sets.

use core::fmt::Debug;
use core::ops::ControlFlow;

use gridscope_grid::{CellRange, Entity, GridSpec};

use crate::backend::CellQuery;

/// Linear scan over an entity slice, in slice order.
pub struct FlatScan<'a, K> {
    entities: &'a [Entity<K>],
    grid: GridSpec,
}

impl<'a, K> FlatScan<'a, K> {
    /// Wraps `entities`, bucketing positions by `grid`'s cell size.
    pub fn new(entities: &'a [Entity<K>], grid: &GridSpec) -> Self {
        Self {
            entities,
            grid: *grid,
        }
    }
}

impl<K> Debug for FlatScan<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entities.len();
        let placed = self.entities.iter().filter(|e| e.is_placed()).count();
        f.debug_struct("FlatScan")
            .field("total_slots", &total)
            .field("placed", &placed)
            .finish_non_exhaustive()
    }
}

impl<K> CellQuery for FlatScan<'_, K> {
    fn visit_range<F>(&self, range: CellRange, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(usize) -> ControlFlow<()>,
    {
        if range.is_empty() {
            return ControlFlow::Continue(());
        }
        for (slot, entity) in self.entities.iter().enumerate() {
            if let Some(pos) = entity.position {
                let (x, y) = self.grid.bucket_of(pos);
                if range.contains(x, y) {
                    f(slot)?;
                }
            }
        }
        ControlFlow::Continue(())
    }
}
