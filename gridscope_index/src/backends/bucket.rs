// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform bucket index keyed by grid cell.

use core::fmt::Debug;
use core::ops::ControlFlow;

use gridscope_grid::{CellRange, Entity, GridSpec};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::backend::CellQuery;

type Bucket = SmallVec<[usize; 4]>;

/// Spatial index from cell bucket `(floor(x / cell), floor(y / cell))` to entity slots.
///
/// Buckets are exactly one grid cell in size, so range queries return no
/// false positives. Entities without a position are never indexed.
#[derive(Clone)]
pub struct BucketIndex {
    grid: GridSpec,
    buckets: HashMap<(i64, i64), Bucket>,
    len: usize,
}

impl BucketIndex {
    /// Creates an empty index bucketed by `grid`'s cell size.
    #[must_use]
    pub fn new(grid: &GridSpec) -> Self {
        Self {
            grid: *grid,
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Clears all buckets and re-inserts every placed entity of `entities`.
    ///
    /// Slot `i` refers to `entities[i]`. Within a bucket, slots keep slice order.
    pub fn rebuild<K>(&mut self, entities: &[Entity<K>]) {
        self.buckets.clear();
        self.len = 0;
        for (slot, entity) in entities.iter().enumerate() {
            if let Some(pos) = entity.position {
                let key = self.grid.bucket_of(pos);
                self.buckets.entry(key).or_default().push(slot);
                self.len += 1;
            }
        }
    }

    /// Grid the index buckets by.
    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Number of indexed (placed) entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Slots in bucket `(x, y)`, empty if the bucket holds nothing.
    #[must_use]
    pub fn bucket(&self, x: i64, y: i64) -> &[usize] {
        self.buckets.get(&(x, y)).map_or(&[], |b| b.as_slice())
    }
}

impl Debug for BucketIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BucketIndex")
            .field("cell_size", &self.grid.cell_size())
            .field("len", &self.len)
            .field("buckets", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl CellQuery for BucketIndex {
    fn visit_range<F>(&self, range: CellRange, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(usize) -> ControlFlow<()>,
    {
        if range.is_empty() || self.buckets.is_empty() {
            return ControlFlow::Continue(());
        }
        for x in range.start_x..range.end_x {
            for y in range.start_y..range.end_y {
                if let Some(bucket) = self.buckets.get(&(i64::from(x), i64::from(y))) {
                    for &slot in bucket {
                        f(slot)?;
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }
}
