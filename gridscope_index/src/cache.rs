// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership and rebuild lifecycle for a [`BucketIndex`].

use gridscope_grid::{Entity, GridSpec};

use crate::BucketIndex;

/// Entity count above which an [`IndexCache`] keeps a bucket index.
pub const DEFAULT_INDEX_THRESHOLD: usize = 500;

/// Owns an optional [`BucketIndex`] and rebuilds it when the entity snapshot changes.
///
/// The host bumps a revision number whenever its entity list changes; the
/// cache compares revisions rather than diffing entities. Below the threshold
/// no index is kept and callers fall back to a [`FlatScan`](crate::FlatScan).
#[derive(Clone, Debug)]
pub struct IndexCache {
    threshold: usize,
    index: Option<BucketIndex>,
    revision: Option<u64>,
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_THRESHOLD)
    }
}

impl IndexCache {
    /// Creates an empty cache that indexes snapshots with more than `threshold` entities.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            index: None,
            revision: None,
        }
    }

    /// Entity count above which an index is kept.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Brings the cached index up to date with `entities` at `revision`.
    ///
    /// Returns the index when one is warranted, `None` when the snapshot is
    /// small enough for a brute-force scan. The index is rebuilt if the
    /// revision or the grid changed since the last sync.
    pub fn sync<K>(
        &mut self,
        entities: &[Entity<K>],
        revision: u64,
        grid: &GridSpec,
    ) -> Option<&BucketIndex> {
        if entities.len() <= self.threshold {
            if self.index.take().is_some() {
                log::debug!(
                    "dropping spatial index: {} entities at or below threshold {}",
                    entities.len(),
                    self.threshold
                );
            }
            self.revision = None;
            return None;
        }

        let stale = self.revision != Some(revision)
            || self.index.as_ref().is_none_or(|index| index.grid() != grid);
        if stale {
            let index = self.index.insert(BucketIndex::new(grid));
            index.rebuild(entities);
            log::debug!(
                "rebuilt spatial index at revision {revision}: {} entities in {} buckets",
                index.len(),
                index.bucket_count()
            );
            self.revision = Some(revision);
        }
        self.index.as_ref()
    }

    /// The current index, if one is kept. May be stale until the next [`IndexCache::sync`].
    #[must_use]
    pub fn index(&self) -> Option<&BucketIndex> {
        self.index.as_ref()
    }

    /// Drops the index so the next [`IndexCache::sync`] rebuilds from scratch.
    pub fn invalidate(&mut self) {
        self.index = None;
        self.revision = None;
    }
}
