// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridscope Index: answer "which entities sit in these cells?" without scanning everything.
//!
//! Two strategies implement the same [`CellQuery`] trait:
//! - [`BucketIndex`]: a hash map from cell bucket to entity slots. Queries
//!   walk the requested cell rectangle, so cost scales with the visible area
//!   rather than with the entity count.
//! - [`FlatScan`]: a borrowed view over the entity slice that tests every
//!   entity. No build step, which wins for small entity counts.
//!
//! Slots are indices into the entity slice the index was built from. An index
//! is only valid for the snapshot it was last [rebuilt](BucketIndex::rebuild)
//! from; [`IndexCache`] ties that lifecycle to a host-supplied revision number
//! and only keeps an index around once the entity count crosses a threshold.
//!
//! ## Example
//!
//! ```rust
//! use gridscope_grid::{CellRange, Entity, EntityKind, GridSpec};
//! use gridscope_index::{BucketIndex, CellQuery, FlatScan};
//! use kurbo::Point;
//!
//! let grid = GridSpec::new(10, 10, 50.0).unwrap();
//! let entities = [
//!     Entity::placed(1, EntityKind::Bot, Point::new(120.0, 80.0)),
//!     Entity::unplaced(2, EntityKind::Station),
//! ];
//!
//! let mut index = BucketIndex::new(&grid);
//! index.rebuild(&entities);
//! assert_eq!(index.query_range(CellRange::new(2, 3, 1, 2)), [0]);
//! assert!(index.query_range(CellRange::new(0, 1, 0, 1)).is_empty());
//!
//! // The brute-force scan answers the same question.
//! let scan = FlatScan::new(&entities, &grid);
//! assert_eq!(scan.query_range(CellRange::new(2, 3, 1, 2)), [0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backend;
mod backends;
mod cache;

pub use backend::CellQuery;
pub use backends::bucket::BucketIndex;
pub use backends::flatscan::FlatScan;
pub use cache::{DEFAULT_INDEX_THRESHOLD, IndexCache};
