// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridscope Grid: the data model shared by every gridscope crate.
//!
//! A gridscope canvas draws a rectangular grid of square cells and the
//! entities placed on it. This crate owns the small value types the rest of
//! the workspace passes around:
//! - [`GridSpec`]: rows, columns and cell size, validated on construction.
//! - [`Entity`]: an externally owned item with an optional logical position.
//! - [`Viewport`]: the logical-pixel window currently shown by the host.
//! - [`CellRange`]: a half-open rectangle of grid cells.
//!
//! All positions are in **logical pixels**: the grid's own coordinate space
//! before any zoom is applied. Cell `(col, row)` covers
//! `[col * cell_size, (col + 1) * cell_size)` horizontally and the same
//! vertically.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use gridscope_grid::{CellRange, Entity, EntityKind, GridSpec};
//!
//! let grid = GridSpec::new(10, 20, 50.0).unwrap();
//! assert_eq!(grid.total_cells(), 200);
//!
//! let bot = Entity::placed(7_u32, EntityKind::Bot, Point::new(120.0, 80.0));
//! let cell = grid.cell_of(bot.position.unwrap()).unwrap();
//! assert_eq!(cell, (2, 1));
//! assert!(CellRange::new(2, 3, 1, 2).contains(2, 1));
//! ```
//!
//! Invalid grids (zero rows or columns, non-positive cell size) are rejected
//! by [`GridSpec::new`] so that nothing downstream has to clamp silently.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod entity;
mod grid;
mod range;
mod viewport;

pub use entity::{Entity, EntityKind};
pub use grid::{GridLimits, GridSpec, GridSpecError};
pub use range::CellRange;
pub use viewport::Viewport;
