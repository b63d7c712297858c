// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridscope LOD: decide how much of the grid is worth drawing.
//!
//! Three pure steps run on every render pass:
//! 1. [`classify`] derives a [`PerformanceTier`] from the grid size and how
//!    many cells the viewport spans.
//! 2. [`resolve_render_config`] maps the tier, zoom and cell size to a
//!    [`RenderConfig`]: which layers to draw, how densely to sample
//!    coordinate labels, and a hard cap on drawn entities.
//! 3. [`visible_range`] turns the viewport into a [`CellRange`](gridscope_grid::CellRange),
//!    padded by a tier-dependent buffer so panning does not pop in cells
//!    before the next recompute.
//!
//! [`LodPolicy`] bundles the tunable thresholds, budgets and buffers. Its
//! defaults reproduce the free functions; custom policies must keep the
//! ordering `low <= medium <= high` ([`LodPolicy::validate`]).
//!
//! ## Example
//!
//! ```rust
//! use gridscope_grid::{GridSpec, Viewport};
//! use gridscope_lod::{LodPolicy, PerformanceTier};
//!
//! let policy = LodPolicy::default();
//! let grid = GridSpec::new(10, 10, 50.0).unwrap();
//! let viewport = Viewport::new(0.0, 0.0, 500.0, 500.0);
//!
//! let tier = policy.classify(&grid, &viewport);
//! assert_eq!(tier, PerformanceTier::High);
//!
//! let config = policy.resolve(tier, 1.0, grid.cell_size());
//! assert!(config.show_grid);
//! assert_eq!(config.max_visible_objects, 2000);
//!
//! let range = policy.visible_range(&viewport, &grid, tier);
//! assert_eq!((range.end_x, range.end_y), (10, 10));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod policy;
mod tier;
mod visible;

pub use config::{RenderConfig, resolve_render_config};
pub use policy::{LodPolicy, PerTier, PolicyError};
pub use tier::{PerformanceTier, TierThresholds, classify};
pub use visible::{buffer_for_tier, visible_range};
