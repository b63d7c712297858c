// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridscope Plan: turn a viewport and an entity snapshot into draw primitives.
//!
//! A [`RenderPlan`] is everything a rendering backend needs for one frame of
//! a virtualized grid: boundary and interior line rectangles, sampled
//! coordinate captions, the culled entity slots and their captions, plus the
//! [`PerformanceTier`](gridscope_lod::PerformanceTier) and
//! [`RenderConfig`](gridscope_lod::RenderConfig) that shaped them. Work is
//! proportional to the visible cell range, never to the whole grid.
//!
//! Entry points, from most to least composed:
//! - [`GridCanvas`]: owns a [`ViewportController`](gridscope_view2d::ViewportController),
//!   a [`RenderPlanner`] and a [`Debouncer`](gridscope_view2d::Debouncer).
//!   Input events move the view at once; planning trails them.
//! - [`RenderPlanner`]: owns a [`LodPolicy`](gridscope_lod::LodPolicy) and an
//!   [`IndexCache`](gridscope_index::IndexCache) keyed by snapshot revision.
//! - [`compute_render_plan`]: the stateless pipeline.
//!
//! The pieces are exposed as well: [`grid_lines`], [`coordinate_labels`],
//! [`object_labels`], [`cull`], and the pointer intents [`pick_entity`],
//! [`snap_drop`] and [`bound_drag`].
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use gridscope_grid::{Entity, EntityKind, GridSpec};
//! use gridscope_plan::GridCanvas;
//! use kurbo::{Point, Size};
//!
//! let grid = GridSpec::new(100, 100, 50.0).unwrap();
//! let entities = vec![
//!     Entity::placed(1_u32, EntityKind::Bot, Point::new(100.0, 50.0)),
//!     Entity::placed(2, EntityKind::Station, Point::new(4_000.0, 4_000.0)),
//! ];
//!
//! let mut canvas = GridCanvas::new(grid);
//! canvas.on_resize(Size::new(800.0, 600.0), Duration::ZERO);
//!
//! // Nothing is planned until the debounce elapses.
//! assert!(canvas.tick(Duration::from_millis(1), &entities, 0).is_none());
//! let plan = canvas.tick(Duration::from_millis(16), &entities, 0).unwrap();
//!
//! // Only the bot near the origin is on screen.
//! assert_eq!(plan.visible_objects, [0]);
//! assert_eq!(plan.lines.len() > 4, plan.config.show_grid);
//! println!("{}", plan.stats);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod cull;
mod intents;
mod labels;
mod lines;
mod plan;

pub use canvas::GridCanvas;
pub use cull::cull;
pub use intents::{bound_drag, pick_entity, snap_drop};
pub use labels::{
    COORDINATE_OPACITY, CoordinateLabel, ObjectLabel, coordinate_labels, object_labels,
};
pub use lines::{
    BOUNDARY_THICKNESS, GridPalette, INTERIOR_THICKNESS, LinePrimitive, LineRole, grid_lines,
    line_step,
};
pub use plan::{PlanStats, RenderPlan, RenderPlanner, compute_render_plan};
