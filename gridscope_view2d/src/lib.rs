// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridscope View 2D: pan/zoom state for the grid canvas.
//!
//! This crate provides a small, headless model of the canvas viewport:
//! - [`ViewportController`]: stage pan + uniform zoom over a
//!   [`GridSpec`](gridscope_grid::GridSpec), driven by resize, wheel, drag and
//!   selection events, and exposing the logical
//!   [`Viewport`](gridscope_grid::Viewport) the render pipeline consumes.
//! - [`DragState`]: pointer drag bookkeeping for hosts that pan from raw
//!   pointer moves instead of a scene graph's stage position.
//! - [`Debouncer`]: a host-agnostic trailing-edge debounce used to throttle
//!   the expensive derived pipeline while the viewport itself stays responsive.
//!
//! It does **not** own a scene graph, a timer, or a rendering backend.
//! Hosts feed input events in, pass monotonic timestamps to [`Debouncer`], and
//! apply the controller's pan/zoom to whatever they draw with.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridscope_grid::GridSpec;
//! use gridscope_view2d::{ViewSettings, ViewportController};
//! use kurbo::{Point, Size};
//!
//! let grid = GridSpec::new(10, 10, 50.0).unwrap();
//! let mut view = ViewportController::new(grid, ViewSettings::default());
//!
//! // The first real container size fits the grid: zoom 1.0, grid centered.
//! let state = view.on_resize(Size::new(800.0, 600.0));
//! assert_eq!(state.zoom, 1.0);
//! assert_eq!(state.viewport.x, -150.0);
//!
//! // Scrolling up zooms in about the pointer.
//! let state = view.on_wheel(Point::new(400.0, 300.0), -1.0);
//! assert!((state.zoom - 1.1).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and always clamped to [`ZoomLimits`]; zoom requests past
//!   a limit are silent no-ops.
//! - Pan is never clamped: the grid may be dragged arbitrarily far away.
//! - Screen positions are in container pixels; logical positions are in the
//!   grid's own space. `screen = logical * zoom + pan`.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod debounce;
mod drag;
mod settings;

pub use controller::{ViewState, ViewportController, ViewportDebugInfo};
pub use debounce::Debouncer;
pub use drag::DragState;
pub use settings::{ViewSettings, ZoomLimits};
