// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: compute movement deltas from successive pointer positions.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`] at the pointer-down position.
//! 2) On each pointer move, [`DragState::update`] returns the delta since the last update.
//! 3) [`DragState::total_offset`] gives the cumulative offset from the start.
//! 4) [`DragState::end`] resets the state.
//!
//! ```
//! use gridscope_view2d::DragState;
//! use kurbo::Point;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//! drag.end();
//! assert!(drag.update(Point::new(0.0, 0.0)).is_none());
//! ```

use kurbo::{Point, Vec2};

/// Tracks an in-progress pointer drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DragState {
    /// Start tracking a drag from `pos`.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a new pointer position, returning the delta since the previous one.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Offset of `current` from the drag start.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current - start)
    }

    /// End the drag and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
