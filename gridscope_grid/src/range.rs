// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::GridSpec;

/// A half-open rectangle of grid cells: columns `start_x..end_x`, rows `start_y..end_y`.
///
/// Ranges produced by gridscope always satisfy `start <= end` on both axes;
/// an empty range (`start == end` on either axis) means nothing is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// First column (inclusive).
    pub start_x: u32,
    /// Last column (exclusive).
    pub end_x: u32,
    /// First row (inclusive).
    pub start_y: u32,
    /// Last row (exclusive).
    pub end_y: u32,
}

impl CellRange {
    /// The empty range at the grid origin.
    pub const EMPTY: Self = Self {
        start_x: 0,
        end_x: 0,
        start_y: 0,
        end_y: 0,
    };

    /// Creates a range, swapping bounds on each axis if given in reverse.
    #[must_use]
    pub fn new(start_x: u32, end_x: u32, start_y: u32, end_y: u32) -> Self {
        Self {
            start_x: start_x.min(end_x),
            end_x: start_x.max(end_x),
            start_y: start_y.min(end_y),
            end_y: start_y.max(end_y),
        }
    }

    /// The range covering every cell of `grid`.
    #[must_use]
    pub fn full(grid: &GridSpec) -> Self {
        Self::new(0, grid.cols(), 0, grid.rows())
    }

    /// Number of columns covered.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.end_x - self.start_x
    }

    /// Number of rows covered.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.end_y - self.start_y
    }

    /// Number of cells covered.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Returns `true` if the range covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_x >= self.end_x || self.start_y >= self.end_y
    }

    /// Returns `true` if bucket `(x, y)` lies inside the range.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= i64::from(self.start_x)
            && x < i64::from(self.end_x)
            && y >= i64::from(self.start_y)
            && y < i64::from(self.end_y)
    }

    /// Returns `true` if the range lies within `[0, cols] x [0, rows]`.
    #[must_use]
    pub fn is_within(&self, grid: &GridSpec) -> bool {
        self.start_x <= self.end_x
            && self.end_x <= grid.cols()
            && self.start_y <= self.end_y
            && self.end_y <= grid.rows()
    }

    /// Logical-pixel rectangle covered by the range on `grid`.
    #[must_use]
    pub fn to_logical_rect(&self, grid: &GridSpec) -> Rect {
        let p0 = grid.cell_origin(self.start_x, self.start_y);
        let p1 = grid.cell_origin(self.end_x, self.end_y);
        Rect::from_points(p0, p1)
    }
}
