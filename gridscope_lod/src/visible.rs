// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use gridscope_grid::{CellRange, GridSpec, Viewport};

use crate::{LodPolicy, PerformanceTier};

/// Cells of slack around the viewport for `tier` under the default policy.
///
/// `Low` keeps 2 cells, `Medium` 5 and `High` 10.
#[must_use]
pub fn buffer_for_tier(tier: PerformanceTier) -> u32 {
    LodPolicy::default().buffer(tier)
}

/// Converts `viewport` into the half-open cell rectangle worth rendering.
///
/// ```text
/// start_x = max(0, floor(x / cell) - buffer)
/// end_x   = min(cols, ceil((x + width) / cell) + buffer)
/// ```
///
/// and likewise for rows. Starts are clamped to their ends, so the result is
/// always a valid (possibly empty) subrange of `[0, cols] x [0, rows]`, even
/// when the viewport has been panned entirely off the grid. A zero-sized or
/// non-finite viewport yields [`CellRange::EMPTY`].
#[must_use]
pub fn visible_range(viewport: &Viewport, grid: &GridSpec, buffer: u32) -> CellRange {
    if !viewport.has_area() {
        return CellRange::EMPTY;
    }
    let cell = grid.cell_size();
    let (start_x, end_x) = axis_span(viewport.x, viewport.width, cell, buffer, grid.cols());
    let (start_y, end_y) = axis_span(viewport.y, viewport.height, cell, buffer, grid.rows());
    CellRange {
        start_x,
        end_x,
        start_y,
        end_y,
    }
}

fn axis_span(origin: f64, extent: f64, cell: f64, buffer: u32, limit: u32) -> (u32, u32) {
    let buffer = i64::from(buffer);
    let start = to_i64((origin / cell).floor()).saturating_sub(buffer);
    let end = to_i64(((origin + extent) / cell).ceil()).saturating_add(buffer);
    let end = clamp_to(end, limit);
    let start = clamp_to(start, limit).min(end);
    (start, end)
}

fn to_i64(v: f64) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; the result is clamped to the grid"
    )]
    {
        v as i64
    }
}

fn clamp_to(v: i64, limit: u32) -> u32 {
    u32::try_from(v.clamp(0, i64::from(limit))).unwrap_or(limit)
}
