// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{LodPolicy, PerformanceTier};

/// Concrete rendering policy for one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Draw interior grid lines.
    pub show_grid: bool,
    /// Draw `(col,row)` coordinate labels.
    pub show_coordinates: bool,
    /// Draw an id label over each visible entity.
    pub show_object_labels: bool,
    /// Base opacity of grid lines, in `[0, 1]`.
    pub grid_line_opacity: f64,
    /// Label every `coordinate_step`-th column and row (at least 1).
    pub coordinate_step: u32,
    /// Hard cap on entities submitted to the renderer.
    pub max_visible_objects: usize,
}

impl RenderConfig {
    /// Base opacity used by the `High` tier.
    pub const DEFAULT_GRID_LINE_OPACITY: f64 = 0.5;
}

impl LodPolicy {
    /// Resolves the render policy for `tier` at `zoom` and `cell_size`.
    ///
    /// Denser tiers suppress labels at smaller zoom/cell-size thresholds and
    /// sample coordinates more coarsely; `max_visible_objects` comes from
    /// [`LodPolicy::budgets`].
    #[must_use]
    pub fn resolve(&self, tier: PerformanceTier, zoom: f64, cell_size: f64) -> RenderConfig {
        let max_visible_objects = *self.budgets.get(tier);
        match tier {
            PerformanceTier::Low => RenderConfig {
                show_grid: zoom > 0.5,
                show_coordinates: zoom > 1.0 && cell_size > 50.0,
                show_object_labels: zoom > 0.8,
                grid_line_opacity: unit(0.3_f64.min(zoom * 0.6)),
                coordinate_step: floor_div_at_least(100.0, cell_size, 10),
                max_visible_objects,
            },
            PerformanceTier::Medium => RenderConfig {
                show_grid: zoom > 0.3,
                show_coordinates: zoom > 0.7 && cell_size > 35.0,
                show_object_labels: zoom > 0.5,
                grid_line_opacity: unit(0.4_f64.min(zoom)),
                coordinate_step: floor_div_at_least(50.0, cell_size, 5),
                max_visible_objects,
            },
            PerformanceTier::High => RenderConfig {
                show_grid: true,
                show_coordinates: cell_size > 25.0 && zoom > 0.3,
                show_object_labels: true,
                grid_line_opacity: RenderConfig::DEFAULT_GRID_LINE_OPACITY,
                coordinate_step: if cell_size < 40.0 { 5 } else { 2 },
                max_visible_objects,
            },
        }
    }
}

/// Resolves with the default [`LodPolicy`].
#[must_use]
pub fn resolve_render_config(tier: PerformanceTier, zoom: f64, cell_size: f64) -> RenderConfig {
    LodPolicy::default().resolve(tier, zoom, cell_size)
}

/// `max(min, floor(numerator / cell_size))`, saturating into `u32`.
fn floor_div_at_least(numerator: f64, cell_size: f64, min: u32) -> u32 {
    let q = (numerator / cell_size).floor();
    if q.is_nan() || q <= f64::from(min) {
        return min;
    }
    if q >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "q is a finite integer-valued float checked to lie in (min, u32::MAX)"
    )]
    {
        q as u32
    }
}

fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
