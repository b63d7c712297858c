// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use gridscope_grid::{GridSpec, Viewport};

/// Discrete level-of-detail classification driving how much is drawn.
///
/// Ordered from least to most detailed, so `Low < Medium < High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PerformanceTier {
    /// Very large grids or very wide views: draw the minimum.
    Low,
    /// Large grids: suppress detail earlier.
    Medium,
    /// Normal grids: draw everything.
    High,
}

impl PerformanceTier {
    /// Lowercase name, as shown in status lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell-count thresholds separating the tiers.
///
/// A grid is `Low` when it exceeds either `low_*` threshold, otherwise
/// `Medium` when it exceeds either `medium_*` threshold, otherwise `High`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TierThresholds {
    /// Total grid cells above which the tier is `Low`.
    pub low_total_cells: u64,
    /// Viewport-spanned cells above which the tier is `Low`.
    pub low_visible_cells: f64,
    /// Total grid cells above which the tier is at most `Medium`.
    pub medium_total_cells: u64,
    /// Viewport-spanned cells above which the tier is at most `Medium`.
    pub medium_visible_cells: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low_total_cells: 500_000,
            low_visible_cells: 10_000.0,
            medium_total_cells: 100_000,
            medium_visible_cells: 2_500.0,
        }
    }
}

impl TierThresholds {
    /// Classifies `grid` as seen through `viewport`.
    ///
    /// `visible = (width / cell) * (height / cell)`; a zero-sized viewport
    /// spans no cells, leaving the grid size alone to decide. The `Low` test
    /// runs first so inputs matching both rows resolve to the more
    /// conservative tier.
    #[must_use]
    pub fn classify(&self, grid: &GridSpec, viewport: &Viewport) -> PerformanceTier {
        let total = grid.total_cells();
        let visible = visible_cells(grid, viewport);

        if total > self.low_total_cells || visible > self.low_visible_cells {
            PerformanceTier::Low
        } else if total > self.medium_total_cells || visible > self.medium_visible_cells {
            PerformanceTier::Medium
        } else {
            PerformanceTier::High
        }
    }
}

/// Classifies with the default [`TierThresholds`].
#[must_use]
pub fn classify(grid: &GridSpec, viewport: &Viewport) -> PerformanceTier {
    TierThresholds::default().classify(grid, viewport)
}

/// Number of cells (fractional) spanned by the viewport extent.
pub(crate) fn visible_cells(grid: &GridSpec, viewport: &Viewport) -> f64 {
    if !viewport.has_area() {
        return 0.0;
    }
    let cell = grid.cell_size();
    (viewport.width / cell) * (viewport.height / cell)
}
