// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use gridscope_grid::{CellRange, GridSpec, Viewport};

use crate::{PerformanceTier, TierThresholds, visible_range};

/// One value per [`PerformanceTier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerTier<T> {
    /// Value for [`PerformanceTier::Low`].
    pub low: T,
    /// Value for [`PerformanceTier::Medium`].
    pub medium: T,
    /// Value for [`PerformanceTier::High`].
    pub high: T,
}

impl<T> PerTier<T> {
    /// Returns the value for `tier`.
    pub fn get(&self, tier: PerformanceTier) -> &T {
        match tier {
            PerformanceTier::Low => &self.low,
            PerformanceTier::Medium => &self.medium,
            PerformanceTier::High => &self.high,
        }
    }
}

impl<T: PartialOrd> PerTier<T> {
    fn is_monotonic(&self) -> bool {
        self.low <= self.medium && self.medium <= self.high
    }
}

/// Error returned by [`LodPolicy::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// Object budgets do not satisfy `low <= medium <= high`.
    BudgetsNotMonotonic,
    /// Cell buffers do not satisfy `low <= medium <= high`.
    BuffersNotMonotonic,
    /// A `medium_*` threshold exceeds its `low_*` counterpart.
    ThresholdsInverted,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetsNotMonotonic => {
                write!(f, "object budgets must not decrease from low to high tier")
            }
            Self::BuffersNotMonotonic => {
                write!(f, "cell buffers must not decrease from low to high tier")
            }
            Self::ThresholdsInverted => {
                write!(f, "medium tier thresholds must not exceed low tier thresholds")
            }
        }
    }
}

impl core::error::Error for PolicyError {}

/// Tunable level-of-detail policy.
///
/// The default reproduces the editor's table: tier thresholds of 500k/10k
/// and 100k/2.5k cells, object budgets of 500/1000/2000, cell buffers of
/// 2/5/10, and a spatial index once more than 500 entities are present.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LodPolicy {
    /// Tier classification thresholds.
    pub thresholds: TierThresholds,
    /// `max_visible_objects` per tier.
    pub budgets: PerTier<usize>,
    /// Cells of slack added around the viewport per tier.
    pub buffers: PerTier<u32>,
    /// Entity count above which a bucket index is used for culling.
    pub index_threshold: usize,
}

impl Default for LodPolicy {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            budgets: PerTier {
                low: 500,
                medium: 1000,
                high: 2000,
            },
            buffers: PerTier {
                low: 2,
                medium: 5,
                high: 10,
            },
            index_threshold: 500,
        }
    }
}

impl LodPolicy {
    /// Checks that lower tiers are never configured to draw more than higher ones.
    ///
    /// # Errors
    ///
    /// Returns the first violated ordering.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.budgets.is_monotonic() {
            return Err(PolicyError::BudgetsNotMonotonic);
        }
        if !self.buffers.is_monotonic() {
            return Err(PolicyError::BuffersNotMonotonic);
        }
        let t = &self.thresholds;
        if t.medium_total_cells > t.low_total_cells
            || t.medium_visible_cells > t.low_visible_cells
        {
            return Err(PolicyError::ThresholdsInverted);
        }
        Ok(())
    }

    /// Classifies `grid` as seen through `viewport` using [`LodPolicy::thresholds`].
    #[must_use]
    pub fn classify(&self, grid: &GridSpec, viewport: &Viewport) -> PerformanceTier {
        self.thresholds.classify(grid, viewport)
    }

    /// Cells of slack for `tier`.
    #[must_use]
    pub fn buffer(&self, tier: PerformanceTier) -> u32 {
        *self.buffers.get(tier)
    }

    /// Visible cell range for `viewport`, padded by the buffer for `tier`.
    #[must_use]
    pub fn visible_range(
        &self,
        viewport: &Viewport,
        grid: &GridSpec,
        tier: PerformanceTier,
    ) -> CellRange {
        visible_range(viewport, grid, self.buffer(tier))
    }
}

#[cfg(test)]
mod tests {
    use super::{LodPolicy, PerTier, PolicyError};
    use crate::PerformanceTier;

    #[test]
    fn default_policy_is_valid() {
        let policy = LodPolicy::default();
        assert_eq!(policy.validate(), Ok(()));
        assert_eq!(policy.buffer(PerformanceTier::Low), 2);
        assert_eq!(policy.buffer(PerformanceTier::Medium), 5);
        assert_eq!(policy.buffer(PerformanceTier::High), 10);
    }

    #[test]
    fn rejects_policies_that_draw_more_at_lower_tiers() {
        let mut policy = LodPolicy {
            budgets: PerTier {
                low: 3000,
                medium: 1000,
                high: 2000,
            },
            ..LodPolicy::default()
        };
        assert_eq!(policy.validate(), Err(PolicyError::BudgetsNotMonotonic));

        policy = LodPolicy::default();
        policy.buffers.medium = 20;
        assert_eq!(policy.validate(), Err(PolicyError::BuffersNotMonotonic));

        policy = LodPolicy::default();
        policy.thresholds.medium_total_cells = 1_000_000;
        assert_eq!(policy.validate(), Err(PolicyError::ThresholdsInverted));
    }

    #[test]
    fn custom_budget_flows_into_render_config() {
        let mut policy = LodPolicy::default();
        policy.budgets.high = 64;
        let config = policy.resolve(PerformanceTier::High, 1.0, 50.0);
        assert_eq!(config.max_visible_objects, 64);
    }
}
