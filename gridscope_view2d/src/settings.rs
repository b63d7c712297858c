// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Closed zoom range `[min, max]`.
///
/// Both bounds are finite and positive with `min <= max`; [`ZoomLimits::new`]
/// and deserialization normalize any input into that shape.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl Default for ZoomLimits {
    /// 50% to 150% of native scale.
    fn default() -> Self {
        Self { min: 0.5, max: 1.5 }
    }
}

impl ZoomLimits {
    /// Creates limits from two bounds in either order.
    ///
    /// A bound that is NaN, infinite or not positive is replaced by the
    /// corresponding default bound before ordering.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let defaults = Self::default();
        let min = usable_zoom(min).unwrap_or(defaults.min);
        let max = usable_zoom(max).unwrap_or(defaults.max);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Smallest zoom factor.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest zoom factor.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into the range. NaN maps to the lower bound.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

fn usable_zoom(v: f64) -> Option<f64> {
    (v.is_finite() && v > 0.0).then_some(v)
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ZoomLimits {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            min: f64,
            max: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.min, raw.max))
    }
}

/// Tunables for [`ViewportController`](crate::ViewportController) and the debounced pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewSettings {
    /// Allowed zoom range.
    pub zoom_limits: ZoomLimits,
    /// Factor applied per wheel notch.
    pub zoom_step: f64,
    /// Zoom applied by the fit pass.
    pub default_zoom: f64,
    /// Trailing debounce before the derived pipeline recomputes.
    pub debounce: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            zoom_step: 1.1,
            default_zoom: 1.0,
            debounce: Duration::from_millis(16),
        }
    }
}
