// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Logical-pixel window onto the grid: top-left corner and extent.
///
/// Hosts report a zero size until their container has been laid out. Every
/// gridscope computation treats a zero-sized (or non-finite) viewport as
/// "nothing visible yet" rather than as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Left edge in logical pixels.
    pub x: f64,
    /// Top edge in logical pixels.
    pub y: f64,
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport from its top-left corner and extent.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a viewport from a logical-pixel rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extent.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Logical-pixel rectangle covered by the viewport.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Returns `true` if the viewport has a positive, finite extent and a finite origin.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn zero_sized_viewport_has_no_area() {
        assert!(!Viewport::default().has_area());
        assert!(!Viewport::new(0.0, 0.0, 800.0, 0.0).has_area());
        assert!(!Viewport::new(f64::NAN, 0.0, 800.0, 600.0).has_area());
        assert!(Viewport::new(-40.0, 10.0, 800.0, 600.0).has_area());
    }
}
