// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::RangeInclusive;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

/// Error returned when a [`GridSpec`] cannot be constructed.
#[derive(Clone, Debug, PartialEq)]
pub enum GridSpecError {
    /// The grid has no rows.
    ZeroRows,
    /// The grid has no columns.
    ZeroCols,
    /// The cell size is zero, negative, NaN or infinite.
    InvalidCellSize(f64),
    /// The grid is valid but falls outside the configured [`GridLimits`].
    OutOfLimits {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
        /// Requested cell size.
        cell_size: f64,
    },
}

impl fmt::Display for GridSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRows => write!(f, "grid must have at least one row"),
            Self::ZeroCols => write!(f, "grid must have at least one column"),
            Self::InvalidCellSize(size) => {
                write!(f, "cell size must be finite and positive, got {size}")
            }
            Self::OutOfLimits {
                rows,
                cols,
                cell_size,
            } => write!(
                f,
                "grid {cols}x{rows} with cell size {cell_size} is outside the configured limits"
            ),
        }
    }
}

impl core::error::Error for GridSpecError {}

/// Bounds the editor accepts for grid dimensions and cell size.
///
/// The defaults match the editor's toolbar: 1 to 1000 rows and columns and
/// cells between 20 and 200 logical pixels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLimits {
    /// Accepted row and column counts.
    pub grid_size: RangeInclusive<u32>,
    /// Accepted cell sizes in logical pixels.
    pub cell_size: RangeInclusive<f64>,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            grid_size: 1..=1000,
            cell_size: 20.0..=200.0,
        }
    }
}

impl GridLimits {
    /// Returns `true` if `grid` fits inside these limits.
    #[must_use]
    pub fn admits(&self, grid: &GridSpec) -> bool {
        self.grid_size.contains(&grid.rows())
            && self.grid_size.contains(&grid.cols())
            && self.cell_size.contains(&grid.cell_size())
    }
}

/// Dimensions of the editing grid.
///
/// A `GridSpec` is immutable; an explicit grid resize builds a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridSpec {
    rows: u32,
    cols: u32,
    cell_size: f64,
}

impl GridSpec {
    /// Creates a grid of `rows` by `cols` square cells of `cell_size` logical pixels.
    ///
    /// # Errors
    ///
    /// Fails if `rows` or `cols` is zero, or if `cell_size` is not a finite
    /// positive number.
    pub fn new(rows: u32, cols: u32, cell_size: f64) -> Result<Self, GridSpecError> {
        if rows == 0 {
            return Err(GridSpecError::ZeroRows);
        }
        if cols == 0 {
            return Err(GridSpecError::ZeroCols);
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridSpecError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            rows,
            cols,
            cell_size,
        })
    }

    /// Like [`GridSpec::new`], additionally checking the result against `limits`.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as [`GridSpec::new`], and with
    /// [`GridSpecError::OutOfLimits`] if the grid is valid but not admitted.
    pub fn new_within(
        rows: u32,
        cols: u32,
        cell_size: f64,
        limits: &GridLimits,
    ) -> Result<Self, GridSpecError> {
        let grid = Self::new(rows, cols, cell_size)?;
        if !limits.admits(&grid) {
            return Err(GridSpecError::OutOfLimits {
                rows,
                cols,
                cell_size,
            });
        }
        Ok(grid)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Edge length of one cell in logical pixels.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Total number of cells, `rows * cols`.
    #[must_use]
    pub fn total_cells(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Width of the whole grid in logical pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.cols) * self.cell_size
    }

    /// Height of the whole grid in logical pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.rows) * self.cell_size
    }

    /// Size of the whole grid in logical pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Logical-pixel rectangle covered by the grid, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size())
    }

    /// Bucket coordinates of a logical point: `floor(p / cell_size)` per axis.
    ///
    /// Unlike [`GridSpec::cell_of`] this is unbounded and may be negative or
    /// past the last column/row.
    #[must_use]
    pub fn bucket_of(&self, pt: Point) -> (i64, i64) {
        (
            floor_to_i64(pt.x / self.cell_size),
            floor_to_i64(pt.y / self.cell_size),
        )
    }

    /// Grid cell `(col, row)` containing `pt`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn cell_of(&self, pt: Point) -> Option<(u32, u32)> {
        let (x, y) = self.bucket_of(pt);
        let col = u32::try_from(x).ok().filter(|c| *c < self.cols)?;
        let row = u32::try_from(y).ok().filter(|r| *r < self.rows)?;
        Some((col, row))
    }

    /// Top-left corner of cell `(col, row)` in logical pixels.
    #[must_use]
    pub fn cell_origin(&self, col: u32, row: u32) -> Point {
        Point::new(
            f64::from(col) * self.cell_size,
            f64::from(row) * self.cell_size,
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            rows: u32,
            cols: u32,
            cell_size: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.rows, raw.cols, raw.cell_size).map_err(serde::de::Error::custom)
    }
}

/// Floors `v` and converts to `i64`, saturating at the `i64` range.
///
/// NaN maps to `0`.
pub(crate) fn floor_to_i64(v: f64) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; callers clamp to the grid afterwards"
    )]
    {
        v.floor() as i64
    }
}
