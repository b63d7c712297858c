// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid line primitives for the visible cell range.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use gridscope_grid::{CellRange, GridSpec};
use gridscope_lod::RenderConfig;
use kurbo::Rect;
use peniko::Color;

/// Thickness of the outer boundary, in logical pixels.
pub const BOUNDARY_THICKNESS: f64 = 2.0;

/// Thickness of interior lines, in logical pixels.
pub const INTERIOR_THICKNESS: f64 = 1.0;

/// What a [`LinePrimitive`] outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineRole {
    /// One of the four edges of the whole grid.
    Boundary,
    /// An interior column separator.
    Vertical,
    /// An interior row separator.
    Horizontal,
}

/// Fill colors for grid primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPalette {
    /// Outer boundary fill.
    pub boundary: Color,
    /// Interior line fill.
    pub interior: Color,
    /// Coordinate label text fill.
    pub coordinate_text: Color,
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            boundary: Color::from_rgb8(0x33, 0x33, 0x33),
            interior: Color::from_rgb8(0x80, 0x80, 0x80),
            coordinate_text: Color::from_rgb8(0xd3, 0xd3, 0xd3),
        }
    }
}

/// A filled axis-aligned rectangle standing in for a stroked line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePrimitive {
    /// Logical-pixel rectangle to fill.
    pub rect: Rect,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Fill color.
    pub fill: Color,
    /// What the line outlines.
    pub role: LineRole,
}

/// Sampling stride for interior lines: every line at 10 px cells and up,
/// sparser below so lines stay roughly 50 px apart.
#[must_use]
pub fn line_step(cell_size: f64) -> u32 {
    if cell_size < 10.0 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "cell sizes below 10 give quotients far inside u32"
        )]
        let step = (50.0 / cell_size).floor() as u32;
        step.max(5)
    } else {
        1
    }
}

/// Builds line primitives for `range`.
///
/// The four boundary edges of the whole grid are always emitted first, in
/// left, right, top, bottom order. Interior lines follow only when
/// `config.show_grid` is set, cells are at least 5 px and the base opacity
/// exceeds 0.2. Interior lines lying on the grid's outer edges are left to
/// the boundary.
#[must_use]
pub fn grid_lines(
    range: &CellRange,
    grid: &GridSpec,
    config: &RenderConfig,
    palette: &GridPalette,
) -> Vec<LinePrimitive> {
    let (w, h) = (grid.width(), grid.height());
    let t = BOUNDARY_THICKNESS;
    let boundary_opacity = (config.grid_line_opacity * 2.0).min(1.0);
    let boundary = |rect| LinePrimitive {
        rect,
        opacity: boundary_opacity,
        fill: palette.boundary,
        role: LineRole::Boundary,
    };
    let mut lines = Vec::from([
        boundary(Rect::new(0.0, 0.0, t, h)),
        boundary(Rect::new(w - t, 0.0, w, h)),
        boundary(Rect::new(0.0, 0.0, w, t)),
        boundary(Rect::new(0.0, h - t, w, h)),
    ]);

    let cell = grid.cell_size();
    if !config.show_grid || cell < 5.0 || config.grid_line_opacity <= 0.2 || range.is_empty() {
        return lines;
    }

    let opacity = config.grid_line_opacity * 0.4;
    let step = line_step(cell) as usize;
    let y0 = f64::from(range.start_y) * cell;
    let y1 = f64::from(range.end_y) * cell;
    let x0 = f64::from(range.start_x) * cell;
    let x1 = f64::from(range.end_x) * cell;

    for i in (range.start_x..=range.end_x).step_by(step) {
        if i == 0 || i == grid.cols() {
            continue;
        }
        let x = f64::from(i) * cell;
        lines.push(LinePrimitive {
            rect: Rect::new(x, y0, x + INTERIOR_THICKNESS, y1),
            opacity,
            fill: palette.interior,
            role: LineRole::Vertical,
        });
    }
    for j in (range.start_y..=range.end_y).step_by(step) {
        if j == 0 || j == grid.rows() {
            continue;
        }
        let y = f64::from(j) * cell;
        lines.push(LinePrimitive {
            rect: Rect::new(x0, y, x1, y + INTERIOR_THICKNESS),
            opacity,
            fill: palette.interior,
            role: LineRole::Horizontal,
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use gridscope_grid::{CellRange, GridSpec};
    use gridscope_lod::{PerformanceTier, RenderConfig, resolve_render_config};

    use super::{GridPalette, LineRole, grid_lines, line_step};

    fn high_config(cell: f64) -> RenderConfig {
        resolve_render_config(PerformanceTier::High, 1.0, cell)
    }

    #[test]
    fn boundary_edges_come_first() {
        let grid = GridSpec::new(4, 6, 50.0).unwrap();
        let lines = grid_lines(
            &CellRange::full(&grid),
            &grid,
            &high_config(50.0),
            &GridPalette::default(),
        );
        let edges: Vec<_> = lines[..4].iter().map(|l| l.rect).collect();
        assert_eq!(edges[0].x0, 0.0);
        assert_eq!(edges[1].x1, 300.0);
        assert_eq!(edges[2].y0, 0.0);
        assert_eq!(edges[3].y1, 200.0);
        assert!(lines[..4].iter().all(|l| l.role == LineRole::Boundary));
        assert!(lines[..4].iter().all(|l| (l.opacity - 1.0).abs() < 1e-12));
    }

    #[test]
    fn interior_skips_outer_edges() {
        let grid = GridSpec::new(4, 6, 50.0).unwrap();
        let lines = grid_lines(
            &CellRange::full(&grid),
            &grid,
            &high_config(50.0),
            &GridPalette::default(),
        );
        let vertical = lines.iter().filter(|l| l.role == LineRole::Vertical).count();
        let horizontal = lines.iter().filter(|l| l.role == LineRole::Horizontal).count();
        assert_eq!(vertical, 5);
        assert_eq!(horizontal, 3);
        let interior = &lines[4];
        assert!((interior.opacity - 0.2).abs() < 1e-12);
        assert_eq!(interior.rect.width(), 1.0);
    }

    #[test]
    fn hidden_grid_keeps_only_boundary() {
        let grid = GridSpec::new(4, 6, 50.0).unwrap();
        let mut config = high_config(50.0);
        config.show_grid = false;
        let lines = grid_lines(&CellRange::full(&grid), &grid, &config, &GridPalette::default());
        assert_eq!(lines.len(), 4);

        let lines = grid_lines(&CellRange::EMPTY, &grid, &high_config(50.0), &GridPalette::default());
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn tiny_cells_are_downsampled() {
        assert_eq!(line_step(50.0), 1);
        assert_eq!(line_step(10.0), 1);
        assert_eq!(line_step(9.0), 5);
        assert_eq!(line_step(5.0), 10);
        assert_eq!(line_step(2.0), 25);

        let grid = GridSpec::new(100, 100, 5.0).unwrap();
        let range = CellRange::new(0, 100, 0, 100);
        let lines = grid_lines(&range, &grid, &high_config(5.0), &GridPalette::default());
        // Columns 10, 20, ..., 90 on each axis.
        assert_eq!(lines.len(), 4 + 9 + 9);
    }
}
