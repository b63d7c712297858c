// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate and entity label placement.

use alloc::vec::Vec;
use core::fmt;

use gridscope_grid::{CellRange, Entity, GridSpec};
use gridscope_lod::RenderConfig;
use kurbo::{Point, Vec2};

/// Inset of a coordinate label from its cell's top-left corner.
const COORDINATE_INSET: f64 = 5.0;

/// Opacity of coordinate labels.
pub const COORDINATE_OPACITY: f64 = 0.7;

/// A `(col,row)` caption in the top-left corner of a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateLabel {
    /// Column of the labelled cell.
    pub col: u32,
    /// Row of the labelled cell.
    pub row: u32,
    /// Logical-pixel text origin.
    pub position: Point,
    /// Font size in logical pixels.
    pub font_size: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl fmt::Display for CoordinateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Samples every `config.coordinate_step`-th column and row of `range`.
///
/// Columns are the outer loop. Empty unless `config.show_coordinates`.
#[must_use]
pub fn coordinate_labels(
    range: &CellRange,
    grid: &GridSpec,
    config: &RenderConfig,
) -> Vec<CoordinateLabel> {
    if !config.show_coordinates || range.is_empty() {
        return Vec::new();
    }
    let cell = grid.cell_size();
    let font_size = (cell / 4.0).min(10.0);
    let step = config.coordinate_step.max(1) as usize;
    let mut out = Vec::new();
    for col in (range.start_x..range.end_x).step_by(step) {
        for row in (range.start_y..range.end_y).step_by(step) {
            out.push(CoordinateLabel {
                col,
                row,
                position: grid.cell_origin(col, row) + Vec2::new(COORDINATE_INSET, COORDINATE_INSET),
                font_size,
                opacity: COORDINATE_OPACITY,
            });
        }
    }
    out
}

/// An id caption centered over an entity's cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectLabel {
    /// Slot of the labelled entity in the snapshot.
    pub slot: usize,
    /// Logical-pixel anchor; hosts center the text on it.
    pub anchor: Point,
    /// Font size in logical pixels.
    pub font_size: f64,
}

impl ObjectLabel {
    /// The labelled entity, if `slot` is valid for `entities`.
    #[must_use]
    pub fn entity<'a, K>(&self, entities: &'a [Entity<K>]) -> Option<&'a Entity<K>> {
        entities.get(self.slot)
    }
}

/// Labels for the culled `visible` slots. Empty unless `config.show_object_labels`.
#[must_use]
pub fn object_labels<K>(
    entities: &[Entity<K>],
    visible: &[usize],
    grid: &GridSpec,
    config: &RenderConfig,
) -> Vec<ObjectLabel> {
    if !config.show_object_labels {
        return Vec::new();
    }
    let cell = grid.cell_size();
    let font_size = (cell / 4.0).clamp(8.0, 12.0);
    let offset = Vec2::new(cell / 2.0, cell * 0.3);
    visible
        .iter()
        .filter_map(|&slot| {
            let position = entities.get(slot)?.position?;
            Some(ObjectLabel {
                slot,
                anchor: position + offset,
                font_size,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use gridscope_grid::{CellRange, Entity, EntityKind, GridSpec};
    use gridscope_lod::{PerformanceTier, resolve_render_config};
    use kurbo::Point;

    use super::{coordinate_labels, object_labels};

    #[test]
    fn coordinates_are_sampled_and_inset() {
        let grid = GridSpec::new(10, 10, 60.0).unwrap();
        let config = resolve_render_config(PerformanceTier::High, 1.0, 60.0);
        assert_eq!(config.coordinate_step, 2);
        let labels = coordinate_labels(&CellRange::new(1, 6, 0, 3), &grid, &config);
        let cells: Vec<_> = labels.iter().map(|l| (l.col, l.row)).collect();
        assert_eq!(cells, [(1, 0), (1, 2), (3, 0), (3, 2), (5, 0), (5, 2)]);
        assert_eq!(labels[0].position, Point::new(65.0, 5.0));
        assert_eq!(labels[0].font_size, 10.0);
        assert_eq!(labels[3].to_string(), "(3,2)");
    }

    #[test]
    fn coordinates_respect_config() {
        let grid = GridSpec::new(10, 10, 20.0).unwrap();
        let config = resolve_render_config(PerformanceTier::High, 1.0, 20.0);
        assert!(!config.show_coordinates);
        assert!(coordinate_labels(&CellRange::full(&grid), &grid, &config).is_empty());
    }

    #[test]
    fn object_labels_follow_visible_slots() {
        let grid = GridSpec::new(10, 10, 20.0).unwrap();
        let entities = [
            Entity::placed('a', EntityKind::Bot, Point::new(40.0, 60.0)),
            Entity::unplaced('b', EntityKind::Station),
        ];
        let mut config = resolve_render_config(PerformanceTier::High, 1.0, 20.0);
        let labels = object_labels(&entities, &[0, 1], &grid, &config);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].anchor, Point::new(50.0, 66.0));
        assert_eq!(labels[0].font_size, 8.0);
        assert_eq!(labels[0].entity(&entities).map(|e| e.id), Some('a'));

        config.show_object_labels = false;
        assert!(object_labels(&entities, &[0], &grid, &config).is_empty());
    }
}
