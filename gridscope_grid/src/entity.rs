// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// What an [`Entity`] represents on the warehouse floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[non_exhaustive]
pub enum EntityKind {
    /// A mobile robot.
    Bot,
    /// A pick/put station.
    Station,
    /// A mobile storage unit carried by bots.
    TransportUnit,
}

/// An item placed on (or waiting to be placed on) the grid.
///
/// Entities are owned by the host's data store. Gridscope only reads them
/// each pass and refers to them by their slot (index) in the slice it was
/// given.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity<K> {
    /// Host identifier, opaque to gridscope.
    pub id: K,
    /// Entity kind.
    pub kind: EntityKind,
    /// Top-left corner in logical pixels (`col * cell_size`), or `None` if unplaced.
    pub position: Option<Point>,
}

impl<K> Entity<K> {
    /// Creates an entity at `position`.
    pub fn placed(id: K, kind: EntityKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position: Some(position),
        }
    }

    /// Creates an entity without a spatial placement.
    pub fn unplaced(id: K, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            position: None,
        }
    }

    /// Builds an entity from nullable coordinates, as delivered by the data store.
    ///
    /// The entity is only placed when both coordinates are present and finite.
    pub fn from_coords(id: K, kind: EntityKind, x: Option<f64>, y: Option<f64>) -> Self {
        let position = match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Point::new(x, y)),
            _ => None,
        };
        Self { id, kind, position }
    }

    /// Returns `true` if the entity has a spatial placement.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}
