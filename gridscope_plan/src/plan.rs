// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use gridscope_grid::{CellRange, Entity, GridSpec, Viewport};
use gridscope_index::{BucketIndex, IndexCache};
use gridscope_lod::{LodPolicy, PerformanceTier, RenderConfig};

use crate::cull::cull;
use crate::labels::{CoordinateLabel, ObjectLabel, coordinate_labels, object_labels};
use crate::lines::{GridPalette, LinePrimitive, grid_lines};

/// Summary counters for one [`RenderPlan`].
///
/// `Display` renders the one-line status overlay, e.g.
/// `Performance: high | Visible: 14x12 | Objects: 5/100 | Zoom: 1.00`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanStats {
    /// Tier the plan was computed for.
    pub tier: PerformanceTier,
    /// Columns in the visible range.
    pub visible_cols: u32,
    /// Rows in the visible range.
    pub visible_rows: u32,
    /// Entities submitted to the renderer.
    pub shown_objects: usize,
    /// Entities in the snapshot.
    pub total_objects: usize,
    /// Zoom the plan was computed for.
    pub zoom: f64,
}

impl fmt::Display for PlanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Performance: {} | Visible: {}x{} | Objects: {}/{} | Zoom: {:.2}",
            self.tier,
            self.visible_cols,
            self.visible_rows,
            self.shown_objects,
            self.total_objects,
            self.zoom
        )
    }
}

/// Everything a backend needs to draw one frame of the grid.
///
/// All positions are logical pixels; the host applies pan and zoom.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    /// Boundary edges followed by interior lines.
    pub lines: Vec<LinePrimitive>,
    /// Sampled `(col,row)` captions.
    pub coordinates: Vec<CoordinateLabel>,
    /// Slots of the entities to draw, in draw order.
    pub visible_objects: Vec<usize>,
    /// Captions for a subset of `visible_objects`.
    pub object_labels: Vec<ObjectLabel>,
    /// Slot of the selected entity when it is among `visible_objects`.
    ///
    /// Filled by [`GridCanvas`](crate::GridCanvas); the stateless pipeline
    /// knows no selection and leaves it `None`.
    pub selected: Option<usize>,
    /// Classified tier.
    pub tier: PerformanceTier,
    /// Resolved render policy.
    pub config: RenderConfig,
    /// Visible cell range, buffer included.
    pub range: CellRange,
    /// Grid the plan was computed for.
    pub grid: GridSpec,
    /// Viewport the plan was computed for.
    pub viewport: Viewport,
    /// Zoom the plan was computed for.
    pub zoom: f64,
    /// Summary counters.
    pub stats: PlanStats,
}

/// Runs the whole pipeline once with the default [`GridPalette`].
///
/// Classification, config resolution, the visible range, line and label
/// generation and culling are all pure; pass `index` to cull through a
/// [`BucketIndex`] instead of scanning `entities`.
#[must_use]
pub fn compute_render_plan<K>(
    entities: &[Entity<K>],
    grid: &GridSpec,
    viewport: &Viewport,
    zoom: f64,
    policy: &LodPolicy,
    index: Option<&BucketIndex>,
) -> RenderPlan {
    build_plan(entities, grid, viewport, zoom, policy, index, &GridPalette::default())
}

fn build_plan<K>(
    entities: &[Entity<K>],
    grid: &GridSpec,
    viewport: &Viewport,
    zoom: f64,
    policy: &LodPolicy,
    index: Option<&BucketIndex>,
    palette: &GridPalette,
) -> RenderPlan {
    let tier = policy.classify(grid, viewport);
    let config = policy.resolve(tier, zoom, grid.cell_size());
    let range = policy.visible_range(viewport, grid, tier);

    let lines = grid_lines(&range, grid, &config, palette);
    let coordinates = coordinate_labels(&range, grid, &config);
    let visible_objects = cull(entities, &range, grid, config.max_visible_objects, index);
    let object_labels = object_labels(entities, &visible_objects, grid, &config);

    let stats = PlanStats {
        tier,
        visible_cols: range.width(),
        visible_rows: range.height(),
        shown_objects: visible_objects.len(),
        total_objects: entities.len(),
        zoom,
    };
    RenderPlan {
        lines,
        coordinates,
        visible_objects,
        object_labels,
        selected: None,
        tier,
        config,
        range,
        grid: *grid,
        viewport: *viewport,
        zoom,
        stats,
    }
}

/// Owns a [`LodPolicy`] and the [`IndexCache`] that follows the entity snapshot.
#[derive(Clone, Debug)]
pub struct RenderPlanner {
    policy: LodPolicy,
    palette: GridPalette,
    cache: IndexCache,
    last_tier: Option<PerformanceTier>,
}

impl Default for RenderPlanner {
    fn default() -> Self {
        Self::new(LodPolicy::default())
    }
}

impl RenderPlanner {
    /// Creates a planner whose index threshold comes from `policy`.
    ///
    /// `policy` should have passed [`LodPolicy::validate`]; debug builds
    /// assert it.
    #[must_use]
    pub fn new(policy: LodPolicy) -> Self {
        let validity = policy.validate();
        debug_assert!(validity.is_ok(), "invalid LOD policy: {validity:?}");
        Self {
            cache: IndexCache::new(policy.index_threshold),
            policy,
            palette: GridPalette::default(),
            last_tier: None,
        }
    }

    /// Uses `palette` for line fills.
    #[must_use]
    pub fn with_palette(mut self, palette: GridPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Active policy.
    #[must_use]
    pub fn policy(&self) -> &LodPolicy {
        &self.policy
    }

    /// Active palette.
    #[must_use]
    pub fn palette(&self) -> &GridPalette {
        &self.palette
    }

    /// The index cache, for inspection.
    #[must_use]
    pub fn index_cache(&self) -> &IndexCache {
        &self.cache
    }

    /// Drops the cached index; the next [`plan`](Self::plan) rebuilds it if needed.
    pub fn invalidate_index(&mut self) {
        self.cache.invalidate();
    }

    /// Plans a frame for the entity snapshot at `revision`.
    ///
    /// The spatial index is rebuilt only when `revision` or `grid` changed
    /// since the last call and the snapshot is large enough to warrant one.
    pub fn plan<K>(
        &mut self,
        entities: &[Entity<K>],
        revision: u64,
        grid: &GridSpec,
        viewport: &Viewport,
        zoom: f64,
    ) -> RenderPlan {
        let index = self.cache.sync(entities, revision, grid);
        let plan = build_plan(entities, grid, viewport, zoom, &self.policy, index, &self.palette);
        if self.last_tier != Some(plan.tier) {
            log::debug!(
                "performance tier {} for {}x{} grid ({} cells)",
                plan.tier,
                grid.cols(),
                grid.rows(),
                grid.total_cells()
            );
            self.last_tier = Some(plan.tier);
        }
        plan
    }
}
