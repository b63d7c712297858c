// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use gridscope_grid::{Entity, GridSpec};
use gridscope_lod::LodPolicy;
use gridscope_view2d::{Debouncer, ViewSettings, ViewState, ViewportController};
use kurbo::{Point, Size};

use crate::{RenderPlan, RenderPlanner};

/// A virtualized grid canvas: viewport state, debounced planning and the latest plan.
///
/// Input events update the [`ViewportController`] immediately and schedule a
/// replan after [`ViewSettings::debounce`] of quiet. The host calls
/// [`tick`](Self::tick) from its frame loop with the current entity snapshot;
/// a new plan is produced once the debounce elapses, whenever the snapshot
/// revision changes, and whenever the controller moved with no replan pending.
/// Plans are always computed from the controller's current state.
///
/// `K` is the entity id type; the canvas remembers the selected id and marks
/// it in [`RenderPlan::selected`] while it is visible.
#[derive(Debug)]
pub struct GridCanvas<K> {
    view: ViewportController,
    planner: RenderPlanner,
    debounce: Debouncer<()>,
    plan: Option<RenderPlan>,
    plan_revision: Option<u64>,
    selected: Option<K>,
}

impl<K: Clone + PartialEq> GridCanvas<K> {
    /// Creates a canvas over `grid` with default settings and policy.
    #[must_use]
    pub fn new(grid: GridSpec) -> Self {
        Self::with_config(grid, ViewSettings::default(), LodPolicy::default())
    }

    /// Creates a canvas with explicit view settings and LOD policy.
    #[must_use]
    pub fn with_config(grid: GridSpec, settings: ViewSettings, policy: LodPolicy) -> Self {
        Self {
            view: ViewportController::new(grid, settings),
            planner: RenderPlanner::new(policy),
            debounce: Debouncer::new(settings.debounce),
            plan: None,
            plan_revision: None,
            selected: None,
        }
    }

    /// The viewport controller.
    #[must_use]
    pub fn view(&self) -> &ViewportController {
        &self.view
    }

    /// Mutable access to the viewport controller.
    ///
    /// Changes made through it are not debounced: the next [`tick`](Self::tick)
    /// replans unless an input-driven replan is already pending, in which
    /// case that one picks them up.
    pub fn view_mut(&mut self) -> &mut ViewportController {
        &mut self.view
    }

    /// The render planner.
    #[must_use]
    pub fn planner(&self) -> &RenderPlanner {
        &self.planner
    }

    /// Grid being displayed.
    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        self.view.grid()
    }

    /// Id of the entity last passed to [`on_select_entity`](Self::on_select_entity).
    #[must_use]
    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// Most recent plan, if any has been computed.
    #[must_use]
    pub fn latest_plan(&self) -> Option<&RenderPlan> {
        self.plan.as_ref()
    }

    /// Returns `true` when the latest plan no longer matches the viewport,
    /// zoom or grid, or when no plan exists yet.
    #[must_use]
    pub fn is_plan_stale(&self) -> bool {
        self.plan.as_ref().is_none_or(|plan| {
            plan.viewport != self.view.viewport()
                || plan.zoom != self.view.zoom()
                || plan.grid != *self.view.grid()
        })
    }

    /// When the host should call [`tick`](Self::tick) next, if a replan is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debounce.next_deadline()
    }

    /// Container resized.
    pub fn on_resize(&mut self, size: Size, now: Duration) -> ViewState {
        let state = self.view.on_resize(size);
        self.debounce.schedule((), now);
        state
    }

    /// Wheel notch at `pointer` (screen pixels).
    pub fn on_wheel(&mut self, pointer: Point, delta: f64, now: Duration) -> ViewState {
        let state = self.view.on_wheel(pointer, delta);
        self.debounce.schedule((), now);
        state
    }

    /// Stage dragged to `stage_pos` at `scale`.
    pub fn on_drag_move(&mut self, stage_pos: Point, scale: f64, now: Duration) -> ViewState {
        self.view.on_drag_move(stage_pos, scale);
        self.debounce.schedule((), now);
        self.view.state()
    }

    /// Selection changed: remember it and center the view on it if placed.
    pub fn on_select_entity(&mut self, entity: &Entity<K>, now: Duration) -> ViewState {
        self.selected = Some(entity.id.clone());
        self.view.on_select_entity(entity);
        self.debounce.schedule((), now);
        self.view.state()
    }

    /// Clears the remembered selection and its mark in the latest plan.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        if let Some(plan) = &mut self.plan {
            plan.selected = None;
        }
    }

    /// Switches to a new grid. Pan and zoom are kept; the spatial index is dropped.
    pub fn set_grid(&mut self, grid: GridSpec, now: Duration) {
        if *self.view.grid() == grid {
            return;
        }
        self.view.set_grid(grid);
        self.planner.invalidate_index();
        self.debounce.schedule((), now);
    }

    /// Runs the pipeline if the debounce elapsed, the snapshot changed, or
    /// the latest plan is stale with nothing pending.
    ///
    /// Returns the new plan when one was computed, `None` otherwise.
    pub fn tick(
        &mut self,
        now: Duration,
        entities: &[Entity<K>],
        revision: u64,
    ) -> Option<&RenderPlan> {
        let fired = self.debounce.poll(now).is_some();
        let revised = self.plan.is_some() && self.plan_revision != Some(revision);
        let drifted = self.plan.is_some() && !self.debounce.is_pending() && self.is_plan_stale();
        if !(fired || revised || drifted) {
            return None;
        }
        Some(self.replan(entities, revision))
    }

    /// Runs the pipeline now with the current viewport, dropping any pending replan.
    pub fn plan_now(&mut self, entities: &[Entity<K>], revision: u64) -> &RenderPlan {
        self.debounce.cancel();
        self.replan(entities, revision)
    }

    fn replan(&mut self, entities: &[Entity<K>], revision: u64) -> &RenderPlan {
        let grid = *self.view.grid();
        let state = self.view.state();
        let mut plan = self
            .planner
            .plan(entities, revision, &grid, &state.viewport, state.zoom);
        plan.selected = self.selected.as_ref().and_then(|id| {
            plan.visible_objects
                .iter()
                .copied()
                .find(|&slot| entities.get(slot).is_some_and(|e| e.id == *id))
        });
        self.plan_revision = Some(revision);
        self.plan.insert(plan)
    }
}
