// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gridscope_grid::{Entity, GridSpec, Viewport};
use kurbo::{Affine, Point, Size, Vec2};

use crate::{DragState, ViewSettings};

/// The viewport and zoom reported after an input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Logical rectangle currently covered by the container.
    pub viewport: Viewport,
    /// Current uniform zoom.
    pub zoom: f64,
}

/// Pan/zoom state for a canvas showing one grid.
///
/// The controller models a stage placed inside a container of
/// [`container_size`](Self::container_size) screen pixels. The stage is
/// translated by [`pan`](Self::pan) and scaled by [`zoom`](Self::zoom), so a
/// logical point `p` lands on screen at `p * zoom + pan`. The logical
/// [`Viewport`] follows from that:
///
/// ```text
/// viewport.origin = -pan / zoom
/// viewport.size   = container / zoom
/// ```
#[derive(Clone, Debug)]
pub struct ViewportController {
    grid: GridSpec,
    settings: ViewSettings,
    container: Size,
    pan: Vec2,
    zoom: f64,
    fitted: bool,
    drag: DragState,
    logical_to_view: Affine,
    view_to_logical: Affine,
}

impl ViewportController {
    /// Creates a controller with zero container size, zero pan and the default zoom.
    ///
    /// The grid is fitted on the first [`on_resize`](Self::on_resize) that
    /// reports a non-zero container.
    #[must_use]
    pub fn new(grid: GridSpec, settings: ViewSettings) -> Self {
        let mut view = Self {
            grid,
            settings,
            container: Size::ZERO,
            pan: Vec2::ZERO,
            zoom: settings.zoom_limits.clamp(settings.default_zoom),
            fitted: false,
            drag: DragState::default(),
            logical_to_view: Affine::IDENTITY,
            view_to_logical: Affine::IDENTITY,
        };
        view.rebuild_transforms();
        view
    }

    /// Grid the controller frames.
    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Replaces the grid. Pan and zoom are kept.
    pub fn set_grid(&mut self, grid: GridSpec) {
        self.grid = grid;
    }

    /// Active settings.
    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Container size in screen pixels.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Stage position in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Current uniform zoom.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Logical rectangle covered by the container.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let origin = self.view_to_logical * Point::ORIGIN;
        Viewport::new(
            origin.x,
            origin.y,
            self.container.width / self.zoom,
            self.container.height / self.zoom,
        )
    }

    /// Current viewport and zoom together.
    #[must_use]
    pub fn state(&self) -> ViewState {
        ViewState {
            viewport: self.viewport(),
            zoom: self.zoom,
        }
    }

    /// Records a new container size.
    ///
    /// Negative or non-finite dimensions are treated as zero. The first call
    /// with a non-zero size also runs [`fit`](Self::fit); later calls keep the
    /// user's pan and zoom.
    pub fn on_resize(&mut self, size: Size) -> ViewState {
        self.container = Size::new(sanitize_extent(size.width), sanitize_extent(size.height));
        if !self.fitted && self.container.width > 0.0 && self.container.height > 0.0 {
            self.fit();
        }
        self.state()
    }

    /// Resets zoom to the default and centers the grid in the container.
    ///
    /// Along an axis where the grid is larger than the container, the grid's
    /// leading edge is aligned with the container's instead. Does nothing
    /// while the container has no area.
    pub fn fit(&mut self) {
        let Size { width, height } = self.container;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.zoom = self.settings.zoom_limits.clamp(self.settings.default_zoom);
        let extent = self.grid.size() * self.zoom;
        self.pan = Vec2::new(
            ((width - extent.width) / 2.0).max(0.0),
            ((height - extent.height) / 2.0).max(0.0),
        );
        self.fitted = true;
        self.rebuild_transforms();
        log::debug!(
            "fit {}x{} grid into {width}x{height}: zoom {}, pan ({}, {})",
            self.grid.cols(),
            self.grid.rows(),
            self.zoom,
            self.pan.x,
            self.pan.y
        );
    }

    /// Applies one wheel notch at `pointer` (screen pixels).
    ///
    /// A positive `delta` zooms out by [`ViewSettings::zoom_step`], a negative
    /// one zooms in. The logical point under the pointer stays put. Once the
    /// zoom sits at a limit, further notches in that direction change nothing.
    /// A zero or NaN `delta` is ignored.
    pub fn on_wheel(&mut self, pointer: Point, delta: f64) -> ViewState {
        let step = self.settings.zoom_step;
        let old = self.zoom;
        let target = if delta > 0.0 {
            old / step
        } else if delta < 0.0 {
            old * step
        } else {
            return self.state();
        };
        let new = self.settings.zoom_limits.clamp(target);
        if !new.is_finite() || (new - old).abs() < f64::EPSILON {
            return self.state();
        }

        let anchor = self.view_to_logical * pointer;
        self.zoom = new;
        self.pan = pointer.to_vec2() - anchor.to_vec2() * new;
        self.rebuild_transforms();
        log::trace!("wheel zoom {old} -> {new}");
        self.state()
    }

    /// Adopts a stage position reported by a drag in progress.
    ///
    /// `scale` is the stage's current scale. The stage is expected to carry
    /// the zoom this controller last produced, so it is normally already in
    /// range. A finite positive value is adopted after clamping to the zoom
    /// limits and anything else leaves the zoom alone; the returned viewport
    /// is `-stage_pos / zoom` for the adopted zoom, identical to
    /// [`viewport`](Self::viewport). Pan is never clamped.
    pub fn on_drag_move(&mut self, stage_pos: Point, scale: f64) -> Viewport {
        if scale.is_finite() && scale > 0.0 {
            self.zoom = self.settings.zoom_limits.clamp(scale);
        }
        self.pan = stage_pos.to_vec2();
        self.rebuild_transforms();
        self.viewport()
    }

    /// Starts a pointer-driven pan at `pointer` (screen pixels).
    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag.start(pointer);
    }

    /// Moves the stage by the pointer delta since the previous call.
    ///
    /// Returns `None` if no drag is in progress.
    pub fn drag_to(&mut self, pointer: Point) -> Option<Viewport> {
        let delta = self.drag.update(pointer)?;
        self.pan += delta;
        self.rebuild_transforms();
        Some(self.viewport())
    }

    /// Finishes a pointer-driven pan.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Returns `true` between [`begin_drag`](Self::begin_drag) and [`end_drag`](Self::end_drag).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Re-centers the container on `entity`'s cell, keeping the zoom.
    ///
    /// Unplaced entities leave the view untouched.
    pub fn on_select_entity<K>(&mut self, entity: &Entity<K>) -> Viewport {
        if let Some(position) = entity.position {
            let half = self.grid.cell_size() / 2.0;
            self.center_on(position + Vec2::new(half, half));
        }
        self.viewport()
    }

    /// Pans so that the logical point `target` lands on the container center.
    pub fn center_on(&mut self, target: Point) {
        let center = Vec2::new(self.container.width / 2.0, self.container.height / 2.0);
        self.pan = center - target.to_vec2() * self.zoom;
        self.rebuild_transforms();
    }

    /// Converts a screen position into logical grid coordinates.
    #[must_use]
    pub fn view_to_logical(&self, pt: Point) -> Point {
        self.view_to_logical * pt
    }

    /// Converts a logical grid position into screen coordinates.
    #[must_use]
    pub fn logical_to_view(&self, pt: Point) -> Point {
        self.logical_to_view * pt
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            container: self.container,
            viewport: self.viewport(),
            zoom: self.zoom,
            pan: self.pan,
            min_zoom: self.settings.zoom_limits.min(),
            max_zoom: self.settings.zoom_limits.max(),
            fitted: self.fitted,
            dragging: self.drag.is_dragging(),
        }
    }

    fn rebuild_transforms(&mut self) {
        self.logical_to_view = Affine::translate(self.pan) * Affine::scale(self.zoom);
        self.view_to_logical = self.logical_to_view.inverse();
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Snapshot of [`ViewportController`] state for inspection and logging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Container size in screen pixels.
    pub container: Size,
    /// Logical rectangle covered by the container.
    pub viewport: Viewport,
    /// Current zoom.
    pub zoom: f64,
    /// Stage position in screen pixels.
    pub pan: Vec2,
    /// Lower zoom limit.
    pub min_zoom: f64,
    /// Upper zoom limit.
    pub max_zoom: f64,
    /// Whether the initial fit has happened.
    pub fitted: bool,
    /// Whether a pointer-driven pan is in progress.
    pub dragging: bool,
}

#[cfg(test)]
mod tests {
    use gridscope_grid::{Entity, EntityKind, GridSpec};
    use kurbo::{Point, Size, Vec2};

    use super::ViewportController;
    use crate::{ViewSettings, ZoomLimits};

    fn controller() -> ViewportController {
        let grid = GridSpec::new(10, 10, 50.0).unwrap();
        ViewportController::new(grid, ViewSettings::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_non_zero_resize_fits_once() {
        let mut view = controller();
        let state = view.on_resize(Size::ZERO);
        assert!(!view.debug_info().fitted);
        assert_eq!(state.viewport.width, 0.0);

        view.on_resize(Size::new(800.0, 600.0));
        assert_eq!(view.pan(), Vec2::new(150.0, 50.0));
        assert!(view.debug_info().fitted);

        view.on_wheel(Point::new(0.0, 0.0), -1.0);
        let pan = view.pan();
        let zoom = view.zoom();
        let state = view.on_resize(Size::new(1024.0, 768.0));
        assert_eq!(view.pan(), pan);
        assert_eq!(state.zoom, zoom);
        assert!(approx(state.viewport.width, 1024.0 / zoom));
    }

    #[test]
    fn fit_never_pans_negative_for_large_grids() {
        let grid = GridSpec::new(100, 100, 50.0).unwrap();
        let mut view = ViewportController::new(grid, ViewSettings::default());
        view.on_resize(Size::new(800.0, 600.0));
        assert_eq!(view.pan(), Vec2::ZERO);
        assert_eq!(view.viewport().x, 0.0);
    }

    #[test]
    fn wheel_keeps_pointer_anchor_fixed() {
        let mut view = controller();
        view.on_resize(Size::new(800.0, 600.0));
        let pointer = Point::new(321.0, 123.0);
        let before = view.view_to_logical(pointer);
        view.on_wheel(pointer, -3.0);
        let after = view.view_to_logical(pointer);
        assert!(approx(before.x, after.x) && approx(before.y, after.y));
        let back = view.logical_to_view(after);
        assert!(approx(back.x, pointer.x) && approx(back.y, pointer.y));
    }

    #[test]
    fn wheel_at_limit_is_idempotent() {
        let mut view = controller();
        view.on_resize(Size::new(800.0, 600.0));
        for _ in 0..20 {
            view.on_wheel(Point::new(10.0, 10.0), -1.0);
        }
        assert_eq!(view.zoom(), 1.5);
        let pan = view.pan();
        view.on_wheel(Point::new(500.0, 400.0), -1.0);
        assert_eq!(view.pan(), pan);
        assert_eq!(view.zoom(), 1.5);
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut view = controller();
        view.on_resize(Size::new(800.0, 600.0));
        let before = view.state();
        assert_eq!(view.on_wheel(Point::new(1.0, 1.0), 0.0), before);
        assert_eq!(view.on_wheel(Point::new(1.0, 1.0), f64::NAN), before);
    }

    #[test]
    fn drag_move_derives_viewport_from_stage() {
        let mut view = controller();
        view.on_resize(Size::new(800.0, 600.0));
        let vp = view.on_drag_move(Point::new(-200.0, 100.0), 1.0);
        assert_eq!((vp.x, vp.y), (200.0, -100.0));

        let vp = view.on_drag_move(Point::new(-300.0, -150.0), 1.5);
        assert!(approx(vp.x, 200.0) && approx(vp.y, 100.0));
        assert_eq!(view.zoom(), 1.5);
    }

    #[test]
    fn drag_move_clamps_out_of_range_scale() {
        let mut view = controller();
        view.on_resize(Size::new(800.0, 600.0));
        let vp = view.on_drag_move(Point::new(-300.0, -150.0), 6.0);
        assert_eq!(view.zoom(), 1.5);
        assert!(approx(vp.x, 200.0) && approx(vp.y, 100.0));
        assert_eq!(vp, view.viewport());

        view.on_drag_move(Point::new(-300.0, -150.0), f64::NAN);
        assert_eq!(view.zoom(), 1.5);
    }

    #[test]
    fn reversed_limits_and_nan_default_zoom_stay_in_range() {
        let grid = GridSpec::new(10, 10, 50.0).unwrap();
        let settings = ViewSettings {
            zoom_limits: ZoomLimits::new(2.0, 1.0),
            default_zoom: f64::NAN,
            ..ViewSettings::default()
        };
        let mut view = ViewportController::new(grid, settings);
        assert_eq!(view.zoom(), 1.0);
        view.on_resize(Size::new(800.0, 600.0));
        assert_eq!(view.zoom(), 1.0);
        for _ in 0..20 {
            view.on_wheel(Point::new(400.0, 300.0), -1.0);
        }
        assert_eq!(view.zoom(), 2.0);
        let info = view.debug_info();
        assert_eq!((info.min_zoom, info.max_zoom), (1.0, 2.0));
    }

    #[test]
    fn pointer_drag_pans_by_delta() {
        let mut view = controller();
        view.on_resize(Size::new(800.0, 600.0));
        let pan = view.pan();
        assert!(view.drag_to(Point::new(5.0, 5.0)).is_none());

        view.begin_drag(Point::new(100.0, 100.0));
        view.drag_to(Point::new(130.0, 90.0));
        let vp = view.drag_to(Point::new(140.0, 80.0)).unwrap();
        assert_eq!(view.pan(), pan + Vec2::new(40.0, -20.0));
        assert_eq!(vp.x, -view.pan().x);
        view.end_drag();
        assert!(!view.is_dragging());
    }

    #[test]
    fn select_centers_entity_cell() {
        let mut view = controller();
        view.on_resize(Size::new(800.0, 600.0));
        view.on_wheel(Point::new(0.0, 0.0), 1.0);
        let zoom = view.zoom();

        let bot = Entity::placed(1_u32, EntityKind::Bot, Point::new(200.0, 300.0));
        view.on_select_entity(&bot);
        let screen = view.logical_to_view(Point::new(225.0, 325.0));
        assert!(approx(screen.x, 400.0) && approx(screen.y, 300.0));
        assert_eq!(view.zoom(), zoom);

        let pan = view.pan();
        view.on_select_entity(&Entity::unplaced(2_u32, EntityKind::Station));
        assert_eq!(view.pan(), pan);
    }
}
