// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom, pan, rotate and flip operations of [`ViewportController`].
//!
//! Every operation follows the same pattern: change one component of the
//! live [`ViewTransform`], then re-derive the offset so that a chosen desktop
//! point lands on a chosen window point. "Keep point" variants pin the anchor
//! where it currently is on screen; "center point" variants move the anchor
//! to the middle of the window.

use alloc::string::ToString;

use kurbo::{Point, Rect, Vec2};
use vantage_view::{DisplayQuad, FlipAxes, HistoryError, ViewTransform};

use crate::ViewportController;
use crate::canvas::MessageLevel;
use crate::tool::NodeSelection;

impl ViewportController {
    // --- Display area ---------------------------------------------------

    /// Fits desktop rectangle `rect` into the window, leaving `border`
    /// window pixels free on each side, and centers it.
    ///
    /// The smaller of the horizontal and vertical scales wins so the whole
    /// rectangle is visible; the result is clamped to the zoom limits.
    /// Rotation and flip are kept. Nothing happens while the window has no
    /// area.
    pub fn set_display_area(&mut self, rect: Rect, border: f64, log: bool) {
        let window = self.window_rect();
        let rect = rect.abs();
        if window.area() <= 0.0 || !rect.is_finite() {
            return;
        }
        let target = fit_target(window, border);
        let zoom = if rect.width() * target.height() > rect.height() * target.width() {
            target.width() / rect.width()
        } else {
            target.height() / rect.height()
        };
        let zoom = self.config.zoom_limits.clamp(zoom);

        self.view.set_scale(zoom, self.yaxisdir());
        self.view.set_offset(Vec2::ZERO);
        self.set_display_area_point(rect.center(), target.center(), log);
    }

    /// Shifts the view so that desktop point `c` is shown at window point `w`.
    pub fn set_display_area_point(&mut self, c: Point, w: Point, log: bool) {
        let delta = self.view.d2w_point(c) - w;
        self.view.add_offset(delta);
        self.present_view(log);
    }

    /// Replaces the whole view transform.
    pub fn set_display_transform(&mut self, transform: ViewTransform, log: bool) {
        self.view = transform;
        self.present_view(log);
    }

    /// Moves desktop point `c` to the window center.
    pub fn set_display_center(&mut self, c: Point) {
        let mid = self.window_rect().center();
        self.set_display_area_point(c, mid, true);
    }

    /// Zooms so that `width` desktop units span the window (minus `border`),
    /// keeping the current center. Widths below one unit are ignored.
    pub fn set_display_width(&mut self, width: f64, border: f64) {
        let window = self.window_rect();
        if !(width >= 1.0) || window.area() <= 0.0 {
            return;
        }
        let target = fit_target(window, border);
        let zoom = self.config.zoom_limits.clamp(target.width() / width);
        let center = self.current_center();
        self.view.set_scale(zoom, self.yaxisdir());
        self.set_display_area_point(center, target.center(), true);
    }

    /// The visible window as a desktop-space quadrilateral.
    #[must_use]
    pub fn get_display_area(&self) -> DisplayQuad {
        DisplayQuad::from_rect(self.window_rect(), self.view.w2d())
    }

    /// Bounding box of [`ViewportController::get_display_area`].
    #[must_use]
    pub fn visible_area(&self) -> Rect {
        self.get_display_area().bounds()
    }

    /// Desktop point at the window center.
    #[must_use]
    pub fn current_center(&self) -> Point {
        self.w2d(self.window_rect().center())
    }

    // --- Zoom -----------------------------------------------------------

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.view.zoom()
    }

    /// Sets the zoom to `zoom` (clamped).
    ///
    /// With `keep_point` the desktop point `center` stays where it is on
    /// screen; otherwise it is moved to the window center.
    pub fn zoom_absolute(&mut self, center: Point, zoom: f64, keep_point: bool) {
        self.zoom_to(center, zoom, keep_point, true);
    }

    /// Multiplies the zoom by `factor` (the result is clamped).
    pub fn zoom_relative(&mut self, center: Point, factor: f64, keep_point: bool) {
        let zoom = self.view.zoom() * factor;
        self.zoom_to(center, zoom, keep_point, true);
    }

    /// One zoom step in, keeping `center` in place.
    pub fn zoom_in(&mut self, center: Point) {
        self.zoom_relative(center, self.config.zoom_increment, true);
    }

    /// One zoom step out, keeping `center` in place.
    pub fn zoom_out(&mut self, center: Point) {
        self.zoom_relative(center, self.config.zoom_increment.recip(), true);
    }

    fn zoom_to(&mut self, center: Point, zoom: f64, keep_point: bool, log: bool) {
        let zoom = self.config.zoom_limits.clamp(zoom);
        let ydir = self.yaxisdir();
        self.reorient(center, keep_point, log, |view| view.set_scale(zoom, ydir));
    }

    /// Fits the whole drawing. Returns `false` (leaving the view alone) when
    /// the drawing has no bounds or is thinner than `min_fit_extent`.
    pub fn zoom_drawing(&mut self) -> bool {
        let bounds = self.document().visual_bounds();
        self.fit_bounds(bounds)
    }

    /// Fits the selection. Returns `false` (leaving the view alone) when
    /// nothing with bounds is selected or the bounds are thinner than
    /// `min_fit_extent`.
    pub fn zoom_selection(&mut self) -> bool {
        let bounds = self.selection_visual_bounds();
        self.fit_bounds(bounds)
    }

    /// Fits the page. Pages narrower than one unit are ignored.
    pub fn zoom_page(&mut self) -> bool {
        let page = self.document().page_area().abs();
        if page.width().min(page.height()) < 1.0 {
            return false;
        }
        self.set_display_area(page, self.config.fit_border, true);
        true
    }

    /// Fits the page width, keeping the current vertical center.
    pub fn zoom_page_width(&mut self) -> bool {
        let page = self.document().page_area().abs();
        if page.width() < 1.0 {
            return false;
        }
        let y = self.current_center().y;
        let band = Rect::new(page.x0, y, page.x1, y);
        self.set_display_area(band, self.config.fit_border, true);
        true
    }

    /// Centers the page without changing the zoom.
    pub fn zoom_center_page(&mut self) {
        let center = self.document().page_area().center();
        self.set_display_center(center);
    }

    fn fit_bounds(&mut self, bounds: Option<Rect>) -> bool {
        let Some(bounds) = bounds.map(|b| b.abs()) else {
            return false;
        };
        if bounds.width().min(bounds.height()) < self.config.min_fit_extent {
            tracing::debug!(?bounds, "bounds too thin to fit");
            return false;
        }
        self.set_display_area(bounds, self.config.fit_border, true);
        true
    }

    /// Toggles quick zoom.
    ///
    /// Enabling saves the current view and then fits, in order of preference,
    /// the active tool's selected nodes (if they span an area), the selection,
    /// or zooms in around the window center. Disabling restores the saved view
    /// exactly. Calls that do not change the state are ignored. Quick zoom
    /// views are not logged to history.
    pub fn zoom_quick(&mut self, enable: bool) {
        if enable == self.quick_zoom.is_some() {
            return;
        }
        if !enable {
            if let Some(saved) = self.quick_zoom.take() {
                self.set_display_transform(self.in_current_axis(saved), false);
            }
            return;
        }

        self.quick_zoom = Some(self.view);
        let nodes = self
            .tool()
            .and_then(|tool| tool.node_selection())
            .and_then(NodeSelection::bounds)
            .filter(|b| b.area() > f64::EPSILON);
        match nodes.or_else(|| self.selection_visual_bounds()) {
            Some(bounds) => self.set_display_area(bounds, self.config.fit_border, false),
            None => {
                let mid = self.current_center();
                let zoom = self.view.zoom() * self.config.quick_zoom_factor;
                self.zoom_to(mid, zoom, false, false);
            }
        }
    }

    /// Returns `true` while quick zoom is engaged.
    #[must_use]
    pub fn quick_zoomed(&self) -> bool {
        self.quick_zoom.is_some()
    }

    // --- Pan ------------------------------------------------------------

    /// Sets the window offset directly. Not logged.
    pub fn scroll_absolute(&mut self, offset: Point) {
        self.view.set_offset(offset.to_vec2());
        self.present_view(false);
    }

    /// Moves the content by `delta` window pixels. Not logged.
    pub fn scroll_relative(&mut self, delta: Vec2) {
        self.view.add_offset(-delta);
        self.present_view(false);
    }

    /// Moves the content by `(dx, dy)` desktop units. Not logged.
    pub fn scroll_relative_in_desktop_coords(&mut self, dx: f64, dy: f64) {
        let scale = self.view.zoom();
        self.scroll_relative(Vec2::new(dx * scale, dy * scale));
    }

    /// Scrolls toward desktop point `p` if it lies outside the visible area
    /// (shrunk by `autoscroll_distance` window pixels).
    ///
    /// `speed` scales the step; `None` uses `autoscroll_speed`. A speed of
    /// zero only reports whether `p` is outside without scrolling. Returns
    /// `true` if `p` was outside.
    pub fn scroll_to_point(&mut self, p: Point, speed: Option<f64>) -> bool {
        let margin = self.config.autoscroll_distance / self.view.zoom();
        let area = self.visible_area().inset(-margin);
        let inside = p.x > area.x0 && p.x < area.x1 && p.y > area.y0 && p.y < area.y1;
        if inside {
            return false;
        }
        let target = Point::new(
            p.x.max(area.x0).min(area.x1),
            p.y.max(area.y0).min(area.y1),
        );
        let moved = self.view.d2w_point(target) - self.view.d2w_point(p);
        let speed = speed.unwrap_or(self.config.autoscroll_speed);
        if speed != 0.0 {
            self.scroll_relative(moved * speed);
        }
        true
    }

    // --- Rotate ---------------------------------------------------------

    /// Current rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.view.rotation()
    }

    /// Sets the rotation, keeping desktop point `c` in place.
    pub fn rotate_absolute_keep_point(&mut self, c: Point, angle: f64) {
        self.reorient(c, true, true, |view| view.set_rotate(angle));
    }

    /// Adds to the rotation, keeping desktop point `c` in place.
    pub fn rotate_relative_keep_point(&mut self, c: Point, delta: f64) {
        self.reorient(c, true, true, |view| view.add_rotate(delta));
    }

    /// Sets the rotation and moves desktop point `c` to the window center.
    pub fn rotate_absolute_center_point(&mut self, c: Point, angle: f64) {
        self.reorient(c, false, true, |view| view.set_rotate(angle));
    }

    /// Adds to the rotation and moves desktop point `c` to the window center.
    pub fn rotate_relative_center_point(&mut self, c: Point, delta: f64) {
        self.reorient(c, false, true, |view| view.add_rotate(delta));
    }

    /// Rotates by `steps` rotation increments, keeping `c` in place.
    pub fn rotate_step(&mut self, c: Point, steps: i32) {
        let delta = f64::from(steps) * self.config.rotation_increment;
        self.rotate_relative_keep_point(c, delta);
    }

    // --- Flip -----------------------------------------------------------

    /// Returns `true` if every axis in `axes` is mirrored.
    #[must_use]
    pub fn is_flipped(&self, axes: FlipAxes) -> bool {
        self.view.is_flipped(axes)
    }

    /// Sets the flip state, keeping desktop point `c` in place.
    pub fn flip_absolute_keep_point(&mut self, c: Point, axes: FlipAxes) {
        self.reorient(c, true, true, |view| view.set_flip(axes));
    }

    /// Toggles `axes`, keeping desktop point `c` in place.
    pub fn flip_relative_keep_point(&mut self, c: Point, axes: FlipAxes) {
        self.reorient(c, true, true, |view| view.add_flip(axes));
    }

    /// Sets the flip state and moves desktop point `c` to the window center.
    pub fn flip_absolute_center_point(&mut self, c: Point, axes: FlipAxes) {
        self.reorient(c, false, true, |view| view.set_flip(axes));
    }

    /// Toggles `axes` and moves desktop point `c` to the window center.
    pub fn flip_relative_center_point(&mut self, c: Point, axes: FlipAxes) {
        self.reorient(c, false, true, |view| view.add_flip(axes));
    }

    fn reorient<F>(&mut self, anchor: Point, keep_point: bool, log: bool, change: F)
    where
        F: FnOnce(&mut ViewTransform),
    {
        let w = if keep_point {
            self.view.d2w_point(anchor)
        } else {
            self.window_rect().center()
        };
        change(&mut self.view);
        self.set_display_area_point(anchor, w, log);
    }

    // --- History --------------------------------------------------------

    /// Returns to the previous logged view.
    ///
    /// If the view was changed without logging since the last entry, this
    /// first returns to that entry. At the oldest entry a warning is flashed
    /// and [`HistoryError::NoPreviousTransform`] returned.
    pub fn prev_transform(&mut self) -> Result<(), HistoryError> {
        let front = self.history.current().map(|front| self.in_current_axis(*front));
        let restore = match front {
            Some(front) if front != self.view => front,
            _ => {
                let undone = self
                    .history
                    .undo()
                    .inspect_err(|err| self.history_boundary(*err))?;
                self.in_current_axis(undone)
            }
        };
        self.set_display_transform(restore, false);
        Ok(())
    }

    /// Re-applies the most recently undone view.
    ///
    /// With nothing to redo a warning is flashed and
    /// [`HistoryError::NoNextTransform`] returned.
    pub fn next_transform(&mut self) -> Result<(), HistoryError> {
        let restore = self
            .history
            .redo()
            .inspect_err(|err| self.history_boundary(*err))?;
        self.set_display_transform(self.in_current_axis(restore), false);
        Ok(())
    }

    /// Converts a saved view to the bound document's Y-axis direction.
    ///
    /// Views saved while another document was bound may carry the other
    /// direction. The desktop point at the window center stays in place.
    fn in_current_axis(&self, mut saved: ViewTransform) -> ViewTransform {
        let ydir = self.yaxisdir();
        if saved.y_axis_dir() != ydir {
            let mid = self.window_rect().center();
            let center = saved.w2d_point(mid);
            saved.set_scale(saved.zoom(), ydir);
            saved.add_offset(saved.d2w_point(center) - mid);
        }
        saved
    }

    /// Forgets every logged view and reseeds history with the current one.
    pub fn clear_transform_history(&mut self) {
        self.history.clear();
        self.history.log(self.view);
    }

    fn history_boundary(&mut self, err: HistoryError) {
        tracing::warn!(%err, "view history exhausted");
        self.flash(MessageLevel::Warning, &err.to_string());
    }

    // --- Deferred document view -----------------------------------------

    /// Applies the document's stored view on the next frame.
    ///
    /// Scheduling again before the frame arrives has no further effect.
    pub fn schedule_view_from_document(&mut self) {
        if self.view_from_document.schedule() {
            self.request_frame();
        }
    }

    /// Pre-paint hook; the host calls this once per frame it was asked for.
    ///
    /// Runs the pending document view, if any: the stored zoom, rotation and
    /// center, or the whole page when the document stores no view. History is
    /// then reseeded with the resulting view. Returns `true` if anything ran.
    pub fn on_frame(&mut self) -> bool {
        if !self.view_from_document.fire() {
            return false;
        }
        match self.document().stored_view() {
            Some(stored) => {
                let zoom = self.config.zoom_limits.clamp(stored.zoom);
                let ydir = self.yaxisdir();
                self.view.set_scale(zoom, ydir);
                self.view.set_rotate(stored.rotation);
                let mid = self.window_rect().center();
                self.set_display_area_point(stored.center, mid, false);
            }
            None => {
                self.zoom_page();
            }
        }
        self.clear_transform_history();
        true
    }
}

/// The window shrunk by `border`, or the whole window if that leaves nothing.
fn fit_target(window: Rect, border: f64) -> Rect {
    let inset = window.inset(-border);
    if inset.width() > 0.0 && inset.height() > 0.0 {
        inset
    } else {
        window
    }
}
