// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{PI, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::flip::FlipAxes;

/// Mapping between desktop space and window space.
///
/// A `ViewTransform` is a small `Copy` value: an editing window owns the live
/// instance and history keeps copies of it. The forward (`d2w`) and inverse
/// (`w2d`) affines are rebuilt eagerly by every mutator, so reading them is
/// free.
///
/// Every mutator keeps the transform invertible. Requests that would break
/// that (a zero, negative or non-finite zoom, a non-finite angle or offset)
/// are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    y_axis_dir: f64,
    rotation: f64,
    flip: FlipAxes,
    offset: Vec2,
    d2w: Affine,
    w2d: Affine,
}

impl ViewTransform {
    /// Identity view: zoom `1.0`, Y pointing down, no rotation, flip or offset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            y_axis_dir: 1.0,
            rotation: 0.0,
            flip: FlipAxes::empty(),
            offset: Vec2::ZERO,
            d2w: Affine::IDENTITY,
            w2d: Affine::IDENTITY,
        }
    }

    /// Sets the scale magnitude and the Y‑axis direction.
    ///
    /// `y_axis_dir` is reduced to its sign: `-1.0` when desktop Y grows
    /// upward (so the Y scale is negated to reach the downward window Y),
    /// `1.0` otherwise. No clamping happens here.
    pub fn set_scale(&mut self, zoom: f64, y_axis_dir: f64) {
        debug_assert!(
            zoom.is_finite() && zoom > 0.0,
            "zoom must be finite and positive, got {zoom}"
        );
        if !(zoom.is_finite() && zoom > 0.0) {
            return;
        }
        self.zoom = zoom;
        self.y_axis_dir = if y_axis_dir < 0.0 { -1.0 } else { 1.0 };
        self.rebuild();
    }

    /// Sets the rotation angle in radians, clockwise on screen.
    pub fn set_rotate(&mut self, angle: f64) {
        if !angle.is_finite() {
            return;
        }
        self.rotation = normalize_angle(angle);
        self.rebuild();
    }

    /// Adds `delta` radians to the rotation.
    pub fn add_rotate(&mut self, delta: f64) {
        self.set_rotate(self.rotation + delta);
    }

    /// Replaces the flip state.
    pub fn set_flip(&mut self, axes: FlipAxes) {
        self.flip = axes;
        self.rebuild();
    }

    /// Toggles mirroring along `axes`.
    pub fn add_flip(&mut self, axes: FlipAxes) {
        self.flip ^= axes;
        self.rebuild();
    }

    /// Sets the window‑space offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        if !(offset.x.is_finite() && offset.y.is_finite()) {
            return;
        }
        self.offset = offset;
        self.rebuild();
    }

    /// Adds `delta` to the window‑space offset.
    ///
    /// Increasing the offset moves content toward the window origin.
    pub fn add_offset(&mut self, delta: Vec2) {
        self.set_offset(self.offset + delta);
    }

    /// Zoom magnitude (always positive).
    ///
    /// This is the geometric mean of the axis scales, which stays the same
    /// under rotation, flip and the Y‑axis direction.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.d2w.determinant().abs().sqrt()
    }

    /// Sign of the Y scale, `1.0` or `-1.0`.
    #[must_use]
    pub fn y_axis_dir(&self) -> f64 {
        self.y_axis_dir
    }

    /// Rotation in radians, normalized to `[-π, π)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Current flip state.
    #[must_use]
    pub fn flip(&self) -> FlipAxes {
        self.flip
    }

    /// Returns `true` if every axis in `axes` is currently mirrored.
    #[must_use]
    pub fn is_flipped(&self, axes: FlipAxes) -> bool {
        !axes.is_empty() && self.flip.contains(axes)
    }

    /// Window‑space offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Desktop → window affine, offset included.
    #[must_use]
    pub fn d2w(&self) -> Affine {
        self.d2w
    }

    /// Window → desktop affine, offset included.
    #[must_use]
    pub fn w2d(&self) -> Affine {
        self.w2d
    }

    /// Desktop → window affine without the offset.
    ///
    /// Canvases that scroll by the offset separately render with this.
    #[must_use]
    pub fn linear(&self) -> Affine {
        Affine::translate(self.offset) * self.d2w
    }

    /// Maps a desktop point into window space.
    #[must_use]
    pub fn d2w_point(&self, pt: Point) -> Point {
        self.d2w * pt
    }

    /// Maps a window point into desktop space.
    #[must_use]
    pub fn w2d_point(&self, pt: Point) -> Point {
        self.w2d * pt
    }

    fn rebuild(&mut self) {
        self.d2w = Affine::translate(-self.offset)
            * Affine::rotate(self.rotation)
            * Affine::scale_non_uniform(self.zoom, self.zoom * self.y_axis_dir)
            * self.flip.to_affine();
        self.w2d = self.d2w.inverse();
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle - TAU * ((angle + PI) / TAU).floor();
    // Rounding can land exactly on the open end of the range.
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}
