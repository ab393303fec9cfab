// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::f64::consts::{PI, SQRT_2};

use vantage_view::ZoomLimits;

/// Tunables of a [`ViewportController`](crate::ViewportController).
///
/// Persisting these is the application's business; the controller reads
/// them as given.
#[derive(Clone, Debug, PartialEq)]
pub struct DesktopConfig {
    /// Range every zoom request is clamped into.
    pub zoom_limits: ZoomLimits,
    /// Factor used by zoom in/out steps.
    pub zoom_increment: f64,
    /// Angle in radians used by rotation steps.
    pub rotation_increment: f64,
    /// Window pixels left free around fitted content.
    pub fit_border: f64,
    /// Zoom factor of quick zoom when there is nothing to fit.
    pub quick_zoom_factor: f64,
    /// Content whose bounds are thinner than this is not fitted.
    pub min_fit_extent: f64,
    /// Window pixels from the edge at which autoscroll kicks in.
    pub autoscroll_distance: f64,
    /// Fraction of the overshoot scrolled per autoscroll step. Zero only
    /// detects points outside the view.
    pub autoscroll_speed: f64,
    /// Tool activated at startup and used as the fallback.
    pub default_tool: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            zoom_increment: SQRT_2,
            rotation_increment: PI / 12.0,
            fit_border: 10.0,
            quick_zoom_factor: 2.0,
            min_fit_extent: 0.1,
            autoscroll_distance: 0.0,
            autoscroll_speed: 1.0,
            default_tool: String::from("select"),
        }
    }
}
