// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Rect, Vec2};
use vantage_view::FlipAxes;

use crate::document::Document;

/// The rendering surface of an editing window, as seen by the controller.
///
/// Only the coordinate contract matters here: the canvas renders desktop
/// content through the affine it was last given, scrolled by the last offset.
pub trait Canvas {
    /// Visible area in window coordinates, normally `(0, 0)` to the widget size.
    fn window_rect(&self) -> Rect;

    /// Desktop → window affine (without the scroll offset) for repaints.
    fn set_affine(&mut self, affine: Affine);

    /// Window‑space scroll offset.
    fn scroll_to(&mut self, offset: Vec2);

    /// Builds the drawing (scene-graph root) for `document`.
    fn attach_drawing(&mut self, document: &dyn Document);

    /// Tears down the drawing of the previous document.
    fn detach_drawing(&mut self);

    /// Asks for one pre-paint tick. The host answers by calling
    /// [`ViewportController::on_frame`](crate::ViewportController::on_frame).
    fn request_frame(&mut self);
}

/// Severity of a transient status-bar message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageLevel {
    /// Plain information.
    Normal,
    /// Something the user asked for could not be done.
    Warning,
    /// An operation failed.
    Error,
}

/// The window chrome around the canvas: title, readouts and status bar.
pub trait DesktopWidget {
    /// Updates the window title.
    fn set_title(&mut self, title: &str);

    /// Shows a transient status message.
    fn flash(&mut self, level: MessageLevel, message: &str);

    /// Refreshes zoom/rotation readouts.
    fn view_changed(&mut self, zoom: f64, rotation: f64, flip: FlipAxes) {
        let _ = (zoom, rotation, flip);
    }
}

impl fmt::Debug for dyn Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("window_rect", &self.window_rect())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for dyn DesktopWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesktopWidget").finish_non_exhaustive()
    }
}
