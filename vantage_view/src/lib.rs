// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View: the document ↔ window transform of an editing window.
//!
//! This crate provides small, headless value types describing how desktop
//! coordinates (document coordinates after the document's fixed axis
//! convention has been applied) map onto the pixels of a window:
//! - [`ViewTransform`]: scale (with a Y‑axis direction), rotation, flip and a
//!   window‑space offset, plus the derived forward/inverse affines.
//! - [`ZoomLimits`]: the clamp range callers apply before setting a scale.
//! - [`TransformHistory`]: an undo/redo record of past and future views.
//! - [`DisplayQuad`]: the visible window mapped back into desktop space, which
//!   is a general quadrilateral once rotation is involved.
//!
//! It does **not** know about documents, tools or canvases. The
//! `vantage_desktop` crate orchestrates these types against those
//! collaborators.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_view::{TransformHistory, ViewTransform, ZoomLimits};
//!
//! let limits = ZoomLimits::default();
//! let mut view = ViewTransform::new();
//! let mut history = TransformHistory::new();
//! history.log(view);
//!
//! // Zoom to 4x while keeping the desktop point (10, 10) where it is on screen.
//! let anchor = Point::new(10.0, 10.0);
//! let before = view.d2w() * anchor;
//! view.set_scale(limits.clamp(4.0), 1.0);
//! view.add_offset(view.d2w() * anchor - before);
//! history.log(view);
//!
//! assert!((view.d2w() * anchor - before).hypot() < 1e-9);
//! assert_eq!(history.undo().unwrap().zoom(), 1.0);
//! ```
//!
//! ## Composition order
//!
//! A desktop point is flipped first, then scaled (the Y scale carries the
//! axis direction), then rotated clockwise about the window origin and
//! finally shifted by the negated offset:
//!
//! `d2w = translate(-offset) · rotate(angle) · scale(z, z·ydir) · flip`
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod flip;
mod history;
mod limits;
mod quad;
mod transform;

pub use flip::FlipAxes;
pub use history::{HistoryError, TransformHistory};
pub use limits::{ZOOM_MAX, ZOOM_MIN, ZoomLimits};
pub use quad::DisplayQuad;
pub use transform::ViewTransform;
