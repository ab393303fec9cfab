// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Desktop: the viewport controller of an editing window.
//!
//! A [`ViewportController`] binds one window to a shared [`Document`], a
//! [`Canvas`] that renders it and a [`DesktopWidget`] around it. It owns the
//! live [`ViewTransform`] and answers the navigation requests of a vector
//! editor:
//! - zoom (absolute, relative, stepped, fit page/drawing/selection, quick zoom),
//! - rotation and flip about a kept point or the window center,
//! - scrolling and autoscroll toward a point,
//! - undo/redo of logged views through a [`TransformHistory`].
//!
//! It also runs the tool lifecycle (tools are built by name from a
//! [`ToolRegistry`] and fall back to the default tool), keeps the selection
//! and the current layer across document reconstruction, and publishes
//! [`DesktopEvent`]s to interested observers.
//!
//! Collaborators are traits so hosts can plug in their own document model and
//! rendering. Document notifications are queued rather than delivered
//! re-entrantly; the host calls
//! [`ViewportController::process_document_events`] and
//! [`ViewportController::on_frame`] from its event loop.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use kurbo::{Affine, Point, Rect, Vec2};
//! use vantage_desktop::{
//!     Canvas, DesktopConfig, DesktopWidget, Document, DocumentEvent, MessageLevel, ObjectId,
//!     Publisher, Subscriber, ViewportController,
//! };
//!
//! struct Page(Publisher<DocumentEvent>);
//!
//! impl Document for Page {
//!     fn subscribe(&self) -> Subscriber<DocumentEvent> { self.0.subscribe() }
//!     fn filename(&self) -> Option<String> { None }
//!     fn doc2dt(&self) -> Affine { Affine::IDENTITY }
//!     fn visual_bounds(&self) -> Option<Rect> { Some(Rect::new(0.0, 0.0, 100.0, 50.0)) }
//!     fn item_visual_bounds(&self, _: &ObjectId) -> Option<Rect> { None }
//!     fn object_by_id(&self, _: &str) -> Option<ObjectId> { None }
//!     fn page_area(&self) -> Rect { Rect::new(0.0, 0.0, 210.0, 297.0) }
//! }
//!
//! struct Window;
//!
//! impl Canvas for Window {
//!     fn window_rect(&self) -> Rect { Rect::new(0.0, 0.0, 800.0, 600.0) }
//!     fn set_affine(&mut self, _: Affine) {}
//!     fn scroll_to(&mut self, _: Vec2) {}
//!     fn attach_drawing(&mut self, _: &dyn Document) {}
//!     fn detach_drawing(&mut self) {}
//!     fn request_frame(&mut self) {}
//! }
//!
//! impl DesktopWidget for Window {
//!     fn set_title(&mut self, _: &str) {}
//!     fn flash(&mut self, _: MessageLevel, _: &str) {}
//! }
//!
//! let mut desktop = ViewportController::new(DesktopConfig::default());
//! desktop.init(
//!     Rc::new(Page(Publisher::new())),
//!     Box::new(Window),
//!     Box::new(Window),
//! );
//!
//! // Fit the drawing: 780 px of usable width over 100 units.
//! assert!(desktop.zoom_drawing());
//! assert!((desktop.zoom() - 7.8).abs() < 1e-9);
//! let center = desktop.d2w(Point::new(50.0, 25.0));
//! assert!((center - Point::new(400.0, 300.0)).hypot() < 1e-9);
//!
//! // Back to the initial view.
//! desktop.prev_transform().unwrap();
//! assert_eq!(desktop.zoom(), 1.0);
//! ```
//!
//! This crate is `no_std` (it needs `alloc`).

#![no_std]

extern crate alloc;

mod app;
mod canvas;
mod config;
mod controller;
mod document;
mod events;
mod frame;
mod layers;
mod navigation;
mod tool;

pub use app::{ApplicationState, DesktopId};
pub use canvas::{Canvas, DesktopWidget, MessageLevel};
pub use config::DesktopConfig;
pub use controller::{DesktopDebugInfo, ViewportController};
pub use document::{Document, DocumentEvent, ObjectId, StoredView};
pub use events::{DesktopEvent, Publisher, Subscriber};
pub use frame::FrameHook;
pub use layers::LayerTracker;
pub use tool::{
    NodeSelection, NodeTool, SelectTool, ShapeKind, ShapeTool, Tool, ToolError, ToolRegistry,
    ToolSwitch, tool_name,
};

pub use vantage_selection::Selection;
pub use vantage_view::{
    DisplayQuad, FlipAxes, HistoryError, TransformHistory, ViewTransform, ZoomLimits,
};
