// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use kurbo::{Affine, Point, Rect};

use crate::events::Subscriber;

/// Stable identifier of a document object (its XML `id`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(Rc<str>);

impl ObjectId {
    /// Creates an identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(Rc::from(id))
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({:?})", &*self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Notifications a [`Document`] publishes to the windows viewing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentEvent {
    /// The document is about to be rebuilt in place; object references held
    /// by dependents are about to go stale.
    ReconstructionStart,
    /// The rebuild finished; objects can be looked up again by id.
    ReconstructionFinish,
    /// The document was saved under, or loaded from, a new file name.
    FilenameChanged(String),
}

/// View settings a document stores for itself (zoom, center, rotation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoredView {
    /// Zoom factor; clamped on application.
    pub zoom: f64,
    /// Desktop point to put at the window center.
    pub center: Point,
    /// Rotation in radians, clockwise.
    pub rotation: f64,
}

/// The document an editing window shows.
///
/// Documents are shared between windows (`Rc<dyn Document>`), so every
/// method takes `&self`; implementations use interior mutability where they
/// need it. Geometry is reported in desktop coordinates.
pub trait Document {
    /// Opens a new notification stream for one window.
    fn subscribe(&self) -> Subscriber<DocumentEvent>;

    /// File name, if the document has one.
    fn filename(&self) -> Option<String>;

    /// Fixed document → desktop axis convention.
    ///
    /// Identity when the document's Y axis already points down; otherwise a
    /// vertical flip about the page. Independent of any view transform.
    fn doc2dt(&self) -> Affine;

    /// Visual bounding box of everything drawn in the document.
    fn visual_bounds(&self) -> Option<Rect>;

    /// Visual bounding box of one object.
    fn item_visual_bounds(&self, id: &ObjectId) -> Option<Rect>;

    /// Resolves an id to a live object.
    fn object_by_id(&self, id: &str) -> Option<ObjectId>;

    /// The page area.
    fn page_area(&self) -> Rect;

    /// View settings saved with the document, if any.
    fn stored_view(&self) -> Option<StoredView> {
        None
    }
}

impl fmt::Debug for dyn Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("filename", &self.filename())
            .finish_non_exhaustive()
    }
}
