// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::document::ObjectId;

/// Tracks the layer new objects are inserted into.
#[derive(Clone, Debug, Default)]
pub struct LayerTracker {
    current: Option<ObjectId>,
}

impl LayerTracker {
    /// Creates a tracker with no current layer (the document root).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current layer, `None` meaning the document root.
    #[must_use]
    pub fn current_layer(&self) -> Option<&ObjectId> {
        self.current.as_ref()
    }

    /// Makes `layer` current. Returns `true` if that changed anything.
    pub fn set_current_layer(&mut self, layer: ObjectId) -> bool {
        if self.current.as_ref() == Some(&layer) {
            return false;
        }
        self.current = Some(layer);
        true
    }

    /// Falls back to the document root. Returns `true` if that changed anything.
    pub fn reset(&mut self) -> bool {
        self.current.take().is_some()
    }
}
