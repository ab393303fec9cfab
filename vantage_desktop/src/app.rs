// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::ViewportController;
use crate::document::Document;

/// Identifies a controller owned by an [`ApplicationState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DesktopId(u32);

impl DesktopId {
    /// Raw numeric value, stable for the lifetime of the application state.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Application-wide registry of editing windows.
///
/// Owns every [`ViewportController`] and tracks which one has focus. Only one
/// window is focused at a time; removing it clears the focus.
#[derive(Debug, Default)]
pub struct ApplicationState {
    desktops: HashMap<DesktopId, ViewportController>,
    focused: Option<DesktopId>,
    next_id: u32,
}

impl ApplicationState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `desktop`.
    pub fn add_desktop(&mut self, desktop: ViewportController) -> DesktopId {
        let id = DesktopId(self.next_id);
        self.next_id += 1;
        self.desktops.insert(id, desktop);
        id
    }

    /// Removes and returns a desktop, clearing the focus if it had it.
    pub fn remove_desktop(&mut self, id: DesktopId) -> Option<ViewportController> {
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.desktops.remove(&id)
    }

    /// Focuses `id`. Returns `false` (leaving the focus alone) for unknown ids.
    pub fn focus(&mut self, id: DesktopId) -> bool {
        if !self.desktops.contains_key(&id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Id of the focused desktop.
    #[must_use]
    pub fn focused_id(&self) -> Option<DesktopId> {
        self.focused
    }

    /// The focused desktop.
    #[must_use]
    pub fn focused(&self) -> Option<&ViewportController> {
        self.desktops.get(&self.focused?)
    }

    /// The focused desktop, mutably.
    pub fn focused_mut(&mut self) -> Option<&mut ViewportController> {
        self.desktops.get_mut(&self.focused?)
    }

    /// The desktop registered under `id`.
    #[must_use]
    pub fn get(&self, id: DesktopId) -> Option<&ViewportController> {
        self.desktops.get(&id)
    }

    /// The desktop registered under `id`, mutably.
    pub fn get_mut(&mut self, id: DesktopId) -> Option<&mut ViewportController> {
        self.desktops.get_mut(&id)
    }

    /// Number of desktops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.desktops.len()
    }

    /// Returns `true` if there are no desktops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.desktops.is_empty()
    }

    /// Ids of the initialized desktops showing `document`, in creation order.
    #[must_use]
    pub fn desktops_for_document(&self, document: &Rc<dyn Document>) -> Vec<DesktopId> {
        let mut ids: Vec<DesktopId> = self
            .desktops
            .iter()
            .filter(|(_, desktop)| {
                desktop.is_initialized()
                    && core::ptr::addr_eq(Rc::as_ptr(desktop.document()), Rc::as_ptr(document))
            })
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
