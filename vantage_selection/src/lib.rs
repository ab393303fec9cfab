// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Selection: the set of objects an editing window has selected.
//!
//! [`Selection`] keeps the selected object keys, an optional **primary** key
//! (the most recently added one) and a **revision** counter that bumps only
//! when the contents actually change. It does not own the objects: geometry
//! is looked up through a caller-supplied function, which is how
//! [`Selection::visual_bounds`] works against whatever document the window is
//! currently bound to. Rebinding a window to another document therefore only
//! needs a [`Selection::clear`]; the container itself is reused.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use vantage_selection::Selection;
//!
//! let mut selection = Selection::<u32>::new();
//! selection.replace_with([1, 2, 2]);
//! assert_eq!(selection.items(), &[1, 2]);
//!
//! let bounds = selection.visual_bounds(|id| match id {
//!     1 => Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
//!     2 => Some(Rect::new(20.0, 5.0, 30.0, 15.0)),
//!     _ => None,
//! });
//! assert_eq!(bounds, Some(Rect::new(0.0, 0.0, 30.0, 15.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

/// Selected object keys plus a primary key and a revision counter.
///
/// Keys only need [`PartialEq`]; uniqueness is enforced by scanning, which
/// suits the handful to few hundred objects a canvas selection usually holds.
#[derive(Clone, Debug)]
pub struct Selection<K> {
    items: Vec<K>,
    primary: Option<usize>,
    revision: u64,
}

impl<K> Selection<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selected keys in insertion order.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Iterates over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// The primary key, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&K> {
        self.primary.map(|idx| &self.items[idx])
    }

    /// Revision counter; bumps on every change of contents or primary.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    /// Union of the visual bounds of every selected object.
    ///
    /// `bounds_of` returns `None` for objects without geometry (or no longer
    /// present); those are skipped. Returns `None` when no selected object has
    /// bounds.
    pub fn visual_bounds<F>(&self, mut bounds_of: F) -> Option<Rect>
    where
        F: FnMut(&K) -> Option<Rect>,
    {
        self.items
            .iter()
            .filter_map(&mut bounds_of)
            .reduce(|acc, r| acc.union(r))
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K: PartialEq> Selection<K> {
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.position_of(key).is_some()
    }

    /// Selects exactly `key`.
    pub fn select_only(&mut self, key: K) {
        if self.items.len() == 1 && self.items[0] == key {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.primary = Some(0);
        self.bump_revision();
    }

    /// Adds `key` and makes it primary.
    pub fn add(&mut self, key: K) {
        match self.position_of(&key) {
            Some(idx) if self.primary == Some(idx) => {}
            Some(idx) => {
                self.primary = Some(idx);
                self.bump_revision();
            }
            None => {
                self.items.push(key);
                self.primary = Some(self.items.len() - 1);
                self.bump_revision();
            }
        }
    }

    /// Deselects `key` if present.
    pub fn remove(&mut self, key: &K) {
        if let Some(idx) = self.position_of(key) {
            self.remove_at(idx);
            self.bump_revision();
        }
    }

    /// Adds `key` if absent, removes it otherwise.
    pub fn toggle(&mut self, key: K) {
        if self.contains(&key) {
            self.remove(&key);
        } else {
            self.add(key);
        }
    }

    /// Replaces the selection with `keys`, ignoring duplicates.
    ///
    /// The first key becomes primary.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut items: Vec<K> = Vec::new();
        for key in keys {
            if !items.contains(&key) {
                items.push(key);
            }
        }
        if items == self.items {
            return;
        }
        self.primary = if items.is_empty() { None } else { Some(0) };
        self.items = items;
        self.bump_revision();
    }

    fn position_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }

    fn remove_at(&mut self, idx: usize) {
        self.items.remove(idx);
        self.primary = match self.primary {
            _ if self.items.is_empty() => None,
            Some(p) if p == idx => None,
            Some(p) if p > idx => Some(p - 1),
            other => other,
        };
    }
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}
