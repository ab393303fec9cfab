// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Queue-based observer lists.
//!
//! A [`Publisher`] fans events out to every live [`Subscriber`]. Each
//! subscriber owns a FIFO queue, so delivery order is publish order and
//! nothing runs re-entrantly inside the publisher: observers drain their
//! queue when they are ready. Dropping a subscriber unsubscribes it.

use alloc::collections::VecDeque;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

use crate::document::ObjectId;

type Queue<E> = RefCell<VecDeque<E>>;

/// Sending side of an observer list.
pub struct Publisher<E> {
    subscribers: RefCell<SmallVec<[Weak<Queue<E>>; 4]>>,
}

impl<E> Publisher<E> {
    /// Creates a publisher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(SmallVec::new()),
        }
    }

    /// Registers a new subscriber.
    ///
    /// The subscriber only sees events published after this call.
    pub fn subscribe(&self) -> Subscriber<E> {
        let queue = Rc::new(RefCell::new(VecDeque::new()));
        self.subscribers.borrow_mut().push(Rc::downgrade(&queue));
        Subscriber { queue }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|s| s.strong_count() > 0)
            .count()
    }
}

impl<E: Clone> Publisher<E> {
    /// Delivers `event` to every live subscriber and forgets dropped ones.
    pub fn publish(&self, event: E) {
        self.subscribers.borrow_mut().retain(|weak| {
            let Some(queue) = weak.upgrade() else {
                return false;
            };
            queue.borrow_mut().push_back(event.clone());
            true
        });
    }
}

impl<E> Default for Publisher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Publisher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Receiving side of an observer list.
pub struct Subscriber<E> {
    queue: Rc<Queue<E>>,
}

impl<E> Subscriber<E> {
    /// Pops the oldest pending event.
    pub fn try_recv(&self) -> Option<E> {
        self.queue.borrow_mut().pop_front()
    }

    /// Takes every pending event, oldest first.
    pub fn drain(&self) -> Vec<E> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Number of pending events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl<E> fmt::Debug for Subscriber<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Notifications published by a [`ViewportController`](crate::ViewportController).
///
/// Each event is published after the state it describes has been updated.
#[derive(Clone, Debug, PartialEq)]
pub enum DesktopEvent {
    /// The window now shows a different document.
    DocumentReplaced,
    /// The active tool changed; carries the name of the tool now active, or
    /// `None` once the tool has been detached.
    ToolChanged(Option<String>),
    /// Zoom, rotation, flip or offset changed.
    ViewChanged,
    /// The layer new objects go into changed.
    CurrentLayerChanged(Option<ObjectId>),
    /// The document's file name changed.
    TitleChanged(String),
    /// The controller was torn down.
    Destroyed,
}
