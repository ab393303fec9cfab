// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use core::fmt;

use crate::transform::ViewTransform;

/// Error returned when stepping past either end of a [`TransformHistory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistoryError {
    /// Only the oldest recorded view is left.
    NoPreviousTransform,
    /// Nothing has been undone since the last logged view.
    NoNextTransform,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoPreviousTransform => "No previous transform.",
            Self::NoNextTransform => "No next transform.",
        })
    }
}

impl core::error::Error for HistoryError {}

/// Undo/redo record of view transforms.
///
/// Entries are value copies, so mutating the live transform never aliases
/// history. `past` is ordered most recent first and its front is the view
/// currently shown after a logged change; `future` holds undone views, most
/// recently undone first.
///
/// Both stacks are unbounded. [`TransformHistory::clear`] is the only way to
/// shrink `past`.
#[derive(Clone, Debug, Default)]
pub struct TransformHistory {
    past: VecDeque<ViewTransform>,
    future: VecDeque<ViewTransform>,
}

impl TransformHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
        }
    }

    /// Records `transform` as the newest view and discards every redo entry.
    pub fn log(&mut self, transform: ViewTransform) {
        self.past.push_front(transform);
        self.future.clear();
    }

    /// Steps one view back and returns the view to restore.
    ///
    /// The oldest recorded view is never popped.
    pub fn undo(&mut self) -> Result<ViewTransform, HistoryError> {
        if self.past.len() <= 1 {
            return Err(HistoryError::NoPreviousTransform);
        }
        let Some(current) = self.past.pop_front() else {
            return Err(HistoryError::NoPreviousTransform);
        };
        self.future.push_front(current);
        self.past
            .front()
            .copied()
            .ok_or(HistoryError::NoPreviousTransform)
    }

    /// Steps one view forward and returns the view to restore.
    pub fn redo(&mut self) -> Result<ViewTransform, HistoryError> {
        let next = self.future.pop_front().ok_or(HistoryError::NoNextTransform)?;
        self.past.push_front(next);
        Ok(next)
    }

    /// Empties both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// The most recently logged (or restored) view.
    #[must_use]
    pub fn current(&self) -> Option<&ViewTransform> {
        self.past.front()
    }

    /// Returns `true` if [`TransformHistory::undo`] would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Returns `true` if [`TransformHistory::redo`] would succeed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of entries in `past`, the current view included.
    #[must_use]
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of undone entries available for redo.
    #[must_use]
    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}
