// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A "run once before the next paint" latch.
///
/// [`FrameHook::schedule`] reports whether a frame needs to be requested
/// from the canvas; repeated scheduling before the frame arrives coalesces.
/// [`FrameHook::fire`] consumes the latch, so the deferred work runs exactly
/// once per schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameHook {
    pending: bool,
}

impl FrameHook {
    /// Creates an idle hook.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Arms the hook. Returns `true` if it was idle, meaning the caller
    /// should request a frame.
    pub fn schedule(&mut self) -> bool {
        !core::mem::replace(&mut self.pending, true)
    }

    /// Disarms the hook. Returns `true` if it was armed, meaning the
    /// deferred work should run now.
    pub fn fire(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }

    /// Returns `true` while a run is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
