// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

bitflags::bitflags! {
    /// Mirroring axes of a [`ViewTransform`](crate::ViewTransform).
    ///
    /// `HORIZONTAL` mirrors left/right (negates X), `VERTICAL` mirrors
    /// top/bottom (negates Y). Both together are a half turn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FlipAxes: u8 {
        /// Mirror across the vertical axis.
        const HORIZONTAL = 0b01;
        /// Mirror across the horizontal axis.
        const VERTICAL = 0b10;
    }
}

impl FlipAxes {
    /// Returns the mirroring affine for these axes.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        let sx = if self.contains(Self::HORIZONTAL) { -1.0 } else { 1.0 };
        let sy = if self.contains(Self::VERTICAL) { -1.0 } else { 1.0 };
        Affine::scale_non_uniform(sx, sy)
    }
}
