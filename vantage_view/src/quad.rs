// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

/// A rectangle carried through an affine: the visible window in desktop space.
///
/// Under rotation the visible area is not axis aligned, so it is kept as
/// four corners. Corners are stored in the order of the source rectangle:
/// `(x0, y0)`, `(x1, y0)`, `(x1, y1)`, `(x0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayQuad {
    corners: [Point; 4],
}

impl DisplayQuad {
    /// Maps the corners of `rect` through `affine`.
    #[must_use]
    pub fn from_rect(rect: Rect, affine: Affine) -> Self {
        Self {
            corners: [
                affine * Point::new(rect.x0, rect.y0),
                affine * Point::new(rect.x1, rect.y0),
                affine * Point::new(rect.x1, rect.y1),
                affine * Point::new(rect.x0, rect.y1),
            ],
        }
    }

    /// The four corners.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        self.corners
    }

    /// Axis-aligned bounding box of the corners.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let [a, b, c, d] = self.corners;
        Rect::from_points(a, c).union_pt(b).union_pt(d)
    }

    /// Intersection point of the diagonals.
    #[must_use]
    pub fn center(&self) -> Point {
        self.corners[0].midpoint(self.corners[2])
    }

    /// Returns `true` if `pt` lies inside the quad or on its border.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        // The quad is convex; `pt` is inside when it is on the same side of
        // every edge.
        let (mut left, mut right) = (false, false);
        for i in 0..4 {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % 4];
            let cross = (b - a).cross(pt - a);
            left |= cross > 0.0;
            right |= cross < 0.0;
        }
        !(left && right)
    }
}
