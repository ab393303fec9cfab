// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Smallest zoom factor an editing window allows by default (1%).
pub const ZOOM_MIN: f64 = 0.01;

/// Largest zoom factor an editing window allows by default (25600%).
pub const ZOOM_MAX: f64 = 256.0;

/// Closed range that requested zoom factors are clamped into.
///
/// [`ViewTransform::set_scale`](crate::ViewTransform::set_scale) never clamps;
/// callers run requests through [`ZoomLimits::clamp`] first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Creates limits from two bounds.
    ///
    /// The pair is normalized so that `min <= max`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not a finite, strictly positive number.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0,
            "zoom limits must be finite and positive"
        );
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into the range.
    ///
    /// Non-positive requests clamp to the minimum and `+inf` to the maximum.
    /// `NaN` is mapped to the minimum so the result is always usable as a
    /// scale.
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return self.min;
        }
        zoom.clamp(self.min, self.max)
    }

    /// Returns `true` if `zoom` already lies inside the range.
    #[must_use]
    pub fn contains(self, zoom: f64) -> bool {
        (self.min..=self.max).contains(&zoom)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: ZOOM_MIN,
            max: ZOOM_MAX,
        }
    }
}
