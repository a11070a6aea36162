// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Padding applied by [`TreemapLayout`](crate::TreemapLayout), in pixels.
///
/// Every interior node (the root and each category) insets its children by
/// `outer` on the left, right and bottom, and by `top` at the top, leaving a
/// band for its label. Siblings are separated by an `inner` gutter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreemapPadding {
    /// Inset on the left, right and bottom of interior nodes.
    pub outer: f64,
    /// Inset at the top of interior nodes (label band).
    pub top: f64,
    /// Gutter between sibling rectangles.
    pub inner: f64,
    /// Round every coordinate to whole pixels.
    pub round: bool,
}

impl Default for TreemapPadding {
    fn default() -> Self {
        Self {
            outer: 3.0,
            top: 22.0,
            inner: 1.0,
            round: true,
        }
    }
}

impl TreemapPadding {
    /// No padding and no rounding: a bare proportional partition.
    pub const NONE: Self = Self {
        outer: 0.0,
        top: 0.0,
        inner: 0.0,
        round: false,
    };

    /// Returns `true` if every inset is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.outer, self.top, self.inner]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}
