// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Current zoom state of a canvas.
///
/// `region` is expressed in unzoomed layout coordinates: at scale `s` it is
/// `1/s` of the canvas on each axis, centered on `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Uniform zoom factor; `1.0` shows the whole canvas.
    pub scale: f64,
    /// Point the zoom is anchored on.
    pub center: Point,
    /// Visible region in layout coordinates.
    pub region: Rect,
}

impl ViewportState {
    /// The unzoomed state: scale `1` over the whole canvas.
    #[must_use]
    pub fn full(canvas: Size) -> Self {
        let region = Rect::from_origin_size(Point::ZERO, canvas);
        Self {
            scale: 1.0,
            center: region.center(),
            region,
        }
    }

    /// The state at `scale` with the visible region centered on `anchor`.
    ///
    /// Keeping the region centered under the pointer stops content from
    /// drifting away from the cursor while zooming.
    #[must_use]
    pub fn anchored(canvas: Size, scale: f64, anchor: Point) -> Self {
        let size = Size::new(canvas.width / scale, canvas.height / scale);
        Self {
            scale,
            center: anchor,
            region: Rect::from_center_size(anchor, size),
        }
    }

    /// Returns `true` if `rect` overlaps the visible region.
    ///
    /// Edges that merely touch do not count as overlap.
    #[must_use]
    pub fn intersects(&self, rect: Rect) -> bool {
        let r = self.region;
        rect.x0 < r.x1 && rect.x1 > r.x0 && rect.y0 < r.y1 && rect.y1 > r.y0
    }
}
