// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drawing surface that keeps a textual log of what was painted.

use std::fmt::Write as _;

use canopy_explorer::{DrawSurface, Font};
use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Approximate advance of one character, as a fraction of the font size.
const CHAR_ADVANCE: f64 = 0.6;

/// Records draw calls as lines of text.
#[derive(Debug, Default)]
pub(crate) struct TextSurface {
    size: Size,
    ratio: f64,
    rects: usize,
    labels: Vec<String>,
}

impl TextSurface {
    /// Number of rectangles painted since the last clear.
    pub(crate) fn rect_count(&self) -> usize {
        self.rects
    }

    /// Labels painted since the last clear, in paint order.
    pub(crate) fn labels(&self) -> &[String] {
        &self.labels
    }

    /// One-line summary of the last frame.
    pub(crate) fn summary(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "{}x{} @{}x: {} rects, {} labels",
            self.size.width,
            self.size.height,
            self.ratio,
            self.rects,
            self.labels.len()
        );
        out
    }
}

/// Shortens `text` with a trailing `...` until it fits `max_width`.
fn fit(text: &str, max_width: f64, font: &Font) -> String {
    let advance = font.size * CHAR_ADVANCE;
    let width = |n: usize| n as f64 * advance;
    let len = text.chars().count();
    if width(len) <= max_width {
        return text.to_owned();
    }
    let mut keep = len;
    while keep > 1 && width(keep) > max_width {
        keep -= 1;
    }
    let mut short: String = text.chars().take(keep).collect();
    short.push_str("...");
    short
}

impl DrawSurface for TextSurface {
    fn resize(&mut self, size: Size, device_pixel_ratio: f64) {
        self.size = size;
        self.ratio = device_pixel_ratio;
    }

    fn clear(&mut self) {
        self.rects = 0;
        self.labels.clear();
    }

    fn draw_rect(&mut self, _rect: Rect, _fill: Color) {
        self.rects += 1;
    }

    fn draw_clipped_text(&mut self, text: &str, _origin: Point, max_width: f64, font: &Font) {
        self.labels.push(fit(text, max_width, font));
    }
}
