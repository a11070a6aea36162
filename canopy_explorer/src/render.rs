// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing a node set onto an immediate-mode surface.

use alloc::string::String;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use peniko::Color;

use canopy_metrics::SizeMetric;
use canopy_select::NodeKey;
use canopy_treemap::LayoutNode;

use crate::palette::{CategoryColors, INK, INTERIOR_ALPHA, ROOT_FILL, brighter, shade};

/// Text shown when there is nothing to lay out.
pub const PLACEHOLDER_TEXT: &str = "No articles to display";

/// Font request passed to a [`DrawSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    /// Size in CSS pixels.
    pub size: f64,
    /// Bold weight.
    pub bold: bool,
    /// Text colour.
    pub color: Color,
}

impl Font {
    const fn regular(size: f64) -> Self {
        Self {
            size,
            bold: false,
            color: INK,
        }
    }

    const fn bold(size: f64) -> Self {
        Self {
            size,
            bold: true,
            color: INK,
        }
    }
}

/// A 2D immediate-mode canvas.
///
/// Coordinates are CSS pixels; the surface applies the device pixel ratio
/// it was last resized with. Only the required methods must be provided.
pub trait DrawSurface {
    /// Sizes the backing store to `size × device_pixel_ratio` device pixels.
    fn resize(&mut self, size: Size, device_pixel_ratio: f64);

    /// Fills `rect` with `fill`.
    fn draw_rect(&mut self, rect: Rect, fill: Color);

    /// Draws `text` with its top-left corner at `origin`, shortening it
    /// with a trailing `...` so it fits within `max_width`.
    fn draw_clipped_text(&mut self, text: &str, origin: Point, max_width: f64, font: &Font);

    /// Clears the whole surface.
    fn clear(&mut self) {}

    /// Outlines `rect` with a one pixel line.
    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let _ = (rect, color);
    }

    /// Fills a dot of `radius` around `center`.
    fn fill_dot(&mut self, center: Point, radius: f64, color: Color) {
        let r = Rect::from_center_size(center, Size::new(2.0 * radius, 2.0 * radius));
        self.draw_rect(r, color);
    }
}

/// Paints layout nodes as a treemap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Renderer {
    metric: SizeMetric,
}

impl Renderer {
    /// Creates a renderer labelling leaves with `metric`.
    #[must_use]
    pub fn new(metric: SizeMetric) -> Self {
        Self { metric }
    }

    /// Paints `nodes` in order, highlighting the node keyed `hovered`.
    ///
    /// Zero-area nodes are skipped. An empty node set paints the
    /// placeholder text in the middle of the canvas.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        canvas: Size,
        device_pixel_ratio: f64,
        nodes: &[LayoutNode],
        hovered: Option<&NodeKey>,
    ) {
        surface.resize(canvas, device_pixel_ratio);
        surface.clear();

        if nodes.is_empty() {
            let origin = Point::new(canvas.width / 2.0 - 80.0, canvas.height / 2.0 - 7.0);
            let font = Font {
                color: ROOT_FILL,
                ..Font::regular(14.0)
            };
            surface.draw_clipped_text(PLACEHOLDER_TEXT, origin, canvas.width, &font);
            return;
        }

        let colors = CategoryColors::from_nodes(nodes);
        let maxima = leaf_maxima(nodes, self.metric);

        for node in nodes.iter().filter(|n| !n.is_degenerate()) {
            let fill = if node.is_leaf() && node.leaf.is_some() {
                self.leaf_fill(node, &colors, &maxima)
            } else if let Some(category) = &node.category {
                colors.base(category).with_alpha(INTERIOR_ALPHA)
            } else {
                ROOT_FILL.with_alpha(INTERIOR_ALPHA)
            };

            let rect = node.rect;
            surface.draw_rect(rect, fill);
            surface.stroke_rect(rect, INK);
            if hovered.is_some_and(|key| *key == NodeKey::of(node)) {
                surface.draw_rect(rect, brighter(fill, 0.8));
            }

            if node.leaf.is_some() {
                self.leaf_label(surface, node);
            } else {
                interior_label(surface, node);
            }
        }
    }

    fn leaf_fill(
        &self,
        node: &LayoutNode,
        colors: &CategoryColors,
        maxima: &HashMap<&str, f64>,
    ) -> Color {
        let category = node.category.as_deref().unwrap_or_default();
        let max = maxima.get(category).copied().unwrap_or(0.0);
        let value = node.leaf.as_ref().map_or(0.0, |l| self.metric.value(&l.metrics));
        shade(colors.base(category), value, max)
    }

    fn leaf_label<S: DrawSurface + ?Sized>(&self, surface: &mut S, node: &LayoutNode) {
        let Rect { x0: x, y0: y, .. } = node.rect;
        let (w, h) = (node.rect.width(), node.rect.height());

        if w > 80.0 && h > 45.0 {
            let title = Point::new(x + 5.0, y + 5.0);
            surface.draw_clipped_text(&node.name, title, w - 10.0, &Font::regular(12.0));
            if let Some(leaf) = &node.leaf {
                let value = self.metric.format_value(&leaf.metrics);
                let origin = Point::new(x + 5.0, y + 20.0);
                surface.draw_clipped_text(&value, origin, w - 10.0, &Font::regular(10.0));
            }
        } else if w > 40.0 && h > 25.0 {
            let origin = Point::new(x + 4.0, y + 4.0);
            surface.draw_clipped_text(&node.name, origin, w - 8.0, &Font::regular(11.0));
        } else if w > 20.0 && h > 15.0 {
            let origin = Point::new(x + 3.0, y + 3.0);
            let short = abbreviate(&node.name);
            surface.draw_clipped_text(&short, origin, w - 6.0, &Font::regular(9.0));
        } else if w > 10.0 && h > 10.0 {
            surface.fill_dot(node.rect.center(), 2.0, INK);
        }
    }
}

fn interior_label<S: DrawSurface + ?Sized>(surface: &mut S, node: &LayoutNode) {
    let (w, h) = (node.rect.width(), node.rect.height());
    if w > 50.0 && h > 25.0 {
        let origin = Point::new(node.rect.x0 + 5.0, node.rect.y0 + 5.0);
        surface.draw_clipped_text(&node.name, origin, w - 10.0, &Font::bold(14.0));
    }
}

/// First five characters, with `...` when anything was cut.
fn abbreviate(name: &str) -> String {
    let mut short: String = name.chars().take(5).collect();
    if short.len() < name.len() {
        short.push_str("...");
    }
    short
}

/// Largest metric value of the leaves of each category.
fn leaf_maxima(nodes: &[LayoutNode], metric: SizeMetric) -> HashMap<&str, f64> {
    let mut maxima: HashMap<&str, f64> = HashMap::new();
    for node in nodes {
        if let (Some(leaf), Some(category)) = (&node.leaf, &node.category) {
            let value = metric.value(&leaf.metrics);
            let max = maxima.entry(category.as_str()).or_insert(0.0);
            *max = max.max(value);
        }
    }
    maxima
}
