// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-cycle engine.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use canopy_metrics::{EnrichedItem, Item, SizeMetric, enrich};
use canopy_select::{NodeKey, hit_test, keys, relayout, select};
use canopy_treemap::{LayoutNode, LeafData, TreemapLayout, build_hierarchy};
use canopy_view::{ViewportState, ZoomController, ZoomGesture};

use crate::analytics::{AnalyticsSink, NoopAnalytics};
use crate::config::{ConfigError, ExplorerConfig};
use crate::interaction::{HoverInfo, NavigationIntent, activation};
use crate::render::{DrawSurface, Renderer};

/// A zoomable treemap over an item collection.
///
/// The explorer owns the whole cycle: items are enriched and grouped, the
/// full layout is cached, and every accepted zoom gesture selects a bounded
/// set of visible nodes from it, laying that set out again when zoomed in.
/// Rendering and hit testing only ever read the current visible set, which
/// is replaced wholesale on each cycle.
///
/// Time is supplied by the caller in milliseconds.
#[derive(Debug)]
pub struct Explorer<A = NoopAnalytics> {
    config: ExplorerConfig,
    layout: TreemapLayout,
    zoom: ZoomController,
    metric: SizeMetric,
    device_pixel_ratio: f64,
    items: Vec<EnrichedItem>,
    all: Vec<LayoutNode>,
    visible: Vec<LayoutNode>,
    selection: Option<Vec<NodeKey>>,
    hovered: Option<NodeKey>,
    analytics: A,
}

impl Explorer<NoopAnalytics> {
    /// Creates an empty explorer over `canvas` that discards analytics.
    pub fn new(canvas: Size, config: ExplorerConfig) -> Result<Self, ConfigError> {
        Self::with_analytics(canvas, config, NoopAnalytics)
    }
}

impl<A: AnalyticsSink> Explorer<A> {
    /// Creates an empty explorer over `canvas` reporting to `analytics`.
    pub fn with_analytics(
        canvas: Size,
        config: ExplorerConfig,
        analytics: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            layout: TreemapLayout::new(canvas).with_padding(config.padding),
            zoom: ZoomController::new(canvas, config.zoom),
            config,
            metric: SizeMetric::default(),
            device_pixel_ratio: 1.0,
            items: Vec::new(),
            all: Vec::new(),
            visible: Vec::new(),
            selection: None,
            hovered: None,
            analytics,
        })
    }

    /// Replaces the item collection and rebuilds the full layout.
    pub fn set_items(&mut self, items: &[Item]) {
        self.items = enrich(items);
        self.rebuild();
    }

    /// Switches the metric sizing the leaves and rebuilds the full layout.
    pub fn set_metric(&mut self, metric: SizeMetric) {
        if metric != self.metric {
            self.metric = metric;
            self.rebuild();
        }
    }

    /// Adopts a new canvas size; the zoom returns to the full canvas.
    pub fn resize(&mut self, canvas: Size) {
        self.layout = TreemapLayout::new(canvas).with_padding(self.config.padding);
        self.zoom.resize(canvas);
        self.rebuild();
    }

    /// Sets the device pixel ratio passed to the drawing surface.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
    }

    /// Applies a wheel gesture at `pointer`. Returns `true` if it was accepted.
    pub fn on_wheel(&mut self, pointer: Point, delta_y: f64, now_ms: u64) -> bool {
        self.on_gesture(ZoomGesture::Wheel { delta_y }, pointer, now_ms)
    }

    /// Applies a pinch gesture at `pointer`. Returns `true` if it was accepted.
    pub fn on_pinch(&mut self, pointer: Point, factor: f64, now_ms: u64) -> bool {
        self.on_gesture(ZoomGesture::Pinch { factor }, pointer, now_ms)
    }

    fn on_gesture(&mut self, gesture: ZoomGesture, pointer: Point, now_ms: u64) -> bool {
        if self.zoom.apply(gesture, pointer, now_ms).is_none() {
            return false;
        }
        self.refresh_visible();
        true
    }

    /// Returns to scale `1` and the full layout.
    pub fn reset_zoom(&mut self, now_ms: u64) {
        self.zoom.reset(now_ms);
        self.refresh_visible();
    }

    /// Hit-tests `pointer` and tracks the hovered leaf.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<HoverInfo> {
        let hit = hit_test(pointer, &self.visible);
        self.hovered = hit.map(NodeKey::of);
        hit.and_then(HoverInfo::of)
    }

    /// Clears the hover state.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Returns `true` while a leaf is hovered.
    #[must_use]
    pub fn wants_pointer_cursor(&self) -> bool {
        self.hovered.is_some()
    }

    /// Activates the leaf under `pointer`.
    ///
    /// A leaf with a slug records an activation event and yields the
    /// navigation intent. Analytics failures are logged and ignored.
    pub fn activate(&mut self, pointer: Point) -> Option<NavigationIntent> {
        let node = hit_test(pointer, &self.visible)?;
        let (intent, event) = activation(node, &self.config.link_prefix)?;
        if let Err(err) = self.analytics.record(&event) {
            log::debug!("{err}; navigating anyway");
        }
        Some(intent)
    }

    /// Paints the visible nodes onto `surface`.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        Renderer::new(self.metric).render(
            surface,
            self.zoom.canvas(),
            self.device_pixel_ratio,
            &self.visible,
            self.hovered.as_ref(),
        );
    }

    /// The nodes currently shown.
    #[must_use]
    pub fn visible_nodes(&self) -> &[LayoutNode] {
        &self.visible
    }

    /// The cached full layout.
    #[must_use]
    pub fn all_nodes(&self) -> &[LayoutNode] {
        &self.all
    }

    /// Returns `true` if there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.zoom.state()
    }

    /// Current zoom as a whole percentage.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        self.zoom.zoom_percent()
    }

    /// Returns `true` while input is being ignored after a transition.
    #[must_use]
    pub fn is_transitioning(&self, now_ms: u64) -> bool {
        self.zoom.is_transitioning(now_ms)
    }

    /// Metric sizing the leaves.
    #[must_use]
    pub fn metric(&self) -> SizeMetric {
        self.metric
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// The analytics sink.
    #[must_use]
    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    fn rebuild(&mut self) {
        let root = build_hierarchy(&self.items, &self.config.root_label);
        self.all = if root.children.is_empty() {
            log::debug!("full layout skipped: no items");
            Vec::new()
        } else {
            let nodes = self.layout.compute(&root, weight(self.metric));
            log::debug!(
                "full layout: {} nodes for {} items by {}",
                nodes.len(),
                self.items.len(),
                self.metric
            );
            nodes
        };
        self.selection = None;
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        let viewport = self.zoom.state();
        if self.all.is_empty() || viewport.scale <= self.config.relayout_threshold {
            self.selection = None;
            if self.visible != self.all {
                self.visible = self.all.clone();
                self.hovered = None;
            }
            return;
        }

        let selected = select(&self.all, &viewport, &self.config.density);
        let selected_keys = keys(&selected);
        if self.selection.as_ref() == Some(&selected_keys) {
            log::debug!("re-layout skipped: selection unchanged at scale {}", viewport.scale);
            return;
        }
        self.visible = relayout(
            &selected,
            &self.layout,
            &self.config.local_root_label,
            weight(self.metric),
        );
        self.selection = Some(selected_keys);
        self.hovered = None;
    }
}

fn weight(metric: SizeMetric) -> impl Fn(&LeafData) -> f64 {
    move |leaf| metric.value(&leaf.metrics)
}
