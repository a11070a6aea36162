// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end cycles through `Explorer` with recording collaborators.

use canopy_explorer::{
    ActivationEvent, AnalyticsSink, ConfigError, DeliveryError, DrawSurface, Explorer,
    ExplorerConfig, Font, PLACEHOLDER_TEXT,
};
use canopy_metrics::{Item, SizeMetric};
use canopy_treemap::LayoutNode;
use kurbo::{Point, Rect, Size};
use peniko::Color;

const CANVAS: Size = Size::new(1200.0, 800.0);

fn items(n: i64) -> Vec<Item> {
    let cats = ["AI", "Earth", "Music", "Film"];
    (0..n)
        .map(|i| {
            let item = Item::new(i, format!("Article {i}"))
                .with_categories([cats[usize::try_from(i).unwrap() % cats.len()]]);
            // Every seventh article has no page to link to.
            if i % 7 == 0 { item } else { item.with_slug(format!("article-{i}")) }
        })
        .collect()
}

fn explorer(n: i64) -> Explorer {
    let mut e = Explorer::new(CANVAS, ExplorerConfig::default()).unwrap();
    e.set_items(&items(n));
    e
}

fn leaves(nodes: &[LayoutNode]) -> impl Iterator<Item = &LayoutNode> {
    nodes.iter().filter(|n| n.leaf.is_some())
}

fn linked_leaf(nodes: &[LayoutNode]) -> &LayoutNode {
    leaves(nodes)
        .find(|n| !n.is_degenerate() && n.leaf.as_ref().unwrap().slug.is_some())
        .unwrap()
}

#[derive(Default)]
struct Recorder {
    events: Vec<ActivationEvent>,
}

impl AnalyticsSink for Recorder {
    fn record(&mut self, event: &ActivationEvent) -> Result<(), DeliveryError> {
        self.events.push(event.clone());
        Ok(())
    }
}

struct Offline;

impl AnalyticsSink for Offline {
    fn record(&mut self, _event: &ActivationEvent) -> Result<(), DeliveryError> {
        Err(DeliveryError::new("network unreachable"))
    }
}

#[derive(Debug, PartialEq)]
enum Op {
    Resize(Size, f64),
    Clear,
    Rect(Rect, Color),
    Text(String, Point, f64, Font),
}

#[derive(Default)]
struct Canvas {
    ops: Vec<Op>,
}

impl DrawSurface for Canvas {
    fn resize(&mut self, size: Size, device_pixel_ratio: f64) {
        self.ops.push(Op::Resize(size, device_pixel_ratio));
    }

    fn draw_rect(&mut self, rect: Rect, fill: Color) {
        self.ops.push(Op::Rect(rect, fill));
    }

    fn draw_clipped_text(&mut self, text: &str, origin: Point, max_width: f64, font: &Font) {
        self.ops.push(Op::Text(text.to_owned(), origin, max_width, *font));
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
}

#[test]
fn full_layout_is_shown_at_rest() {
    let e = explorer(120);
    assert_eq!(e.visible_nodes(), e.all_nodes());
    assert_eq!(e.visible_nodes()[0].name, "Articles");
    assert_eq!(leaves(e.visible_nodes()).count(), 120);
    assert_eq!(e.zoom_percent(), 100);
}

#[test]
fn zooming_in_relayouts_a_bounded_selection() {
    let mut e = explorer(400);
    assert!(e.on_wheel(Point::new(300.0, 300.0), -500.0, 0));
    assert!(e.viewport().scale > 1.2);

    let visible = e.visible_nodes();
    assert_eq!(visible[0].name, "Visible Articles");
    assert_eq!(visible[0].rect, Rect::from_origin_size(Point::ZERO, CANVAS));
    let count = leaves(visible).count();
    assert!(count > 0 && count <= 40, "{count} leaves visible");
}

#[test]
fn slight_zoom_keeps_full_layout() {
    let mut e = explorer(100);
    // 2^(60 * 0.004) = 1.18 snaps to 1.25, then a pinch back down to 1.0.
    assert!(e.on_wheel(Point::new(10.0, 10.0), -60.0, 0));
    assert_eq!(e.viewport().scale, 1.25);
    assert!(e.on_pinch(Point::new(10.0, 10.0), 0.8, 400));
    assert_eq!(e.viewport().scale, 1.0);
    assert_eq!(e.visible_nodes(), e.all_nodes());
}

#[test]
fn deep_zoom_over_many_categories_keeps_content() {
    let many: Vec<Item> = (0..1_000_i64)
        .map(|i| Item::new(i, format!("Article {i}")).with_categories([format!("Topic {}", i % 500)]))
        .collect();
    let mut e = Explorer::new(CANVAS, ExplorerConfig::default()).unwrap();
    e.set_items(&many);

    assert!(e.on_pinch(Point::new(600.0, 400.0), 2.25, 0));
    assert_eq!(e.viewport().scale, 2.25);
    assert!(!e.is_empty());
    let count = leaves(e.visible_nodes()).count();
    assert!(count > 0 && count <= 40, "{count} leaves visible");

    let mut canvas = Canvas::default();
    e.render(&mut canvas);
    assert!(!canvas.ops.iter().any(|op| matches!(op, Op::Text(t, ..) if t == PLACEHOLDER_TEXT)));
}

#[test]
fn burst_of_wheel_events_applies_once() {
    let mut e = explorer(100);
    assert!(e.on_wheel(Point::new(600.0, 400.0), -250.0, 5_000));
    let after_first = e.visible_nodes().to_vec();
    assert!(!e.on_wheel(Point::new(100.0, 100.0), -250.0, 5_010));
    assert_eq!(e.visible_nodes(), after_first.as_slice());
    assert_eq!(e.viewport().scale, 2.0);
}

#[test]
fn reset_restores_the_initial_layout() {
    let mut e = explorer(300);
    let initial = e.visible_nodes().to_vec();
    let initial_viewport = e.viewport();

    let mut now = 0;
    for (delta, x) in [(-300.0, 100.0), (-200.0, 900.0), (150.0, 500.0), (-700.0, 50.0)] {
        e.on_wheel(Point::new(x, 300.0), delta, now);
        now += 350;
    }
    assert_ne!(e.visible_nodes(), initial.as_slice());

    e.reset_zoom(now);
    assert_eq!(e.visible_nodes(), initial.as_slice());
    assert_eq!(e.viewport(), initial_viewport);
}

#[test]
fn metric_switch_resizes_leaves() {
    let mut e = explorer(60);
    let by_total: Vec<f64> = leaves(e.visible_nodes()).map(|n| n.value).collect();
    e.set_metric(SizeMetric::Rate);
    assert_eq!(e.metric(), SizeMetric::Rate);
    let by_rate: Vec<f64> = leaves(e.visible_nodes()).map(|n| n.value).collect();
    assert_ne!(by_total, by_rate);
    assert!(by_rate.iter().all(|v| *v < 20.0));
}

#[test]
fn resize_returns_to_full_canvas() {
    let mut e = explorer(80);
    e.on_pinch(Point::new(200.0, 200.0), 4.0, 0);
    e.resize(Size::new(640.0, 480.0));
    assert_eq!(e.viewport().scale, 1.0);
    assert_eq!(e.visible_nodes()[0].rect, Rect::new(0.0, 0.0, 640.0, 480.0));
    assert!(!e.is_transitioning(1));
}

#[test]
fn hover_reports_leaf_and_ignores_headers() {
    let mut e = explorer(50);
    let target = linked_leaf(e.visible_nodes()).clone();

    let info = e.pointer_move(target.rect.center()).unwrap();
    assert_eq!(info.name, target.name);
    assert_eq!(Some(&info.category), target.category.as_ref());
    assert!(e.wants_pointer_cursor());

    // The root label band.
    assert!(e.pointer_move(Point::new(10.0, 5.0)).is_none());
    assert!(!e.wants_pointer_cursor());
}

#[test]
fn activation_records_then_navigates() {
    let mut e =
        Explorer::with_analytics(CANVAS, ExplorerConfig::default(), Recorder::default()).unwrap();
    e.set_items(&items(50));
    let target = linked_leaf(e.visible_nodes()).clone();
    let slug = target.leaf.as_ref().unwrap().slug.clone().unwrap();

    let intent = e.activate(target.rect.center()).unwrap();
    assert_eq!(intent.target, format!("/posts/{slug}"));
    assert_eq!(intent.title, target.name);
    assert_eq!(
        e.analytics().events,
        [ActivationEvent {
            category: target.category.clone().unwrap(),
            label: target.name.clone(),
            target_url: intent.target.clone(),
        }]
    );
}

#[test]
fn inert_targets_record_nothing() {
    let mut e =
        Explorer::with_analytics(CANVAS, ExplorerConfig::default(), Recorder::default()).unwrap();
    e.set_items(&items(50));
    let unlinked = leaves(e.visible_nodes())
        .find(|n| !n.is_degenerate() && n.leaf.as_ref().unwrap().slug.is_none())
        .unwrap()
        .clone();

    assert!(e.activate(unlinked.rect.center()).is_none());
    assert!(e.activate(Point::new(10.0, 5.0)).is_none());
    assert!(e.analytics().events.is_empty());
}

#[test]
fn analytics_failure_does_not_block_navigation() {
    let mut e = Explorer::with_analytics(CANVAS, ExplorerConfig::default(), Offline).unwrap();
    e.set_items(&items(30));
    let target = linked_leaf(e.visible_nodes()).clone();
    assert!(e.activate(target.rect.center()).is_some());
}

#[test]
fn empty_collection_renders_placeholder() {
    let mut e = explorer(0);
    assert!(e.is_empty());
    assert!(!e.on_wheel(Point::ZERO, f64::NAN, 0));
    assert!(e.on_wheel(Point::ZERO, -300.0, 0));
    assert!(e.visible_nodes().is_empty());
    assert!(e.pointer_move(Point::new(5.0, 5.0)).is_none());

    e.set_device_pixel_ratio(2.0);
    let mut canvas = Canvas::default();
    e.render(&mut canvas);
    assert_eq!(canvas.ops[0], Op::Resize(CANVAS, 2.0));
    assert!(
        canvas
            .ops
            .iter()
            .any(|op| matches!(op, Op::Text(t, ..) if t == PLACEHOLDER_TEXT))
    );
    assert!(!canvas.ops.iter().any(|op| matches!(op, Op::Rect(..))));
}

#[test]
fn render_skips_degenerate_nodes_and_highlights_hover() {
    let mut e = explorer(200);
    let mut canvas = Canvas::default();
    e.render(&mut canvas);
    assert_eq!(canvas.ops[..2], [Op::Resize(CANVAS, 1.0), Op::Clear]);

    let drawn = e.visible_nodes().iter().filter(|n| !n.is_degenerate()).count();
    let rects = canvas.ops.iter().filter(|op| matches!(op, Op::Rect(..))).count();
    assert!(rects >= drawn);
    assert!(canvas.ops.iter().all(|op| match op {
        Op::Rect(r, _) => r.area() > 0.0,
        _ => true,
    }));

    // Category fills are translucent.
    let category = e.visible_nodes().iter().find(|n| n.is_category()).unwrap();
    let fill = canvas
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Rect(r, c) if *r == category.rect => Some(*c),
            _ => None,
        })
        .unwrap();
    assert!((fill.components[3] - 0.7).abs() < 1e-6);

    let target = linked_leaf(e.visible_nodes()).clone();
    e.pointer_move(target.rect.center());
    let mut hovered = Canvas::default();
    e.render(&mut hovered);
    let on_target = |ops: &[Op]| {
        ops.iter()
            .filter(|op| matches!(op, Op::Rect(r, _) if *r == target.rect))
            .count()
    };
    assert_eq!(on_target(&hovered.ops), on_target(&canvas.ops) + 1);
}

#[test]
fn invalid_configuration_is_rejected() {
    let mut config = ExplorerConfig::default();
    config.density.target_count = 0;
    assert_eq!(
        Explorer::new(CANVAS, config).err(),
        Some(ConfigError::Density)
    );
}

#[cfg(feature = "serde")]
#[test]
fn configuration_loads_from_json() {
    let config: ExplorerConfig =
        serde_json::from_str(r#"{ "density": { "target_count": 60 }, "link_prefix": "/a/" }"#).unwrap();
    assert_eq!(config.density.target_count, 60);
    assert_eq!(config.density.shallow_fraction, 0.7);
    assert_eq!(config.link_prefix, "/a/");
    assert_eq!(config.zoom, canopy_view::ZoomConfig::default());
}
