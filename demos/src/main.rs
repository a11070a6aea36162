// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walk through a Canopy explorer session.
//!
//! Loads items from a JSON array (or synthesizes a collection), lays them out,
//! zooms in, hovers and clicks, then resets, printing what a host would see.
//!
//! Run:
//! - `cargo run -p canopy_demos -- [items.json] [total|unique|rate]`
//! - `RUST_LOG=debug cargo run -p canopy_demos` to watch the layout cycle.

mod text_surface;

use std::process::ExitCode;

use canopy_explorer::{ActivationEvent, AnalyticsSink, DeliveryError, Explorer, ExplorerConfig};
use canopy_metrics::{Item, ItemFilter, SizeMetric, distinct_categories};
use kurbo::{Point, Size};

use crate::text_surface::TextSurface;

/// Prints activation events instead of sending them anywhere.
#[derive(Debug, Default)]
struct PrintingSink {
    sent: usize,
}

impl AnalyticsSink for PrintingSink {
    fn record(&mut self, event: &ActivationEvent) -> Result<(), DeliveryError> {
        self.sent += 1;
        println!(
            "analytics: category={} label={:?} link={}",
            event.category, event.label, event.target_url
        );
        Ok(())
    }
}

fn synthetic_items() -> Vec<Item> {
    let categories = ["AI", "Earth", "Music", "Film", "Crypto", "Philosophy"];
    (0..500_i64)
        .map(|i| {
            let slot = usize::try_from(i * 11 + 2).unwrap_or_default() % categories.len();
            Item::new(i, format!("Article number {i}"))
                .with_categories([categories[slot]])
                .with_slug(format!("article-{i}"))
        })
        .collect()
}

fn load_items(path: Option<&str>) -> Result<Vec<Item>, String> {
    let Some(path) = path else {
        return Ok(synthetic_items());
    };
    let text = std::fs::read_to_string(path).map_err(|e| format!("reading {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("parsing {path}: {e}"))
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let path = args.next();
    let metric: SizeMetric = match args.next() {
        Some(name) => name.parse().map_err(|e| format!("{e}"))?,
        None => SizeMetric::default(),
    };

    let items = load_items(path.as_deref())?;
    let filter = ItemFilter {
        content_balance: 40.0,
        ..ItemFilter::default()
    };
    let items = filter.apply(&items);
    println!(
        "{} items after filtering, categories: {}",
        items.len(),
        distinct_categories(&items).join(", ")
    );

    let canvas = Size::new(1440.0, 694.0);
    let mut explorer =
        Explorer::with_analytics(canvas, ExplorerConfig::default(), PrintingSink::default())
            .map_err(|e| e.to_string())?;
    explorer.set_device_pixel_ratio(2.0);
    explorer.set_metric(metric);
    explorer.set_items(&items);

    let mut surface = TextSurface::default();
    explorer.render(&mut surface);
    println!("full layout by {metric}: {}", surface.summary());

    let pointer = Point::new(360.0, 240.0);
    if explorer.on_wheel(pointer, -400.0, 1_000) {
        explorer.render(&mut surface);
        println!("zoomed to {}%: {}", explorer.zoom_percent(), surface.summary());
        for label in surface.labels().iter().take(6) {
            println!("  {label}");
        }
    }
    if !explorer.on_wheel(pointer, -400.0, 1_010) {
        println!("second wheel event 10 ms later was dropped");
    }

    let target = explorer
        .visible_nodes()
        .iter()
        .find(|n| n.leaf.is_some() && !n.is_degenerate())
        .map(|n| n.rect.center());
    if let Some(point) = target {
        if let Some(info) = explorer.pointer_move(point) {
            println!("hover: {} ({})", info.name, info.category);
            for (label, value) in info.rows() {
                println!("  {label}: {value}");
            }
        }
        if let Some(intent) = explorer.activate(point) {
            println!("navigate to {} ({})", intent.target, intent.title);
        }
    }

    explorer.reset_zoom(2_000);
    explorer.render(&mut surface);
    println!(
        "after reset: {} rects, {} analytics events sent",
        surface.rect_count(),
        explorer.analytics().sent
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            log::error!("{message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
