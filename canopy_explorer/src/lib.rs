// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Explorer: a headless, zoomable treemap of a content collection.
//!
//! [`Explorer`] wires the Canopy crates into one event-driven cycle:
//!
//! 1. Items are enriched with deterministic metrics and grouped by category.
//! 2. The full layout is computed once per item set, metric, or canvas size.
//! 3. Wheel and pinch gestures go through a throttled zoom controller; each
//!    accepted gesture culls the full layout to the viewport, caps it to a
//!    node budget and, when zoomed in, lays the survivors out again across
//!    the whole canvas.
//! 4. Rendering and hit testing read only the resulting visible set.
//!
//! Drawing goes through the [`DrawSurface`] trait and analytics through the
//! [`AnalyticsSink`] trait; navigation is returned to the host as a
//! [`NavigationIntent`] instead of being performed.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_explorer::{Explorer, ExplorerConfig};
//! use canopy_metrics::Item;
//! use kurbo::{Point, Size};
//!
//! let items: Vec<Item> = (0..200)
//!     .map(|i| {
//!         Item::new(i, format!("Article {i}"))
//!             .with_categories([["AI", "Earth", "Music"][i as usize % 3]])
//!             .with_slug(format!("article-{i}"))
//!     })
//!     .collect();
//!
//! let mut explorer = Explorer::new(Size::new(1200.0, 800.0), ExplorerConfig::default()).unwrap();
//! explorer.set_items(&items);
//! assert_eq!(explorer.visible_nodes().len(), 1 + 3 + 200);
//!
//! // Zoom in past the re-layout threshold: at most 40 leaves remain.
//! assert!(explorer.on_wheel(Point::new(600.0, 400.0), -400.0, 0));
//! let leaves = explorer.visible_nodes().iter().filter(|n| n.leaf.is_some()).count();
//! assert!(leaves <= 40);
//!
//! // Reset restores the full layout.
//! explorer.reset_zoom(1_000);
//! assert_eq!(explorer.visible_nodes(), explorer.all_nodes());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod analytics;
mod config;
mod explorer;
mod interaction;
pub mod palette;
mod render;

pub use analytics::{ActivationEvent, AnalyticsSink, DeliveryError, NoopAnalytics};
pub use config::{ConfigError, ExplorerConfig};
pub use explorer::Explorer;
pub use interaction::{HoverInfo, NavigationIntent};
pub use render::{DrawSurface, Font, PLACEHOLDER_TEXT, Renderer};
