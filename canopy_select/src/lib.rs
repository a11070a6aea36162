// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Select: choosing, re-laying-out and hitting the visible nodes.
//!
//! Given the full layout of a treemap and the current [`ViewportState`],
//! this crate decides what is actually shown:
//! - [`cull`] keeps the nodes overlapping the visible region.
//! - [`DensityPolicy::limit`] caps the number of leaves, favouring the
//!   heaviest ones, with a different budget for deep and shallow zoom.
//! - [`local_hierarchy`] and [`relayout`] rebuild a small tree from the
//!   selection and lay it out across the whole canvas again, so a zoomed-in
//!   subset fills the screen instead of being magnified.
//! - [`hit_test`] maps a pointer position to the leaf under it.
//!
//! Everything here is a pure function of its inputs.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_metrics::{Item, SizeMetric, enrich};
//! use canopy_select::{DensityPolicy, hit_test, select};
//! use canopy_treemap::{TreemapLayout, build_hierarchy};
//! use canopy_view::ViewportState;
//! use kurbo::{Point, Size};
//!
//! let items: Vec<Item> = (0..100)
//!     .map(|i| Item::new(i, format!("Article {i}")).with_categories([["AI", "Earth"][i as usize % 2]]))
//!     .collect();
//! let canvas = Size::new(800.0, 600.0);
//! let all = TreemapLayout::new(canvas)
//!     .compute(&build_hierarchy(&enrich(&items), "Articles"), |l| SizeMetric::Total.value(&l.metrics));
//!
//! // Zoomed out: two categories and floor(40 * 0.7) leaves survive.
//! let visible = select(&all, &ViewportState::full(canvas), &DensityPolicy::default());
//! assert_eq!(visible.iter().filter(|n| n.is_leaf()).count(), 28);
//!
//! // Category header bands are not leaves.
//! assert!(hit_test(Point::new(10.0, 10.0), &visible).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`ViewportState`]: canopy_view::ViewportState

#![no_std]

extern crate alloc;

mod cull;
mod density;
mod hit;
mod key;
mod relayout;

pub use cull::cull;
pub use density::{DensityPolicy, select};
pub use hit::hit_test;
pub use key::{NodeKey, keys};
pub use relayout::{local_hierarchy, relayout};
