// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Treemap: category hierarchies and their squarified layout.
//!
//! Two pieces live here:
//! - [`build_hierarchy`] groups enriched items by primary category into a
//!   two-level tree (root → category → leaf). Leaves carry their metrics but
//!   no precomputed weight; the weight is chosen at layout time, so switching
//!   metric never requires rebuilding the tree.
//! - [`TreemapLayout`] partitions a pixel region into nested rectangles whose
//!   areas are proportional to the summed leaf weights, keeping aspect ratios
//!   near the golden ratio.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_metrics::{Item, SizeMetric, enrich};
//! use canopy_treemap::{TreemapLayout, build_hierarchy};
//! use kurbo::Size;
//!
//! let items = vec![
//!     Item::new(1, "Neural nets").with_categories(["AI"]),
//!     Item::new(2, "Soil carbon").with_categories(["Earth"]),
//! ];
//! let root = build_hierarchy(&enrich(&items), "Articles");
//!
//! let layout = TreemapLayout::new(Size::new(800.0, 600.0));
//! let nodes = layout.compute(&root, |leaf| SizeMetric::Total.value(&leaf.metrics));
//!
//! // Breadth-first: the root, then both categories, then both leaves.
//! assert_eq!(nodes.len(), 5);
//! assert_eq!(nodes[0].depth, 0);
//! assert!(nodes[3].is_leaf());
//! ```
//!
//! ## Layout precondition
//!
//! Callers must not lay out a root without children; an empty item list is
//! expected to be rendered as a placeholder by the host instead. Nodes whose
//! proportional share rounds to nothing keep a zero-area rectangle in the
//! output; renderers skip them and hit testing can never reach them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hierarchy;
mod layout;
mod padding;

pub use hierarchy::{HierarchyNode, LeafData, build_hierarchy};
pub use layout::{LayoutNode, TreemapLayout};
pub use padding::TreemapPadding;
