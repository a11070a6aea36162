// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Metrics: content items and their deterministic engagement metrics.
//!
//! This crate owns the leaf-most part of the Canopy pipeline:
//! - [`Item`]: a read-only content record as supplied by a content repository.
//! - [`enrich`]: derives a reproducible [`Metrics`] triple for every item from
//!   its identifier, so pre-rendered and client-rendered output match exactly.
//! - [`SizeMetric`]: which metric sizes a treemap leaf.
//! - [`ItemFilter`]: pure filtering over an item list (categories, search,
//!   publication cutoff, content balance) applied before enrichment.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_metrics::{Item, SizeMetric, enrich};
//!
//! let items = vec![
//!     Item::new(7, "Solar grids").with_categories(["Earth"]),
//!     Item::new("12", "Neural nets").with_categories(["AI"]),
//! ];
//! let enriched = enrich(&items);
//!
//! // Same identifier, same metrics: every time, everywhere.
//! assert_eq!(enriched, enrich(&items));
//! for e in &enriched {
//!     assert!(e.metrics.unique <= e.metrics.total);
//!     assert!(SizeMetric::Rate.value(&e.metrics) >= 0.0);
//! }
//! ```
//!
//! Identifiers that are not numeric fall back to a seed of `0`; this is not
//! an error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod enrich;
mod filter;
mod item;
mod metric;

pub use enrich::{Metrics, enrich, metrics_for_seed, seed_from_id, seeded_random};
pub use filter::{ItemFilter, content_score, distinct_categories, sanitize_query};
pub use item::{EnrichedItem, Item, ItemId, UNCATEGORIZED};
pub use metric::{ParseMetricError, SizeMetric, format_count};
