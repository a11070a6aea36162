// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic metric synthesis.
//!
//! Every item gets a `(total, unique, rate)` triple that depends only on its
//! identifier. There is no global random state: the seed is passed explicitly
//! into pure functions, so two renders of the same item (or a server render
//! and a client render) always agree.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`, `floor`, `round`

use crate::item::{EnrichedItem, Item, ItemId};

/// Lower bound of the synthetic `total` range.
const TOTAL_MIN: f64 = 100.0;
/// Width of the synthetic `total` range, so `total` lies in `[100, 2100)`.
const TOTAL_SPAN: f64 = 2000.0;

/// Engagement metrics derived for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Total activations, in `[100, 2100)`.
    pub total: u32,
    /// Unique activations, 70%–90% of `total`.
    pub unique: u32,
    /// Activation rate, rounded to one decimal place.
    pub rate: f64,
}

/// Sine-based deterministic generator: `frac(sin(seed) * 10000)`.
///
/// The result lies in `[0, 1)`.
#[must_use]
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

/// Derives a numeric seed from an identifier.
///
/// Numbers are used as-is. Text is read like a base-10 integer prefix:
/// leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit, and text with no leading digits seeds `0`. So does a
/// digit run too long to represent as a finite `f64`.
#[must_use]
pub fn seed_from_id(id: &ItemId) -> f64 {
    match id {
        // Seeds beyond 2^53 only need to be stable, not exact.
        ItemId::Number(n) => *n as f64,
        ItemId::Text(s) => parse_int_prefix(s).unwrap_or(0.0),
    }
}

fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: Option<f64> = None;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        let d = f64::from(b - b'0');
        value = Some(value.unwrap_or(0.0) * 10.0 + d);
    }
    value
        .filter(|v| v.is_finite())
        .map(|v| if negative { -v } else { v })
}

/// Computes the metric triple for a seed.
///
/// Three draws are taken at `seed`, `seed + 1` and `seed + 2`:
/// - `total = floor(draw0 * 2000) + 100`
/// - `unique = floor(total * (0.7 + draw1 * 0.2))`
/// - `rate = round1((unique / total) * 10 + draw2 * 2)`
#[must_use]
pub fn metrics_for_seed(seed: f64) -> Metrics {
    let total = (seeded_random(seed) * TOTAL_SPAN).floor() + TOTAL_MIN;
    let unique = (total * (0.7 + seeded_random(seed + 1.0) * 0.2)).floor();
    let rate = (unique / total) * 10.0 + seeded_random(seed + 2.0) * 2.0;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "both counts are whole numbers in [0, 2100)"
    )]
    let (total, unique) = (total as u32, unique as u32);
    Metrics {
        total,
        unique,
        rate: (rate * 10.0).round() / 10.0,
    }
}

/// Enriches every item with its deterministic metrics, preserving order.
#[must_use]
pub fn enrich(items: &[Item]) -> Vec<EnrichedItem> {
    items
        .iter()
        .map(|item| EnrichedItem {
            metrics: metrics_for_seed(seed_from_id(&item.id)),
            item: item.clone(),
        })
        .collect()
}
