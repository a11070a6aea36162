// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item filtering applied ahead of enrichment.
//!
//! Filters are plain values; storing a user's filter preferences is the
//! host's business.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`

use crate::item::Item;

/// Content balance value at which balance filtering is a no-op.
const NEUTRAL_BALANCE: f64 = 50.0;
/// Width of the Gaussian falloff around the balance target.
const BALANCE_TOLERANCE: f64 = 30.0;
/// Items weighted below this are dropped by balance filtering.
const BALANCE_THRESHOLD: f64 = 0.1;

/// Position of well-known categories on the analytical (0) to expressive
/// (100) axis. Unknown categories score 50.
const CATEGORY_SCORES: &[(&str, f64)] = &[
    ("AI", 15.0),
    ("Machine Learning", 10.0),
    ("Data Science", 5.0),
    ("Science", 10.0),
    ("Technology", 20.0),
    ("Engineering", 10.0),
    ("Research", 5.0),
    ("Mathematics", 0.0),
    ("Physics", 5.0),
    ("Computer Science", 15.0),
    ("Blockchain", 20.0),
    ("Web3", 25.0),
    ("Crypto", 20.0),
    ("Earth", 40.0),
    ("Environment", 45.0),
    ("Philosophy", 50.0),
    ("Psychology", 45.0),
    ("Education", 50.0),
    ("Business", 40.0),
    ("Economics", 35.0),
    ("Social Science", 50.0),
    ("Politics", 45.0),
    ("History", 50.0),
    ("Ethics", 55.0),
    ("Society", 50.0),
    ("Art", 90.0),
    ("Design", 80.0),
    ("Music", 95.0),
    ("Literature", 85.0),
    ("Creative Writing", 90.0),
    ("Film", 85.0),
    ("Photography", 75.0),
    ("Fashion", 85.0),
    ("Culture", 70.0),
];

/// Filter over an item list.
///
/// Every criterion is optional; the default filter keeps everything in its
/// original order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemFilter {
    /// Keep items carrying any of these labels. Empty keeps all.
    pub categories: Vec<String>,
    /// Case-insensitive search over title and summary. Sanitized first.
    pub search: String,
    /// Keep items published at or after this Unix-millisecond cutoff.
    pub published_since: Option<i64>,
    /// Preferred content balance in `[0, 100]`; `50` disables weighting.
    pub content_balance: f64,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            search: String::new(),
            published_since: None,
            content_balance: NEUTRAL_BALANCE,
        }
    }
}

impl ItemFilter {
    /// Returns `true` if no criterion would remove or reorder anything.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.categories.is_empty()
            && sanitize_query(&self.search).is_empty()
            && self.published_since.is_none()
            && self.content_balance == NEUTRAL_BALANCE
    }

    /// Applies the filter, returning the surviving items.
    ///
    /// Criteria apply in order: publication cutoff, categories, search, then
    /// content balance. Balance weighting reorders survivors by descending
    /// weight; ties keep their original order.
    #[must_use]
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        let query = sanitize_query(&self.search).to_lowercase();
        let mut kept: Vec<&Item> = items
            .iter()
            .filter(|item| match self.published_since {
                Some(cutoff) => item.published_at.is_some_and(|t| t >= cutoff),
                None => true,
            })
            .filter(|item| {
                self.categories.is_empty()
                    || item.categories.iter().any(|c| self.categories.contains(c))
            })
            .filter(|item| query.is_empty() || matches_query(item, &query))
            .collect();

        if self.content_balance != NEUTRAL_BALANCE {
            let target = self.content_balance;
            let mut weighted: Vec<(f64, &Item)> = kept
                .into_iter()
                .map(|item| (balance_weight(content_score(item), target), item))
                .filter(|(w, _)| *w >= BALANCE_THRESHOLD)
                .collect();
            weighted.sort_by(|a, b| b.0.total_cmp(&a.0));
            kept = weighted.into_iter().map(|(_, item)| item).collect();
        }

        kept.into_iter().cloned().collect()
    }
}

fn matches_query(item: &Item, query: &str) -> bool {
    item.title.to_lowercase().contains(query)
        || item
            .summary
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(query))
}

fn balance_weight(score: f64, target: f64) -> f64 {
    let distance = (score - target).abs();
    core::f64::consts::E.powf(-(distance * distance) / (2.0 * BALANCE_TOLERANCE * BALANCE_TOLERANCE))
}

/// Removes `< > " '` and surrounding whitespace from a search query.
#[must_use]
pub fn sanitize_query(query: &str) -> String {
    query
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Scores an item on the analytical–expressive axis as the mean of its
/// category scores. Items without categories score 50.
#[must_use]
pub fn content_score(item: &Item) -> f64 {
    if item.categories.is_empty() {
        return NEUTRAL_BALANCE;
    }
    let sum: f64 = item
        .categories
        .iter()
        .map(|c| {
            CATEGORY_SCORES
                .iter()
                .find(|(name, _)| name == c)
                .map_or(NEUTRAL_BALANCE, |(_, s)| *s)
        })
        .sum();
    #[allow(
        clippy::cast_precision_loss,
        reason = "category lists are tiny"
    )]
    let count = item.categories.len() as f64;
    sum / count
}

/// Returns every category label used by `items`, sorted and deduplicated.
#[must_use]
pub fn distinct_categories(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
