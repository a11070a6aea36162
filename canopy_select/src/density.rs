// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node-budget selection.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`

use canopy_treemap::LayoutNode;
use canopy_view::ViewportState;

use crate::cull::cull;

/// Budget for the number of nodes on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DensityPolicy {
    /// Target number of nodes to display at any zoom level.
    pub target_count: usize,
    /// Scales above this count as deep zoom.
    pub deep_zoom_scale: f64,
    /// Share of `target_count` given to leaves outside deep zoom.
    pub shallow_fraction: f64,
}

impl Default for DensityPolicy {
    fn default() -> Self {
        Self {
            target_count: 40,
            deep_zoom_scale: 2.0,
            shallow_fraction: 0.7,
        }
    }
}

impl DensityPolicy {
    /// Returns `true` if the budget is positive and the fraction lies in
    /// `(0, 1]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.target_count > 0
            && self.deep_zoom_scale.is_finite()
            && self.shallow_fraction > 0.0
            && self.shallow_fraction <= 1.0
    }

    /// Number of leaves kept when a selection is over budget and
    /// `category_count` categories own at least one kept leaf.
    ///
    /// Deep zoom hands the whole budget minus one slot per category to
    /// leaves. Shallower zoom keeps a fixed share so the category structure
    /// stays legible. Either way at least one leaf is kept.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "the shallow budget is a small non-negative count"
    )]
    pub fn leaf_budget(&self, scale: f64, category_count: usize) -> usize {
        if scale > self.deep_zoom_scale {
            self.target_count.saturating_sub(category_count).max(1)
        } else {
            ((self.target_count as f64 * self.shallow_fraction).floor() as usize).max(1)
        }
    }

    /// Caps an already culled node set.
    ///
    /// A set with at most `target_count` leaves is returned unchanged.
    /// Otherwise the root is dropped and leaves are taken heaviest first,
    /// ties in input order, for as long as they fit the [`leaf_budget`] of
    /// the categories they occupy. The categories owning a kept leaf come
    /// first, in input order; the others are dropped. At least the heaviest
    /// leaf always survives.
    ///
    /// [`leaf_budget`]: Self::leaf_budget
    #[must_use]
    pub fn limit(&self, nodes: Vec<LayoutNode>, scale: f64) -> Vec<LayoutNode> {
        let leaf_count = nodes.iter().filter(|n| is_content_leaf(n)).count();
        if leaf_count <= self.target_count {
            return nodes;
        }

        let (mut categories, mut leaves): (Vec<LayoutNode>, Vec<LayoutNode>) = nodes
            .into_iter()
            .filter(|n| n.is_category() || is_content_leaf(n))
            .partition(LayoutNode::is_category);
        leaves.sort_by(|a, b| b.value.total_cmp(&a.value));

        let mut owners: Vec<Option<String>> = Vec::new();
        let mut kept = 0;
        for leaf in &leaves {
            let new_owner = !owners.contains(&leaf.category);
            let charged = owners.len() + usize::from(new_owner);
            if kept >= self.leaf_budget(scale, charged) {
                break;
            }
            if new_owner {
                owners.push(leaf.category.clone());
            }
            kept += 1;
        }
        leaves.truncate(kept);
        categories.retain(|c| owners.contains(&c.category));

        categories.append(&mut leaves);
        categories
    }
}

/// Leaves below the root; a childless root is not content.
fn is_content_leaf(node: &LayoutNode) -> bool {
    node.is_leaf() && node.depth > 1
}

/// Culls `all` against `viewport` and caps the result with `policy`.
///
/// The scale deciding between deep and shallow budgets is the viewport's.
#[must_use]
pub fn select(all: &[LayoutNode], viewport: &ViewportState, policy: &DensityPolicy) -> Vec<LayoutNode> {
    policy.limit(cull(all, viewport), viewport.scale)
}
