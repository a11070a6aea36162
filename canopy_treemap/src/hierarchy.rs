// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use canopy_metrics::{EnrichedItem, ItemId, Metrics};
use hashbrown::HashMap;

/// Payload of a leaf: a reference back to the enriched item it stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafData {
    /// Identifier of the source item.
    pub id: ItemId,
    /// Metrics of the source item.
    pub metrics: Metrics,
    /// Navigation slug, if the item has one.
    pub slug: Option<String>,
}

/// A node of the two-level category tree.
///
/// Only leaves carry data. Interior values are never stored: the layout
/// sums leaf weights itself so they cannot drift from the leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct HierarchyNode {
    /// Root label, category label, or leaf display title.
    pub name: String,
    /// Child nodes; empty for leaves.
    pub children: Vec<HierarchyNode>,
    /// Leaf payload; `None` for the root and categories.
    pub leaf: Option<LeafData>,
}

impl HierarchyNode {
    /// Creates an interior node.
    pub fn group(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            children,
            leaf: None,
        }
    }

    /// Creates a leaf node.
    pub fn leaf(name: impl Into<String>, data: LeafData) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            leaf: Some(data),
        }
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of leaves under (or at) this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Self::leaf_count).sum()
        }
    }
}

/// Groups items by primary category into `root → category → leaf`.
///
/// Categories appear in order of first occurrence, and leaves keep the input
/// order within their category. An empty input yields a root with no
/// children, which must not be passed to the layout.
///
/// The tree carries no sizes. The metric that sizes each leaf is the weight
/// closure handed to [`TreemapLayout::compute`], so switching metrics reuses
/// the same hierarchy.
///
/// [`TreemapLayout::compute`]: crate::TreemapLayout::compute
#[must_use]
pub fn build_hierarchy(items: &[EnrichedItem], root_label: &str) -> HierarchyNode {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut categories: Vec<HierarchyNode> = Vec::new();

    for enriched in items {
        let item = &enriched.item;
        let category = item.primary_category();
        let slot = *slots.entry(category).or_insert_with(|| {
            categories.push(HierarchyNode::group(category.to_string(), Vec::new()));
            categories.len() - 1
        });
        categories[slot].children.push(HierarchyNode::leaf(
            item.display_title(),
            LeafData {
                id: item.id.clone(),
                metrics: enriched.metrics,
                slug: item.slug.clone(),
            },
        ));
    }

    HierarchyNode::group(root_label, categories)
}
