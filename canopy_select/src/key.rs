// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use canopy_metrics::ItemId;
use canopy_treemap::LayoutNode;

/// Identity of a layout node, independent of where it was laid out.
///
/// Two selections with the same keys in the same order lay out identically,
/// which lets callers skip a re-layout when zooming does not change what is
/// selected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// The root of a layout.
    Root,
    /// A category, by label.
    Category(String),
    /// A leaf, by enclosing category and item id.
    Leaf {
        /// Category label.
        category: String,
        /// Item id.
        id: ItemId,
    },
}

impl NodeKey {
    /// Returns the key of `node`.
    #[must_use]
    pub fn of(node: &LayoutNode) -> Self {
        match (&node.leaf, &node.category) {
            (Some(leaf), category) => Self::Leaf {
                category: category.clone().unwrap_or_default(),
                id: leaf.id.clone(),
            },
            (None, Some(category)) => Self::Category(category.clone()),
            (None, None) => Self::Root,
        }
    }
}

/// Returns the keys of `nodes`, in order.
#[must_use]
pub fn keys(nodes: &[LayoutNode]) -> Vec<NodeKey> {
    nodes.iter().map(NodeKey::of).collect()
}
