// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Local re-layout of a selection.

use alloc::string::String;
use alloc::vec::Vec;

use canopy_treemap::{HierarchyNode, LayoutNode, LeafData, TreemapLayout};

/// Rebuilds a two-level hierarchy from a selection of layout nodes.
///
/// Categories keep their order in `selected`; a leaf whose category node
/// is missing from the selection appends that category after the others.
/// Each leaf is attached to its category, and categories left without
/// leaves are dropped. The root is named `root_label`.
#[must_use]
pub fn local_hierarchy(selected: &[LayoutNode], root_label: &str) -> HierarchyNode {
    let mut categories: Vec<(String, Vec<HierarchyNode>)> = selected
        .iter()
        .filter(|n| n.is_category())
        .map(|n| (n.name.clone(), Vec::new()))
        .collect();

    for node in selected {
        let (Some(data), Some(category)) = (&node.leaf, &node.category) else {
            continue;
        };
        let leaf = HierarchyNode::leaf(node.name.clone(), data.clone());
        match categories.iter_mut().find(|(name, _)| name == category) {
            Some((_, children)) => children.push(leaf),
            None => categories.push((category.clone(), alloc::vec![leaf])),
        }
    }

    let children = categories
        .into_iter()
        .filter(|(_, leaves)| !leaves.is_empty())
        .map(|(name, leaves)| HierarchyNode::group(name, leaves))
        .collect();
    HierarchyNode::group(root_label, children)
}

/// Lays a selection out again across the whole of `layout`'s canvas.
///
/// Returns an empty list when the selection contains no leaves.
#[must_use]
pub fn relayout<F>(selected: &[LayoutNode], layout: &TreemapLayout, root_label: &str, weight: F) -> Vec<LayoutNode>
where
    F: Fn(&LeafData) -> f64,
{
    let root = local_hierarchy(selected, root_label);
    if root.children.is_empty() {
        log::debug!("local re-layout skipped: selection has no leaves");
        return Vec::new();
    }
    log::debug!(
        "local re-layout of {} leaves in {} categories",
        root.leaf_count(),
        root.children.len()
    );
    layout.compute(&root, weight)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use canopy_metrics::Metrics;
    use kurbo::{Rect, Size};

    use super::*;

    fn category(name: &str) -> LayoutNode {
        LayoutNode {
            name: String::from(name),
            depth: 1,
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            value: 0.0,
            category: Some(String::from(name)),
            leaf: None,
            child_count: 1,
        }
    }

    fn leaf(category: &str, id: i64, total: u32) -> LayoutNode {
        LayoutNode {
            name: alloc::format!("item {id}"),
            depth: 2,
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            value: f64::from(total),
            category: Some(String::from(category)),
            leaf: Some(LeafData {
                id: id.into(),
                metrics: Metrics {
                    total,
                    unique: total,
                    rate: 50.0,
                },
                slug: None,
            }),
            child_count: 0,
        }
    }

    #[test]
    fn groups_leaves_and_drops_empty_categories() {
        let selected = vec![
            category("Earth"),
            category("AI"),
            category("Music"),
            leaf("AI", 1, 10),
            leaf("Earth", 2, 20),
            leaf("AI", 3, 30),
            leaf("Space", 4, 40),
        ];
        let root = local_hierarchy(&selected, "Visible Articles");
        assert_eq!(root.name, "Visible Articles");
        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Earth", "AI", "Space"]);
        assert_eq!(root.children[1].leaf_count(), 2);
        assert_eq!(root.leaf_count(), 4);
    }

    #[test]
    fn relayout_fills_the_canvas() {
        let selected = vec![category("AI"), leaf("AI", 1, 10), leaf("AI", 2, 30)];
        let layout = TreemapLayout::new(Size::new(400.0, 300.0));
        let nodes = relayout(&selected, &layout, "Visible Articles", |l| f64::from(l.metrics.total));
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].rect, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(nodes[1].value, 40.0);
        assert_eq!(nodes[2].leaf.as_ref().unwrap().metrics.total, 30);
    }

    #[test]
    fn selection_without_leaves_yields_nothing() {
        let layout = TreemapLayout::new(Size::new(400.0, 300.0));
        assert!(relayout(&[category("AI")], &layout, "Visible Articles", |_| 1.0).is_empty());
    }
}
