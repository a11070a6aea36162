// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use canopy_treemap::LayoutNode;

/// Returns the first leaf in `nodes` containing `pt`, edges included.
///
/// Interior nodes are never returned, so pointing at a category header
/// yields `None`. Zero-area leaves are skipped. Where rounding makes two
/// leaves share an edge, the earlier one in `nodes` wins.
#[must_use]
pub fn hit_test(pt: Point, nodes: &[LayoutNode]) -> Option<&LayoutNode> {
    let hit = nodes
        .iter()
        .filter(|node| node.leaf.is_some() && !node.is_degenerate())
        .find(|node| node.contains(pt));
    log::trace!(
        "hit test at ({}, {}): {}",
        pt.x,
        pt.y,
        hit.map_or("nothing", |n| n.name.as_str())
    );
    hit
}
