// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use canopy_treemap::LayoutNode;
use canopy_view::ViewportState;

/// Returns the nodes whose rectangle overlaps the visible region.
///
/// Nodes of every depth are tested, so the root survives as long as any of
/// the canvas is visible. Input order is preserved. Touching edges do not
/// count as overlap.
#[must_use]
pub fn cull(nodes: &[LayoutNode], viewport: &ViewportState) -> Vec<LayoutNode> {
    nodes
        .iter()
        .filter(|node| viewport.intersects(node.rect))
        .cloned()
        .collect()
}
