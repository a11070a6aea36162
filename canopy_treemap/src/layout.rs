// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squarified treemap layout.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::hierarchy::{HierarchyNode, LeafData};
use crate::padding::TreemapPadding;

/// Target aspect ratio of squarified rows: the golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// A hierarchy node annotated with its rectangle.
///
/// Layout output is immutable: every pass produces a fresh `Vec` that
/// replaces the previous one wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    /// Root label, category label, or leaf display title.
    pub name: String,
    /// `0` for the root, `1` for categories, `2` for leaves.
    pub depth: usize,
    /// Bounding box in canvas pixels. May have zero area.
    pub rect: Rect,
    /// Sum of descendant leaf weights (the leaf's own weight for leaves).
    pub value: f64,
    /// Name of the enclosing category; a category's own name for
    /// categories, and `None` for the root.
    pub category: Option<String>,
    /// Leaf payload; `None` for interior nodes.
    pub leaf: Option<LeafData>,
    /// Number of direct children in the laid-out hierarchy.
    pub child_count: usize,
}

impl LayoutNode {
    /// Returns `true` if this node had no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }

    /// Returns `true` for depth-1 nodes.
    #[must_use]
    pub fn is_category(&self) -> bool {
        self.depth == 1
    }

    /// Returns `true` if the rectangle has no area.
    ///
    /// Degenerate nodes come from proportional shares that round to nothing;
    /// they are kept in the output but never drawn or hit.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.rect.width() <= 0.0 || self.rect.height() <= 0.0
    }

    /// Returns `true` if `pt` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.rect.x0 && pt.x <= self.rect.x1 && pt.y >= self.rect.y0 && pt.y <= self.rect.y1
    }
}

/// Squarified treemap layout over a fixed canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreemapLayout {
    size: Size,
    padding: TreemapPadding,
}

impl TreemapLayout {
    /// Creates a layout for a canvas of `size` with default padding.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: TreemapPadding::default(),
        }
    }

    /// Replaces the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: TreemapPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the canvas size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the padding.
    #[must_use]
    pub fn padding(&self) -> TreemapPadding {
        self.padding
    }

    /// Lays out `root`, weighting each leaf with `weight`.
    ///
    /// Interior values are the sums of their leaf weights; non-finite and
    /// negative weights count as zero. Siblings are ordered by descending
    /// value (ties keep input order) before being packed.
    ///
    /// The result is breadth-first: the root, then every category, then
    /// every leaf. The output is deterministic for identical inputs.
    ///
    /// `root` should have at least one child; a childless root lays out as a
    /// single node covering the canvas.
    pub fn compute<F>(&self, root: &HierarchyNode, weight: F) -> Vec<LayoutNode>
    where
        F: Fn(&LeafData) -> f64,
    {
        let mut cells = Vec::with_capacity(root.leaf_count() + root.children.len() + 1);
        flatten(root, 0, None, &weight, &mut cells);
        sort_children(&mut cells);

        cells[0].rect = Rect::from_origin_size(Point::ZERO, self.size);
        let mut stack = alloc::vec![0_usize];
        while let Some(idx) = stack.pop() {
            self.position(&mut cells, idx);
            stack.extend(cells[idx].children.iter().rev().copied());
        }

        if self.padding.round {
            for cell in &mut cells {
                cell.rect = cell.rect.round();
            }
        }

        breadth_first(&cells)
    }

    fn position(&self, cells: &mut [Cell<'_>], idx: usize) {
        let p = if cells[idx].depth == 0 {
            0.0
        } else {
            self.padding.inner / 2.0
        };
        let r = cells[idx].rect;
        let rect = collapsed(r.x0 + p, r.y0 + p, r.x1 - p, r.y1 - p);
        cells[idx].rect = rect;
        if cells[idx].children.is_empty() {
            return;
        }

        let p = self.padding.inner / 2.0;
        let side = self.padding.outer - p;
        let inner = collapsed(
            rect.x0 + side,
            rect.y0 + self.padding.top - p,
            rect.x1 - side,
            rect.y1 - side,
        );
        squarify(cells, idx, inner);
    }
}

#[derive(Debug)]
struct Cell<'a> {
    node: &'a HierarchyNode,
    depth: usize,
    value: f64,
    category: Option<usize>,
    children: Vec<usize>,
    rect: Rect,
}

fn flatten<'a, F>(
    node: &'a HierarchyNode,
    depth: usize,
    category: Option<usize>,
    weight: &F,
    cells: &mut Vec<Cell<'a>>,
) -> usize
where
    F: Fn(&LeafData) -> f64,
{
    let idx = cells.len();
    let category = if depth == 1 { Some(idx) } else { category };
    let own = match (&node.leaf, node.is_leaf()) {
        (Some(data), true) => sanitize(weight(data)),
        _ => 0.0,
    };
    cells.push(Cell {
        node,
        depth,
        value: own,
        category,
        children: Vec::with_capacity(node.children.len()),
        rect: Rect::ZERO,
    });
    for child in &node.children {
        let child_idx = flatten(child, depth + 1, category, weight, cells);
        cells[idx].value += cells[child_idx].value;
        cells[idx].children.push(child_idx);
    }
    idx
}

fn sanitize(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 { w } else { 0.0 }
}

fn sort_children(cells: &mut [Cell<'_>]) {
    for idx in 0..cells.len() {
        let mut children = core::mem::take(&mut cells[idx].children);
        children.sort_by(|a, b| cells[*b].value.total_cmp(&cells[*a].value));
        cells[idx].children = children;
    }
}

fn collapsed(mut x0: f64, mut y0: f64, mut x1: f64, mut y1: f64) -> Rect {
    if x1 < x0 {
        x0 = (x0 + x1) / 2.0;
        x1 = x0;
    }
    if y1 < y0 {
        y0 = (y0 + y1) / 2.0;
        y1 = y0;
    }
    Rect::new(x0, y0, x1, y1)
}

/// Packs the children of `parent` into rows inside `bounds`.
///
/// Rows grow while adding the next child keeps the worst aspect ratio in the
/// row from getting worse; each finished row takes a strip along the
/// shorter side of the remaining space.
fn squarify(cells: &mut [Cell<'_>], parent: usize, bounds: Rect) {
    let children = core::mem::take(&mut cells[parent].children);
    let n = children.len();
    let Rect {
        mut x0,
        mut y0,
        x1,
        y1,
    } = bounds;
    let mut remaining = cells[parent].value;
    let mut i0 = 0;
    let mut i1 = 0;

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Skip ahead to the next non-empty child.
        let mut row_value;
        loop {
            row_value = cells[children[i1]].value;
            i1 += 1;
            if row_value != 0.0 || i1 >= n {
                break;
            }
        }
        let mut min_value = row_value;
        let mut max_value = row_value;
        let alpha = (dy / dx).max(dx / dy) / (remaining * PHI);
        let mut beta = row_value * row_value * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        while i1 < n {
            let value = cells[children[i1]].value;
            row_value += value;
            min_value = min_value.min(value);
            max_value = max_value.max(value);
            beta = row_value * row_value * alpha;
            let ratio = (max_value / beta).max(beta / min_value);
            if ratio > min_ratio {
                row_value -= value;
                break;
            }
            min_ratio = ratio;
            i1 += 1;
        }

        let row = &children[i0..i1];
        if dx < dy {
            let y2 = if remaining != 0.0 {
                y0 + dy * row_value / remaining
            } else {
                y1
            };
            dice(cells, row, row_value, Rect::new(x0, y0, x1, y2));
            y0 = y2;
        } else {
            let x2 = if remaining != 0.0 {
                x0 + dx * row_value / remaining
            } else {
                x1
            };
            slice(cells, row, row_value, Rect::new(x0, y0, x2, y1));
            x0 = x2;
        }
        remaining -= row_value;
        i0 = i1;
    }

    cells[parent].children = children;
}

/// Lays out `row` left to right across `strip`.
fn dice(cells: &mut [Cell<'_>], row: &[usize], row_value: f64, strip: Rect) {
    let k = if row_value != 0.0 {
        strip.width() / row_value
    } else {
        0.0
    };
    let mut x = strip.x0;
    for &child in row {
        let x_next = x + cells[child].value * k;
        cells[child].rect = Rect::new(x, strip.y0, x_next, strip.y1);
        x = x_next;
    }
}

/// Lays out `row` top to bottom down `strip`.
fn slice(cells: &mut [Cell<'_>], row: &[usize], row_value: f64, strip: Rect) {
    let k = if row_value != 0.0 {
        strip.height() / row_value
    } else {
        0.0
    };
    let mut y = strip.y0;
    for &child in row {
        let y_next = y + cells[child].value * k;
        cells[child].rect = Rect::new(strip.x0, y, strip.x1, y_next);
        y = y_next;
    }
}

fn breadth_first(cells: &[Cell<'_>]) -> Vec<LayoutNode> {
    let mut out = Vec::with_capacity(cells.len());
    let mut queue = VecDeque::from([0_usize]);
    while let Some(idx) = queue.pop_front() {
        let cell = &cells[idx];
        out.push(LayoutNode {
            name: cell.node.name.clone(),
            depth: cell.depth,
            rect: cell.rect,
            value: cell.value,
            category: cell.category.map(|c| cells[c].node.name.clone()),
            leaf: cell.node.leaf.clone(),
            child_count: cell.children.len(),
        });
        queue.extend(cell.children.iter().copied());
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use canopy_metrics::{ItemId, Metrics};

    use super::*;

    fn leaf(id: i64, weight: u32) -> HierarchyNode {
        HierarchyNode::leaf(
            alloc::format!("item {id}"),
            LeafData {
                id: ItemId::Number(id),
                metrics: Metrics {
                    total: weight,
                    unique: weight,
                    rate: 0.0,
                },
                slug: None,
            },
        )
    }

    fn total(leaf: &LeafData) -> f64 {
        f64::from(leaf.metrics.total)
    }

    #[test]
    fn single_leaf_insets_match_padding() {
        let root = HierarchyNode::group(
            "root",
            vec![HierarchyNode::group("cat", vec![leaf(1, 10)])],
        );
        let nodes = TreemapLayout::new(Size::new(100.0, 100.0)).compute(&root, total);

        assert_eq!(nodes[0].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
        // Root content box is (2.5, 21.5)–(97.5, 97.5); the category then
        // shrinks by half the inner gutter on each side.
        assert_eq!(nodes[1].rect, Rect::new(3.0, 22.0, 97.0, 97.0));
        assert_eq!(nodes[2].rect, Rect::new(6.0, 44.0, 94.0, 94.0));
        assert_eq!(nodes[2].category.as_deref(), Some("cat"));
        assert_eq!(nodes[1].category.as_deref(), Some("cat"));
        assert_eq!(nodes[0].category, None);
    }

    #[test]
    fn values_sum_and_siblings_sort_descending() {
        let root = HierarchyNode::group(
            "root",
            vec![
                HierarchyNode::group("small", vec![leaf(1, 5)]),
                HierarchyNode::group("big", vec![leaf(2, 10), leaf(3, 30)]),
            ],
        );
        let nodes = TreemapLayout::new(Size::new(400.0, 300.0)).compute(&root, total);

        assert_eq!(nodes[0].value, 45.0);
        assert_eq!(nodes[1].name, "big");
        assert_eq!(nodes[1].value, 40.0);
        assert_eq!(nodes[2].name, "small");
        // Leaves follow in category order, heaviest first within "big".
        let leaves: Vec<f64> = nodes[3..].iter().map(|n| n.value).collect();
        assert_eq!(leaves, [30.0, 10.0, 5.0]);
        assert_eq!(nodes[1].child_count, 2);
    }

    #[test]
    fn unpadded_areas_are_proportional() {
        let root = HierarchyNode::group(
            "root",
            vec![HierarchyNode::group(
                "cat",
                vec![leaf(1, 1), leaf(2, 2), leaf(3, 3), leaf(4, 4)],
            )],
        );
        let nodes = TreemapLayout::new(Size::new(200.0, 100.0))
            .with_padding(TreemapPadding::NONE)
            .compute(&root, total);

        let canvas = 200.0 * 100.0;
        for node in nodes.iter().filter(|n| n.is_leaf()) {
            let expected = canvas * node.value / 10.0;
            assert!(
                (node.rect.area() - expected).abs() < 1e-6,
                "{} has area {} expected {expected}",
                node.name,
                node.rect.area()
            );
        }
    }

    #[test]
    fn invalid_weights_count_as_zero() {
        let root = HierarchyNode::group(
            "root",
            vec![HierarchyNode::group("cat", vec![leaf(1, 10), leaf(2, 20)])],
        );
        let nodes = TreemapLayout::new(Size::new(100.0, 100.0)).compute(&root, |l| {
            if l.id == ItemId::Number(1) {
                f64::NAN
            } else {
                -1.0
            }
        });
        assert!(nodes.iter().all(|n| n.value == 0.0));
        assert!(nodes.iter().filter(|n| n.is_leaf()).all(LayoutNode::is_degenerate));
    }

    #[test]
    fn contains_includes_edges() {
        let node = LayoutNode {
            name: "n".into(),
            depth: 2,
            rect: Rect::new(10.0, 10.0, 20.0, 20.0),
            value: 1.0,
            category: None,
            leaf: None,
            child_count: 0,
        };
        assert!(node.contains(Point::new(10.0, 20.0)));
        assert!(!node.contains(Point::new(20.5, 15.0)));
    }
}
