// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use canopy_metrics::{Metrics, SizeMetric, UNCATEGORIZED};
use canopy_treemap::LayoutNode;

use crate::analytics::ActivationEvent;

/// Tooltip content for the leaf under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverInfo {
    /// Display title.
    pub name: String,
    /// Enclosing category.
    pub category: String,
    /// Total count.
    pub total: u32,
    /// Unique count.
    pub unique: u32,
    /// Rate in percent.
    pub rate: f64,
}

impl HoverInfo {
    /// Builds the tooltip of a leaf; `None` for interior nodes.
    #[must_use]
    pub fn of(node: &LayoutNode) -> Option<Self> {
        let leaf = node.leaf.as_ref()?;
        Some(Self {
            name: node.name.clone(),
            category: category_of(node),
            total: leaf.metrics.total,
            unique: leaf.metrics.unique,
            rate: leaf.metrics.rate,
        })
    }

    /// Formatted `(label, value)` rows for display.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, String); 3] {
        let metrics = Metrics {
            total: self.total,
            unique: self.unique,
            rate: self.rate,
        };
        [
            ("Total Clicks", SizeMetric::Total.format_value(&metrics)),
            ("Unique Clicks", SizeMetric::Unique.format_value(&metrics)),
            ("Click Rate", SizeMetric::Rate.format_value(&metrics)),
        ]
    }
}

/// Request to navigate to an activated leaf's target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    /// Link target, the configured prefix followed by the slug.
    pub target: String,
    /// Display title, for a loading indicator.
    pub title: String,
}

/// Builds the navigation intent and activation record of a leaf.
///
/// Interior nodes and leaves without a slug are inert.
pub(crate) fn activation(node: &LayoutNode, link_prefix: &str) -> Option<(NavigationIntent, ActivationEvent)> {
    let slug = node.leaf.as_ref()?.slug.as_deref()?;
    let target = format!("{link_prefix}{slug}");
    let event = ActivationEvent {
        category: category_of(node),
        label: node.name.clone(),
        target_url: target.clone(),
    };
    let intent = NavigationIntent {
        target,
        title: node.name.clone(),
    };
    Some((intent, event))
}

fn category_of(node: &LayoutNode) -> String {
    node.category.clone().unwrap_or_else(|| String::from(UNCATEGORIZED))
}
