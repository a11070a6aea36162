// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::enrich::Metrics;

/// Category used for items that carry no category labels.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Stable identifier of a content item.
///
/// Content repositories hand out either numeric or string identifiers; both
/// are accepted and both can seed the metric enricher.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemId {
    /// Integer identifier.
    Number(i64),
    /// Free-form identifier, typically a numeric string or a UUID.
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A content record as supplied by the content repository.
///
/// Items are read-only to Canopy. Only `id`, `title`, `categories` and `slug`
/// feed the visualization; `summary` and `published_at` are consulted by
/// [`ItemFilter`](crate::ItemFilter) only.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identifier, also the metric seed.
    pub id: ItemId,
    /// Display title; may contain hard line breaks.
    pub title: String,
    /// Category labels. The first one is the primary grouping key.
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<String>,
    /// Navigation target (slug). Items without one are inert.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: Option<String>,
    /// Short description used by search.
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: Option<String>,
    /// Publication time as Unix milliseconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub published_at: Option<i64>,
}

impl Item {
    /// Creates an item with no categories, slug, summary or publication time.
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            categories: Vec::new(),
            slug: None,
            summary: None,
            published_at: None,
        }
    }

    /// Replaces the category labels.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the navigation slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Sets the short description.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the publication time (Unix milliseconds).
    #[must_use]
    pub fn with_published_at(mut self, millis: i64) -> Self {
        self.published_at = Some(millis);
        self
    }

    /// Returns the primary grouping key: the first label, or [`UNCATEGORIZED`].
    #[must_use]
    pub fn primary_category(&self) -> &str {
        self.categories
            .first()
            .map(String::as_str)
            .unwrap_or(UNCATEGORIZED)
    }

    /// Returns the title with each line break, and the whitespace following
    /// it, collapsed into a single space.
    #[must_use]
    pub fn display_title(&self) -> String {
        let mut out = String::with_capacity(self.title.len());
        let mut chars = self.title.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\n' {
                out.push(' ');
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// An [`Item`] together with its derived [`Metrics`].
///
/// This is a derived cache: it is recomputed whenever the item set changes
/// and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedItem {
    /// The source item.
    pub item: Item,
    /// Metrics derived from the item's identifier.
    pub metrics: Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_category_falls_back_to_uncategorized() {
        let item = Item::new(1, "t");
        assert_eq!(item.primary_category(), UNCATEGORIZED);

        let item = item.with_categories(["AI", "Earth"]);
        assert_eq!(item.primary_category(), "AI");
    }

    #[test]
    fn display_title_collapses_line_breaks() {
        let item = Item::new(1, "Deep\n   sea\n\n\tvents");
        assert_eq!(item.display_title(), "Deep sea vents");

        let plain = Item::new(2, "Already  flat");
        assert_eq!(plain.display_title(), "Already  flat");
    }

    #[test]
    fn id_display_matches_source_form() {
        assert_eq!(ItemId::from(42).to_string(), "42");
        assert_eq!(ItemId::from("a-b").to_string(), "a-b");
    }
}
