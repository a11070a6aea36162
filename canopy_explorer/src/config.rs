// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use canopy_select::DensityPolicy;
use canopy_treemap::TreemapPadding;
use canopy_view::ZoomConfig;

/// Configuration of an [`Explorer`](crate::Explorer).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExplorerConfig {
    /// Treemap padding for both the full and local layouts.
    pub padding: TreemapPadding,
    /// Zoom range, snapping and input pacing.
    pub zoom: ZoomConfig,
    /// Node budget on screen.
    pub density: DensityPolicy,
    /// Scales above this lay the visible selection out again; at or below
    /// it the full layout is shown.
    pub relayout_threshold: f64,
    /// Name of the root of the full layout.
    pub root_label: String,
    /// Name of the root of a local re-layout.
    pub local_root_label: String,
    /// Prefix joined with a leaf's slug to form its navigation target.
    pub link_prefix: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            padding: TreemapPadding::default(),
            zoom: ZoomConfig::default(),
            density: DensityPolicy::default(),
            relayout_threshold: 1.2,
            root_label: String::from("Articles"),
            local_root_label: String::from("Visible Articles"),
            link_prefix: String::from("/posts/"),
        }
    }
}

impl ExplorerConfig {
    /// Checks every section, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.padding.is_valid() {
            return Err(ConfigError::Padding);
        }
        if !self.zoom.is_valid() {
            return Err(ConfigError::Zoom);
        }
        if !self.density.is_valid() {
            return Err(ConfigError::Density);
        }
        if !self.relayout_threshold.is_finite() {
            return Err(ConfigError::RelayoutThreshold);
        }
        Ok(())
    }
}

/// Reason an [`ExplorerConfig`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A padding inset is negative or not finite.
    Padding,
    /// The zoom range is inverted or non-positive, or the snap step or
    /// wheel sensitivity is unusable.
    Zoom,
    /// The node budget is zero or the shallow fraction is outside `(0, 1]`.
    Density,
    /// The re-layout threshold is not finite.
    RelayoutThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Padding => "treemap padding must be finite and non-negative",
            Self::Zoom => "zoom range must be positive and ordered, with a positive snap step",
            Self::Density => "node budget must be positive with a shallow fraction in (0, 1]",
            Self::RelayoutThreshold => "re-layout threshold must be finite",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ConfigError {}
