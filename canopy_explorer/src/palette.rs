// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category colours and value shading.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use peniko::Color;
use peniko::color::{Lab, Srgb};

use canopy_treemap::LayoutNode;

/// Base colours for categories.
///
/// `AI` and `Earth` always take the first two; every other category is
/// assigned from the rest in order of appearance.
pub const CATEGORY_PALETTE: [Color; 6] = [
    Color::from_rgb8(0x6a, 0x0d, 0xad),
    Color::from_rgb8(0x22, 0x8b, 0x22),
    Color::from_rgb8(0xff, 0x57, 0x33),
    Color::from_rgb8(0x34, 0x98, 0xdb),
    Color::from_rgb8(0xf1, 0xc4, 0x0f),
    Color::from_rgb8(0x9b, 0x59, 0xb6),
];

/// Fill of the root band.
pub const ROOT_FILL: Color = Color::from_rgb8(0x33, 0x33, 0x33);

/// Colour of labels and outlines.
pub const INK: Color = Color::WHITE;

/// Opacity of interior node fills.
pub const INTERIOR_ALPHA: f32 = 0.7;

const FIXED: [(&str, usize); 2] = [("AI", 0), ("Earth", 1)];
const OPEN_SLOTS: usize = CATEGORY_PALETTE.len() - FIXED.len();

/// Per-step factor of [`brighter`] and [`darker`].
const DARKER_STEP: f64 = 0.7;

/// Scales the sRGB channels by `1 / 0.7^k`, saturating at full intensity.
/// Alpha is unchanged.
#[must_use]
pub fn brighter(color: Color, k: f64) -> Color {
    scale_channels(color, DARKER_STEP.powf(-k))
}

/// Scales the sRGB channels by `0.7^k`. Alpha is unchanged.
#[must_use]
pub fn darker(color: Color, k: f64) -> Color {
    scale_channels(color, DARKER_STEP.powf(k))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "colour channels are stored as f32"
)]
fn scale_channels(color: Color, factor: f64) -> Color {
    let f = factor as f32;
    color.map(|r, g, b, a| {
        [
            (r * f).clamp(0.0, 1.0),
            (g * f).clamp(0.0, 1.0),
            (b * f).clamp(0.0, 1.0),
            a,
        ]
    })
}

/// Shade of `base` for a leaf worth `value` out of `max`.
///
/// Interpolates in Lab from two steps brighter (at `0`) to two steps darker
/// (at `max`), so heavier leaves read darker. A `max` of zero maps every
/// value to the bright end.
#[must_use]
pub fn shade(base: Color, value: f64, max: f64) -> Color {
    let t = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let light = brighter(base, 2.0).convert::<Lab>();
    let dark = darker(base, 2.0).convert::<Lab>();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "interpolation parameter is in [0, 1]"
    )]
    let t = t as f32;
    light.lerp_rect(dark, t).convert::<Srgb>()
}

/// Colour assignment for the categories of one node set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryColors {
    open: Vec<String>,
}

impl CategoryColors {
    /// Assigns colours to the categories present in `nodes`.
    #[must_use]
    pub fn from_nodes(nodes: &[LayoutNode]) -> Self {
        let mut open: Vec<String> = Vec::new();
        for node in nodes.iter().filter(|n| n.is_category()) {
            if fixed_slot(&node.name).is_none() && !open.contains(&node.name) {
                open.push(node.name.clone());
            }
        }
        Self { open }
    }

    /// Base colour of `category`.
    ///
    /// Categories not seen by [`from_nodes`](Self::from_nodes) take the first
    /// open slot.
    #[must_use]
    pub fn base(&self, category: &str) -> Color {
        let slot = fixed_slot(category).unwrap_or_else(|| {
            let ordinal = self.open.iter().position(|c| c == category).unwrap_or(0);
            FIXED.len() + ordinal % OPEN_SLOTS
        });
        CATEGORY_PALETTE[slot]
    }
}

fn fixed_slot(category: &str) -> Option<usize> {
    FIXED
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, slot)| *slot)
}
