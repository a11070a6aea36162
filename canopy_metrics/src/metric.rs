// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::enrich::Metrics;

/// Which metric sizes a treemap leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeMetric {
    /// [`Metrics::total`].
    #[default]
    Total,
    /// [`Metrics::unique`].
    Unique,
    /// [`Metrics::rate`].
    Rate,
}

impl SizeMetric {
    /// All metrics, in display order.
    pub const ALL: [Self; 3] = [Self::Total, Self::Unique, Self::Rate];

    /// Returns the stable lowercase name of this metric.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Unique => "unique",
            Self::Rate => "rate",
        }
    }

    /// Reads this metric out of a [`Metrics`] triple.
    #[must_use]
    pub fn value(self, metrics: &Metrics) -> f64 {
        match self {
            Self::Total => f64::from(metrics.total),
            Self::Unique => f64::from(metrics.unique),
            Self::Rate => metrics.rate,
        }
    }

    /// Formats a value of this metric for a label or tooltip.
    ///
    /// Rates read as percentages (`"8.4%"`); counts get thousands
    /// separators (`"1,234"`).
    #[must_use]
    pub fn format_value(self, metrics: &Metrics) -> String {
        match self {
            Self::Total => format_count(metrics.total),
            Self::Unique => format_count(metrics.unique),
            Self::Rate => format!("{}%", metrics.rate),
        }
    }
}

impl fmt::Display for SizeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`SizeMetric`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMetricError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown size metric {:?}; expected one of total, unique, rate",
            self.input
        )
    }
}

impl core::error::Error for ParseMetricError {}

impl FromStr for SizeMetric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMetricError {
                input: s.to_string(),
            })
    }
}

/// Formats an integer count with `,` thousands separators.
#[must_use]
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
