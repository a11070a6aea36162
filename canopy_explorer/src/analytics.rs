// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Record emitted when a leaf is activated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationEvent {
    /// Category of the activated leaf.
    pub category: String,
    /// Display title of the activated leaf.
    pub label: String,
    /// Navigation target of the activated leaf.
    pub target_url: String,
}

/// Error reported by an [`AnalyticsSink`] that could not deliver an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryError {
    reason: String,
}

impl DeliveryError {
    /// Creates an error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason given by the sink.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "analytics event not delivered: {}", self.reason)
    }
}

impl core::error::Error for DeliveryError {}

/// Destination of activation events.
///
/// Delivery is best-effort: the explorer logs and discards any error, and
/// navigation proceeds either way.
pub trait AnalyticsSink {
    /// Records one activation.
    fn record(&mut self, event: &ActivationEvent) -> Result<(), DeliveryError>;
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for &mut S {
    fn record(&mut self, event: &ActivationEvent) -> Result<(), DeliveryError> {
        (**self).record(event)
    }
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn record(&mut self, _event: &ActivationEvent) -> Result<(), DeliveryError> {
        Ok(())
    }
}
