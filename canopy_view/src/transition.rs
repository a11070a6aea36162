// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Settle window opened by each viewport transition.
///
/// While the window is open, new gestures are ignored so an expensive
/// re-layout is not triggered twice for one conceptual zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionGate {
    settle_ms: u64,
    until: Option<u64>,
}

impl TransitionGate {
    /// Creates a closed gate whose windows last `settle_ms`.
    #[must_use]
    pub const fn new(settle_ms: u64) -> Self {
        Self {
            settle_ms,
            until: None,
        }
    }

    /// Opens a window starting at `now_ms`.
    pub fn begin(&mut self, now_ms: u64) {
        self.until = Some(now_ms.saturating_add(self.settle_ms));
    }

    /// Returns `true` while a window opened earlier is still running.
    #[must_use]
    pub fn is_active(&self, now_ms: u64) -> bool {
        self.until.is_some_and(|until| now_ms < until)
    }

    /// Closes any open window.
    pub fn clear(&mut self) {
        self.until = None;
    }
}
