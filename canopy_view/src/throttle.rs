// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rate limiter admitting at most one event per interval.
///
/// Events arriving inside the window are dropped, not queued. The clock is
/// supplied by the caller on every call.
///
/// ```
/// use canopy_view::Throttle;
///
/// let mut t = Throttle::new(25);
/// assert!(t.try_acquire(100));
/// assert!(!t.try_acquire(110));
/// assert!(t.try_acquire(125));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    interval_ms: u64,
    last: Option<u64>,
}

impl Throttle {
    /// Creates a throttle admitting one event per `interval_ms`.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    /// Returns the configured interval.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Tries to admit an event at `now_ms`.
    ///
    /// The first event is always admitted. Afterwards an event is admitted
    /// once `interval_ms` has elapsed since the last admitted one; a clock
    /// that went backwards also admits.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        let admit = match self.last {
            Some(last) => now_ms
                .checked_sub(last)
                .is_none_or(|elapsed| elapsed >= self.interval_ms),
            None => true,
        };
        if admit {
            self.last = Some(now_ms);
        }
        admit
    }

    /// Forgets the last admitted event.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
