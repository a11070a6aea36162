// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf` and `round`

use crate::throttle::Throttle;
use crate::transition::TransitionGate;
use crate::viewport::ViewportState;

/// Tuning for [`ZoomController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Scales are snapped to multiples of this step.
    pub snap_step: f64,
    /// Exponent applied per unit of wheel delta.
    pub wheel_sensitivity: f64,
    /// Minimum spacing between processed gestures.
    pub throttle_ms: u64,
    /// Length of the settle window after each transition.
    pub settle_ms: u64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 8.0,
            snap_step: 0.25,
            wheel_sensitivity: 0.004,
            throttle_ms: 25,
            settle_ms: 300,
        }
    }
}

impl ZoomConfig {
    /// Returns `true` if the range is ordered and positive and the snap step
    /// and sensitivity are usable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.min_scale > 0.0
            && self.min_scale <= self.max_scale
            && self.snap_step.is_finite()
            && self.snap_step > 0.0
            && self.wheel_sensitivity.is_finite()
    }

    /// Clamps `scale` into range and snaps it to the nearest step.
    ///
    /// The snapped value is clamped again so that a range whose bounds are
    /// not multiples of the step is still honoured.
    #[must_use]
    pub fn constrain(&self, scale: f64) -> f64 {
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        let snapped = (clamped / self.snap_step).round() * self.snap_step;
        snapped.clamp(self.min_scale, self.max_scale)
    }
}

/// A raw zoom gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomGesture {
    /// Scroll wheel; negative `delta_y` zooms in.
    Wheel {
        /// Vertical wheel delta in pixels.
        delta_y: f64,
    },
    /// Pinch; `factor > 1` zooms in.
    Pinch {
        /// Multiplicative scale change.
        factor: f64,
    },
}

impl ZoomGesture {
    fn factor(self, config: &ZoomConfig) -> f64 {
        match self {
            Self::Wheel { delta_y } => 2.0_f64.powf(-delta_y * config.wheel_sensitivity),
            Self::Pinch { factor } => factor,
        }
    }
}

/// Turns zoom gestures into viewport transitions.
///
/// Each accepted gesture produces exactly one new [`ViewportState`]. A
/// gesture is dropped, leaving the state untouched, when it arrives during
/// the settle window of the previous transition or inside the throttle
/// interval.
///
/// Gestures multiply into an unsnapped gesture scale, clamped to the zoom
/// range, which only the emitted state is snapped from. A run of small
/// steps therefore adds up even when no single step reaches the next snap
/// increment, and dropped gestures still count toward the next accepted
/// one.
#[derive(Clone, Debug)]
pub struct ZoomController {
    canvas: Size,
    config: ZoomConfig,
    state: ViewportState,
    gesture_scale: f64,
    throttle: Throttle,
    gate: TransitionGate,
}

impl ZoomController {
    /// Creates a controller at scale `1` over `canvas`.
    #[must_use]
    pub fn new(canvas: Size, config: ZoomConfig) -> Self {
        Self::with_throttle(canvas, config, Throttle::new(config.throttle_ms))
    }

    /// Creates a controller using a caller-supplied rate limiter.
    #[must_use]
    pub fn with_throttle(canvas: Size, config: ZoomConfig, throttle: Throttle) -> Self {
        Self {
            canvas,
            config,
            state: ViewportState::full(canvas),
            gesture_scale: config.min_scale,
            throttle,
            gate: TransitionGate::new(config.settle_ms),
        }
    }

    /// Current viewport state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Canvas size in pixels.
    #[must_use]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Unsnapped scale accumulated from every usable gesture.
    #[must_use]
    pub fn gesture_scale(&self) -> f64 {
        self.gesture_scale
    }

    /// Current scale as a whole percentage, for status readouts.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scale is clamped to a small positive range"
    )]
    pub fn zoom_percent(&self) -> u32 {
        (self.state.scale * 100.0).round() as u32
    }

    /// Returns `true` while the settle window of the last transition is open.
    #[must_use]
    pub fn is_transitioning(&self, now_ms: u64) -> bool {
        self.gate.is_active(now_ms)
    }

    /// Applies a gesture anchored at `pointer` (canvas pixels).
    ///
    /// Returns the new state, or `None` if the gesture was dropped.
    pub fn apply(&mut self, gesture: ZoomGesture, pointer: Point, now_ms: u64) -> Option<ViewportState> {
        let factor = gesture.factor(&self.config);
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("zoom gesture dropped: unusable factor {factor}");
            return None;
        }
        self.gesture_scale =
            (self.gesture_scale * factor).clamp(self.config.min_scale, self.config.max_scale);
        if self.gate.is_active(now_ms) {
            log::debug!("zoom gesture dropped: transition in progress");
            return None;
        }
        if !self.throttle.try_acquire(now_ms) {
            log::debug!("zoom gesture dropped: throttled");
            return None;
        }
        let scale = self.config.constrain(self.gesture_scale);
        self.state = ViewportState::anchored(self.canvas, scale, pointer);
        self.gate.begin(now_ms);
        Some(self.state)
    }

    /// Applies a wheel gesture.
    pub fn on_wheel(&mut self, pointer: Point, delta_y: f64, now_ms: u64) -> Option<ViewportState> {
        self.apply(ZoomGesture::Wheel { delta_y }, pointer, now_ms)
    }

    /// Applies a pinch gesture.
    pub fn on_pinch(&mut self, pointer: Point, factor: f64, now_ms: u64) -> Option<ViewportState> {
        self.apply(ZoomGesture::Pinch { factor }, pointer, now_ms)
    }

    /// Returns to scale `1` over the full canvas.
    ///
    /// Reset is never throttled or gated; it opens a new settle window.
    pub fn reset(&mut self, now_ms: u64) -> ViewportState {
        self.state = ViewportState::full(self.canvas);
        self.gesture_scale = self.config.min_scale;
        self.gate.begin(now_ms);
        self.state
    }

    /// Adopts a new canvas size and returns to scale `1`.
    pub fn resize(&mut self, canvas: Size) {
        self.canvas = canvas;
        self.state = ViewportState::full(canvas);
        self.gesture_scale = self.config.min_scale;
        self.gate.clear();
    }
}
