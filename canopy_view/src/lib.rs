// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy View: viewport state and semantic-zoom control.
//!
//! This crate provides small, headless state machines for zooming a canvas:
//! - [`ViewportState`]: scale, anchor point, and the visible region in
//!   unzoomed layout coordinates.
//! - [`Throttle`]: a rate limiter with an explicit clock, `try_acquire(now)`.
//! - [`TransitionGate`]: a short settle window during which input is ignored.
//! - [`ZoomController`]: turns wheel and pinch gestures into viewport
//!   transitions, snapping scale to a fixed step inside a fixed range.
//!
//! Time is passed in by the caller as milliseconds from any monotonic
//! origin, so every behavior here can be tested without a real clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_view::{ZoomConfig, ZoomController};
//! use kurbo::{Point, Size};
//!
//! let mut zoom = ZoomController::new(Size::new(800.0, 600.0), ZoomConfig::default());
//!
//! // Scroll up over the middle of the canvas.
//! let state = zoom.on_wheel(Point::new(400.0, 300.0), -250.0, 1_000).unwrap();
//! assert_eq!(state.scale, 2.0);
//! assert_eq!(state.region.width(), 400.0);
//!
//! // A second event 10 ms later is dropped.
//! assert!(zoom.on_wheel(Point::new(400.0, 300.0), -250.0, 1_010).is_none());
//!
//! // Reset always returns to the full canvas.
//! let state = zoom.reset(1_020);
//! assert_eq!(state.scale, 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod throttle;
mod transition;
mod viewport;
mod zoom;

pub use throttle::Throttle;
pub use transition::TransitionGate;
pub use viewport::ViewportState;
pub use zoom::{ZoomConfig, ZoomController, ZoomGesture};
