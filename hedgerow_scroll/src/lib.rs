// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Scroll: scroll sources, velocity, and smooth scrolling.
//!
//! The scroll side of a virtualized list is stateful in three independent
//! ways, each covered by one module here:
//!
//! - [`ScrollSurface`]: the polymorphic scroll source. A list either owns an
//!   internal overflow viewport or rides the document window; the engine
//!   only ever talks to this trait.
//! - [`VelocityTracker`]: absolute scroll speed in px/ms as an exponential
//!   moving average over a short (~64 ms) window. Velocity gates lazy
//!   loading: a scrollbar drag can cross tens of thousands of entries in a
//!   frame, and fetching every intermediate range would be a request storm.
//! - [`ScrollActivity`]: "is the user still scrolling?" with a 150 ms idle
//!   timeout, used for the scrolling CSS state and for flushing deferred
//!   loads once scrolling stops.
//! - [`SmoothScroll`]: a quadratic ease-in-out animation toward a target
//!   offset, sampled by the host's frame callback and snapped on arrival.
//!
//! [`ScrollController`] composes the four over a surface and is what the
//! orchestrator owns.
//!
//! Nothing here reads a clock: every time-dependent method takes `now_ms`
//! from the host (`performance.now()` on the web), so behavior is exact and
//! deterministic under test.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod activity;
mod align;
mod controller;
mod smooth;
mod surface;
mod velocity;

pub use activity::{SCROLL_IDLE_TIMEOUT_MS, ScrollActivity};
pub use align::{ScrollAlign, aligned_offset};
pub use controller::{ScrollController, ScrollDirection};
pub use smooth::{DEFAULT_SMOOTH_DURATION_MS, ScrollBehavior, ScrollFrame, SmoothScroll};
pub use surface::ScrollSurface;
