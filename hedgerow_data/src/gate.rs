// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity gating and the infinite-scroll trigger.

use core::ops::Range;

/// Velocity above which scroll-driven reads are deferred, in px/ms.
pub const CANCEL_LOAD_VELOCITY: f64 = 25.0;

/// Velocity above which the requested range is extended ahead of the
/// scroll direction, in px/ms.
pub const PRELOAD_VELOCITY: f64 = 10.0;

/// How many entries the preload extension adds in the scroll direction.
pub const PRELOAD_AHEAD: usize = 20;

/// Distance from the viewport to the growth edge that triggers a
/// load-more, in pixels.
pub const LOAD_MORE_THRESHOLD: f64 = 200.0;

/// What the scroll handler should do with a range it wants loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Too fast: merge the range into the pending range and load nothing.
    Defer,
    /// Load this range now (possibly extended by the preload window).
    Load(Range<usize>),
}

/// Velocity policy for scroll-driven loading.
#[derive(Debug, Clone, Copy)]
pub struct LoadGate {
    cancel_velocity: f64,
    preload_velocity: f64,
    preload_ahead: usize,
}

impl Default for LoadGate {
    fn default() -> Self {
        Self {
            cancel_velocity: CANCEL_LOAD_VELOCITY,
            preload_velocity: PRELOAD_VELOCITY,
            preload_ahead: PRELOAD_AHEAD,
        }
    }
}

impl LoadGate {
    /// Creates a gate with custom thresholds.
    #[must_use]
    pub const fn new(cancel_velocity: f64, preload_velocity: f64, preload_ahead: usize) -> Self {
        Self {
            cancel_velocity,
            preload_velocity,
            preload_ahead,
        }
    }

    /// Decides whether `range` should load now.
    ///
    /// `velocity` only counts once the tracker has ramped up
    /// (`is_tracking`); otherwise the first event after a reset would
    /// always sneak under the threshold. `forward` is the scroll
    /// direction: the preload extension grows the trailing edge when
    /// scrolling forward and the leading edge otherwise.
    #[must_use]
    pub fn plan(
        &self,
        range: Range<usize>,
        velocity: f64,
        is_tracking: bool,
        forward: bool,
        len: usize,
    ) -> GateDecision {
        if is_tracking && velocity > self.cancel_velocity {
            return GateDecision::Defer;
        }
        if is_tracking && velocity > self.preload_velocity {
            let extended = if forward {
                range.start..(range.end + self.preload_ahead).min(len)
            } else {
                range.start.saturating_sub(self.preload_ahead)..range.end
            };
            return GateDecision::Load(extended);
        }
        GateDecision::Load(range)
    }

    /// Returns `true` when velocity permits issuing a load-more.
    #[must_use]
    pub fn allows_load_more(&self, velocity: f64, is_tracking: bool) -> bool {
        !is_tracking || velocity <= self.cancel_velocity
    }
}
