// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exponential-moving-average scroll velocity.

/// Smoothing window for the velocity average, in milliseconds.
///
/// Roughly four frames at 60 Hz: long enough to absorb per-frame jitter,
/// short enough that a finished fling decays within a few events.
const VELOCITY_WINDOW_MS: f64 = 64.0;

/// Tracks absolute scroll velocity in px/ms.
///
/// Feed every observed `(time, offset)` pair into
/// [`VelocityTracker::sample`]. The reported velocity is an exponential
/// moving average of `|Δoffset| / Δtime` weighted toward the configured
/// window, so one large jump does not permanently dominate.
///
/// Until two samples exist there is no delta to measure:
/// [`VelocityTracker::velocity`] returns `0.0` and
/// [`VelocityTracker::is_tracking`] returns `false` during that ramp-up.
/// Callers that gate work on "velocity is high" must also check
/// `is_tracking`, otherwise the first event after a reset always looks
/// slow.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    window_ms: f64,
    last_sample: Option<(f64, f64)>,
    velocity: Option<f64>,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    /// Creates a tracker with the default smoothing window.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_window(VELOCITY_WINDOW_MS)
    }

    /// Creates a tracker with a custom smoothing window in milliseconds.
    #[must_use]
    pub const fn with_window(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_sample: None,
            velocity: None,
        }
    }

    /// Records a scroll sample.
    ///
    /// Samples with a non-positive time delta replace the stored sample
    /// without updating the average (the host clock did not advance).
    pub fn sample(&mut self, now_ms: f64, offset: f64) {
        let Some((last_ms, last_offset)) = self.last_sample else {
            self.last_sample = Some((now_ms, offset));
            return;
        };

        let dt = now_ms - last_ms;
        if dt <= 0.0 {
            self.last_sample = Some((now_ms, offset));
            return;
        }

        let instantaneous = (offset - last_offset).abs() / dt;
        // Rational smoothing: a delta as long as the window carries half the
        // weight, and long gaps converge to the instantaneous value. This
        // avoids transcendentals so the crate stays no_std-clean.
        let alpha = dt / (self.window_ms + dt);
        self.velocity = Some(match self.velocity {
            Some(previous) => previous + (instantaneous - previous) * alpha,
            None => instantaneous,
        });
        self.last_sample = Some((now_ms, offset));
    }

    /// The current velocity estimate in px/ms; `0.0` while ramping up.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity.unwrap_or(0.0)
    }

    /// Returns `true` once at least two samples have been observed.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.velocity.is_some()
    }

    /// Discards all samples, returning to the ramp-up state.
    pub fn reset(&mut self) {
        self.last_sample = None;
        self.velocity = None;
    }
}
