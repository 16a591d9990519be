// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll idle tracking.

/// How long after the last scroll event a list counts as still scrolling,
/// in milliseconds.
pub const SCROLL_IDLE_TIMEOUT_MS: f64 = 150.0;

/// Tracks whether scrolling is in progress.
///
/// The host notes every scroll event; the list is "scrolling" until
/// [`SCROLL_IDLE_TIMEOUT_MS`] elapses without one. The host is expected to
/// arm a timer for [`ScrollActivity::idle_deadline`] and query
/// [`ScrollActivity::is_scrolling`] when it fires — the deadline moves
/// forward with every new event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollActivity {
    last_event_ms: Option<f64>,
}

impl ScrollActivity {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_event_ms: None,
        }
    }

    /// Records a scroll event at `now_ms`.
    pub fn note_scroll(&mut self, now_ms: f64) {
        self.last_event_ms = Some(now_ms);
    }

    /// Returns `true` while the idle timeout has not elapsed.
    #[must_use]
    pub fn is_scrolling(&self, now_ms: f64) -> bool {
        match self.last_event_ms {
            Some(last) => now_ms - last < SCROLL_IDLE_TIMEOUT_MS,
            None => false,
        }
    }

    /// The time at which the list becomes idle, if a scroll was observed.
    #[must_use]
    pub fn idle_deadline(&self) -> Option<f64> {
        self.last_event_ms.map(|last| last + SCROLL_IDLE_TIMEOUT_MS)
    }

    /// Forgets the last event, reporting idle immediately.
    pub fn reset(&mut self) {
        self.last_event_ms = None;
    }
}
