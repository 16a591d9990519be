// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed scroll controller owned by the orchestrator.

use crate::activity::ScrollActivity;
use crate::smooth::{DEFAULT_SMOOTH_DURATION_MS, ScrollBehavior, ScrollFrame, SmoothScroll};
use crate::surface::ScrollSurface;
use crate::velocity::VelocityTracker;

/// Which way the last scroll event moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Toward larger offsets (down / right).
    Forward,
    /// Toward smaller offsets (up / left).
    Backward,
    /// No movement observed yet.
    #[default]
    None,
}

/// Scroll state for one list instance: a [`ScrollSurface`] plus velocity,
/// idle tracking, and at most one smooth-scroll animation.
///
/// The host forwards raw scroll events through
/// [`ScrollController::on_scroll_event`] and drives animations by calling
/// [`ScrollController::animate`] from its frame callback while
/// [`ScrollController::is_animating`] holds.
#[derive(Debug)]
pub struct ScrollController<S> {
    surface: S,
    velocity: VelocityTracker,
    activity: ScrollActivity,
    animation: Option<SmoothScroll>,
    last_offset: f64,
    direction: ScrollDirection,
    smooth_duration_ms: f64,
}

impl<S: ScrollSurface> ScrollController<S> {
    /// Wraps a scroll surface with the default smooth-scroll duration.
    #[must_use]
    pub fn new(surface: S) -> Self {
        let last_offset = surface.scroll_offset();
        Self {
            surface,
            velocity: VelocityTracker::new(),
            activity: ScrollActivity::new(),
            animation: None,
            last_offset,
            direction: ScrollDirection::None,
            smooth_duration_ms: DEFAULT_SMOOTH_DURATION_MS,
        }
    }

    /// Overrides the smooth-scroll duration in milliseconds.
    pub fn set_smooth_duration(&mut self, duration_ms: f64) {
        self.smooth_duration_ms = duration_ms.max(0.0);
    }

    /// Shared access to the underlying surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the underlying surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current scroll offset as reported by the surface.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.surface.scroll_offset()
    }

    /// Records a scroll event, returning the direction of travel.
    pub fn on_scroll_event(&mut self, now_ms: f64, offset: f64) -> ScrollDirection {
        self.velocity.sample(now_ms, offset);
        self.activity.note_scroll(now_ms);
        self.direction = if offset > self.last_offset {
            ScrollDirection::Forward
        } else if offset < self.last_offset {
            ScrollDirection::Backward
        } else {
            self.direction
        };
        self.last_offset = offset;
        self.direction
    }

    /// Absolute velocity in px/ms; `0.0` during ramp-up.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity.velocity()
    }

    /// Returns `true` once the velocity average has enough samples.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.velocity.is_tracking()
    }

    /// Returns `true` until the idle timeout elapses after the last event.
    #[must_use]
    pub fn is_scrolling(&self, now_ms: f64) -> bool {
        self.activity.is_scrolling(now_ms)
    }

    /// The instant the list becomes idle, if a scroll has been observed.
    #[must_use]
    pub fn idle_deadline(&self) -> Option<f64> {
        self.activity.idle_deadline()
    }

    /// Last observed scroll direction.
    #[must_use]
    pub const fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Scrolls to an absolute offset.
    ///
    /// [`ScrollBehavior::Auto`] applies immediately;
    /// [`ScrollBehavior::Smooth`] starts an animation, replacing any
    /// animation already in flight.
    pub fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior, now_ms: f64) {
        let offset = offset.clamp(0.0, self.surface.max_scroll_offset());
        match behavior {
            ScrollBehavior::Auto => {
                self.animation = None;
                self.surface.set_scroll_offset(offset);
            }
            ScrollBehavior::Smooth => {
                self.animation = Some(SmoothScroll::new(
                    self.surface.scroll_offset(),
                    offset,
                    now_ms,
                    self.smooth_duration_ms,
                ));
            }
        }
    }

    /// Scrolls by a relative delta with the given behavior.
    pub fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior, now_ms: f64) {
        self.scroll_to(self.surface.scroll_offset() + delta, behavior, now_ms);
    }

    /// Cancels any in-flight smooth scroll, leaving the offset where it is.
    pub fn cancel_scroll(&mut self) {
        self.animation = None;
    }

    /// Returns `true` while a smooth scroll is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advances the animation, applying the sampled offset to the surface.
    ///
    /// Returns the applied offset, or `None` when no animation is running.
    /// The host calls this from its frame callback and stops scheduling
    /// frames once [`ScrollController::is_animating`] turns false.
    pub fn animate(&mut self, now_ms: f64) -> Option<f64> {
        let animation = self.animation?;
        let offset = match animation.sample(now_ms) {
            ScrollFrame::Moving(offset) => offset,
            ScrollFrame::Done(offset) => {
                self.animation = None;
                offset
            }
        };
        self.surface.set_scroll_offset(offset);
        Some(offset)
    }

    /// The offset that pins the viewport to the end of the content.
    #[must_use]
    pub fn tail_offset(&self) -> f64 {
        self.surface.max_scroll_offset()
    }

    /// Returns `true` when the offset is within `epsilon` of the tail.
    ///
    /// The check is asymmetric — only positions *before* the tail count —
    /// matching the usual chat-log behavior of treating "near the bottom"
    /// as "at the bottom" so appends keep auto-scrolling.
    #[must_use]
    pub fn is_at_tail(&self, epsilon: f64) -> bool {
        self.surface.scroll_offset() + epsilon >= self.tail_offset()
    }

    /// Forgets velocity and idle state (after data resets or restores).
    pub fn reset_tracking(&mut self) {
        self.velocity.reset();
        self.activity.reset();
        self.direction = ScrollDirection::None;
        self.last_offset = self.surface.scroll_offset();
    }
}
