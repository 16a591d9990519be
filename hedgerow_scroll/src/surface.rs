// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The polymorphic scroll source.

/// A scrollable surface along one axis.
///
/// Implementations wrap whatever actually scrolls: an overflow element, the
/// document window, or an in-memory surface under test. Offsets are logical
/// pixels from the content start; implementations clamp writes to their own
/// scrollable range.
pub trait ScrollSurface {
    /// Current scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Sets the scroll offset.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Extent of the viewport along the scroll axis.
    fn viewport_extent(&self) -> f64;

    /// Maximum reachable scroll offset.
    ///
    /// Zero when the content fits inside the viewport.
    fn max_scroll_offset(&self) -> f64;

    /// Informs the surface of the current content extent.
    ///
    /// Browser-backed surfaces ignore this — the engine sizes a content
    /// element and the browser derives the scroll range from it. Surfaces
    /// without a layout engine behind them use it to answer
    /// [`ScrollSurface::max_scroll_offset`].
    fn set_content_extent(&mut self, extent: f64) {
        let _ = extent;
    }

    /// Adjusts the scroll offset by `delta`.
    fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset() + delta);
    }
}
