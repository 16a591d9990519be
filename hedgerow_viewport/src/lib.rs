// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Viewport: scroll offset → index range computation.
//!
//! [`compute_viewport`] is the pure core of the scroll pipeline: given an
//! actual scroll offset, a viewport extent, the active
//! [`SpaceMap`](hedgerow_compression::SpaceMap), and an
//! [`ExtentModel`](hedgerow_extents::ExtentModel), it produces a
//! [`ViewportState`] — the visible index range, the render range (visible
//! plus overscan, clamped), and the coordinate bookkeeping a renderer needs
//! to position nodes in actual space.
//!
//! The result is recomputed from the absolute offset on every scroll event;
//! nothing is integrated from deltas, which keeps the computation correct
//! under compression where one actual pixel can span many virtual pixels.
//!
//! [`RangeMemo`] implements the render-skip memo: reconciliation is skipped
//! when neither end of the render range moved, and data mutations
//! invalidate the memo to force the next reconcile.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_compression::SpaceMap;
//! use hedgerow_extents::{ExtentModel, FixedExtents};
//! use hedgerow_viewport::compute_viewport;
//!
//! let model = FixedExtents::new(100, 40.0);
//! let map = SpaceMap::new(model.total_extent(), 500.0);
//!
//! let state = compute_viewport(2000.0, 500.0, &map, &model, 3);
//! assert_eq!(state.visible.start, 50);
//! assert_eq!(state.render.start, 47);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::ops::Range;

use hedgerow_compression::SpaceMap;
use hedgerow_extents::ExtentModel;

/// Viewport-derived state, recomputed on every scroll or resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Scroll offset in actual (element) space.
    pub scroll_actual: f64,
    /// Scroll offset translated into virtual (layout) space.
    pub scroll_virtual: f64,
    /// Extent of the viewport along the scroll axis.
    pub viewport_extent: f64,
    /// Total extent of the actual space.
    pub actual_extent: f64,
    /// Total extent of the virtual space.
    pub virtual_extent: f64,
    /// Whether scroll-space compression is active.
    pub is_compressed: bool,
    /// `actual_extent / virtual_extent`; `1.0` when uncompressed.
    pub ratio: f64,
    /// Indices whose entries intersect the viewport (half-open).
    pub visible: Range<usize>,
    /// Visible range widened by the overscan count, clamped to the strip
    /// (half-open).
    pub render: Range<usize>,
    /// Subtract from a virtual entry offset to get its actual position.
    ///
    /// Zero when uncompressed. When compression is active this equals
    /// `offset_of(render.start) − virtual_to_actual(offset_of(render.start))`,
    /// so the render range is positioned at its compressed location while
    /// the entries keep their exact relative spacing.
    pub position_bias: f64,
}

impl ViewportState {
    /// An inert state for an empty, unmeasured list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            scroll_actual: 0.0,
            scroll_virtual: 0.0,
            viewport_extent: 0.0,
            actual_extent: 0.0,
            virtual_extent: 0.0,
            is_compressed: false,
            ratio: 1.0,
            visible: 0..0,
            render: 0..0,
            position_bias: 0.0,
        }
    }
}

/// Computes the [`ViewportState`] for a scroll position.
///
/// `overscan` widens the visible range by that many entries on each side;
/// both ranges clamp to `[0, len)`. With a non-empty strip the entry at the
/// scroll offset is always part of the visible range, even when the
/// viewport extent is zero.
#[must_use]
pub fn compute_viewport(
    scroll_actual: f64,
    viewport_extent: f64,
    map: &SpaceMap,
    model: &impl ExtentModel,
    overscan: usize,
) -> ViewportState {
    let len = model.len();
    let compression = map.state();
    let scroll_actual = scroll_actual.max(0.0);
    let scroll_virtual = map.actual_to_virtual(scroll_actual);

    if len == 0 {
        return ViewportState {
            scroll_actual,
            scroll_virtual,
            viewport_extent: viewport_extent.max(0.0),
            actual_extent: compression.actual_extent,
            virtual_extent: compression.virtual_extent,
            is_compressed: compression.is_compressed,
            ratio: compression.ratio,
            visible: 0..0,
            render: 0..0,
            position_bias: 0.0,
        };
    }

    let viewport_extent = viewport_extent.max(0.0);
    let view_end = scroll_virtual + viewport_extent;

    let first = model.index_at_offset(scroll_virtual);
    let mut last = model.index_at_offset(view_end);
    // The entry containing `view_end` only counts when it actually starts
    // before the viewport's end.
    if last > first && model.offset_of(last) >= view_end {
        last -= 1;
    }
    let visible = first..(last + 1);

    let render_start = first.saturating_sub(overscan);
    let render_end = (last + 1 + overscan).min(len);
    let render = render_start..render_end;

    let position_bias = if compression.is_compressed {
        let range_start_virtual = model.offset_of(render.start);
        range_start_virtual - map.virtual_to_actual(range_start_virtual)
    } else {
        0.0
    };

    ViewportState {
        scroll_actual,
        scroll_virtual,
        viewport_extent,
        actual_extent: compression.actual_extent,
        virtual_extent: compression.virtual_extent,
        is_compressed: compression.is_compressed,
        ratio: compression.ratio,
        visible,
        render,
        position_bias,
    }
}

/// Render-skip memo over the last reconciled render range.
///
/// Mutated only by the reconcile path: [`RangeMemo::should_render`] records
/// the range it approves. Data mutations call [`RangeMemo::invalidate`] so
/// the next comparison cannot match.
#[derive(Debug, Clone, Default)]
pub struct RangeMemo {
    last: Option<Range<usize>>,
}

impl RangeMemo {
    /// Creates an empty memo; the first comparison always renders.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Returns `true` (and records `render`) when the range differs from
    /// the previously recorded one at either end.
    pub fn should_render(&mut self, render: &Range<usize>) -> bool {
        if self.last.as_ref() == Some(render) {
            return false;
        }
        self.last = Some(render.clone());
        true
    }

    /// Forgets the recorded range so the next comparison renders.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// The last range approved for rendering, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Range<usize>> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{RangeMemo, ViewportState, compute_viewport};
    use hedgerow_compression::SpaceMap;
    use hedgerow_extents::{ExtentModel, FixedExtents, VariableExtents};

    fn fixed_list() -> (FixedExtents, SpaceMap) {
        let model = FixedExtents::new(100, 40.0);
        let map = SpaceMap::new(model.total_extent(), 500.0);
        (model, map)
    }

    #[test]
    fn top_of_list_renders_leading_overscan_only() {
        let (model, map) = fixed_list();
        let state = compute_viewport(0.0, 500.0, &map, &model, 3);
        // 500px over 40px rows: items 0..=12 intersect.
        assert_eq!(state.visible, 0..13);
        assert_eq!(state.render, 0..16);
        assert_eq!(state.position_bias, 0.0);
        assert!(!state.is_compressed);
    }

    #[test]
    fn scrolled_range_is_centered_on_offset() {
        let (model, map) = fixed_list();
        let state = compute_viewport(2000.0, 500.0, &map, &model, 3);
        assert_eq!(state.scroll_virtual, 2000.0);
        assert_eq!(state.visible, 50..63);
        assert_eq!(state.render, 47..66);
    }

    #[test]
    fn bottom_of_list_clamps_trailing_overscan() {
        let (model, map) = fixed_list();
        // Max scroll: 4000 - 500.
        let state = compute_viewport(3500.0, 500.0, &map, &model, 3);
        assert_eq!(state.visible, 87..100);
        assert_eq!(state.render, 84..100);
    }

    #[test]
    fn exact_row_boundary_excludes_next_row() {
        let (model, map) = fixed_list();
        // Viewport [40, 440): rows 1..=10; row 11 starts exactly at the end.
        let state = compute_viewport(40.0, 400.0, &map, &model, 0);
        assert_eq!(state.visible, 1..11);
    }

    #[test]
    fn empty_strip_produces_empty_ranges() {
        let model = FixedExtents::new(0, 40.0);
        let map = SpaceMap::new(0.0, 500.0);
        let state = compute_viewport(123.0, 500.0, &map, &model, 3);
        assert_eq!(state.visible, 0..0);
        assert_eq!(state.render, 0..0);
    }

    #[test]
    fn zero_viewport_still_anchors_one_entry() {
        let (model, map) = fixed_list();
        let state = compute_viewport(2000.0, 0.0, &map, &model, 0);
        assert_eq!(state.visible, 50..51);
    }

    #[test]
    fn variable_extents_respect_prefix_sums() {
        // Extents 10, 20, 30, 40, 50 → offsets 0, 10, 30, 60, 100.
        let model = VariableExtents::from_fn(5, |i| (i as f64 + 1.0) * 10.0);
        let map = SpaceMap::new(model.total_extent(), 35.0);
        let state = compute_viewport(15.0, 35.0, &map, &model, 1);
        // Viewport [15, 50): entries 1 and 2 intersect.
        assert_eq!(state.visible, 1..3);
        assert_eq!(state.render, 0..4);
    }

    #[test]
    fn compressed_state_translates_and_biases() {
        let model = FixedExtents::new(1_000, 40.0);
        // Limit far below the 40k virtual extent.
        let map = SpaceMap::with_limit(model.total_extent(), 100.0, 1_000.0);
        assert!(map.is_compressed());

        let state = compute_viewport(500.0, 100.0, &map, &model, 2);
        assert!(state.is_compressed);
        assert_eq!(state.scroll_virtual, map.actual_to_virtual(500.0));
        // The anchor entry contains the virtual offset.
        let anchor = state.visible.start;
        assert!(model.offset_of(anchor) <= state.scroll_virtual);
        assert!(model.offset_of(anchor + 1) > state.scroll_virtual);
        // Bias repositions the range start at its compressed location.
        let start_virtual = model.offset_of(state.render.start);
        let repositioned = start_virtual - state.position_bias;
        assert!((repositioned - map.virtual_to_actual(start_virtual)).abs() < 1e-9);
    }

    #[test]
    fn memo_skips_unchanged_ranges() {
        let mut memo = RangeMemo::new();
        assert!(memo.should_render(&(0..10)));
        assert!(!memo.should_render(&(0..10)));
        assert!(memo.should_render(&(0..11)));
        assert!(memo.should_render(&(1..11)));
        assert!(!memo.should_render(&(1..11)));

        memo.invalidate();
        assert!(memo.should_render(&(1..11)));
        assert_eq!(memo.last(), Some(&(1..11)));
    }

    #[test]
    fn empty_state_is_inert() {
        let state = ViewportState::empty();
        assert_eq!(state.visible, 0..0);
        assert_eq!(state.render, 0..0);
        assert_eq!(state.ratio, 1.0);
    }
}
