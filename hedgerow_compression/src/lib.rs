// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Compression: virtual↔actual scroll-coordinate mapping.
//!
//! Browser engines clamp the usable height of a single element at roughly
//! 16.7 million pixels. A list of a few million rows overflows that limit,
//! so its *virtual* coordinate space (offsets as if every row were laid out)
//! must be compressed into the *actual* coordinate space the scroll
//! machinery can represent.
//!
//! [`SpaceMap`] is the bidirectional mapping between the two spaces:
//!
//! - **Passthrough** when the virtual extent fits under the limit; both
//!   directions are the identity.
//! - **Compressed** otherwise: the bulk of the space maps proportionally
//!   (`a = v·A/V`), with a *snap zone* of one viewport extent at each end
//!   where the mapping is identity (top) or identity-plus-offset (bottom).
//!   The snap zones guarantee that the first and last items are reachable at
//!   exactly `a = 0` and `a = A − h`; pure proportional rounding would leave
//!   the final items stranded past the last representable scroll position.
//!
//! Outside the snap zones one actual pixel spans up to
//! [`SpaceMap::jump_granularity`] virtual pixels, so callers must re-derive
//! the visible range from the absolute offset after every scroll delta
//! rather than integrating deltas.
//!
//! The mapping is a pure function of the virtual extent and viewport extent.
//! Owners cache a [`SpaceMap`] per layout and rebuild it whenever the item
//! count or extents change.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_compression::SpaceMap;
//!
//! // 500k items × 40px = 20M virtual pixels: past the limit.
//! let map = SpaceMap::new(20_000_000.0, 500.0);
//! assert!(map.is_compressed());
//!
//! // Top snap zone: identity.
//! assert_eq!(map.virtual_to_actual(100.0), 100.0);
//!
//! // Proportional elsewhere.
//! let mid = map.virtual_to_actual(10_000_000.0);
//! assert!((map.actual_to_virtual(mid) - 10_000_000.0).abs() <= map.jump_granularity());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

/// Usable extent of a single scrollable element, in pixels.
///
/// This is an engine property (the ~16.7M-pixel clamp shared by the major
/// browser engines), not a tunable: virtual extents beyond it activate
/// compression.
pub const MAX_ELEMENT_EXTENT: f64 = 16_700_000.0;

/// Bidirectional mapping between virtual and actual scroll coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpaceMap {
    /// The virtual extent fits in one element; both directions are identity.
    Passthrough {
        /// Shared virtual/actual extent.
        extent: f64,
    },
    /// The virtual extent exceeds the element limit.
    Compressed(Compressed),
}

/// The compressed form of a [`SpaceMap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compressed {
    virtual_extent: f64,
    actual_extent: f64,
    snap_extent: f64,
}

/// Snapshot of a [`SpaceMap`] for owners and debugging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionState {
    /// Whether compression is active.
    pub is_compressed: bool,
    /// Extent of the actual (element) space.
    pub actual_extent: f64,
    /// Extent of the virtual (layout) space.
    pub virtual_extent: f64,
    /// `actual_extent / virtual_extent`; `1.0` in passthrough.
    pub ratio: f64,
}

impl SpaceMap {
    /// Builds the mapping for a layout of `virtual_extent` pixels viewed
    /// through `viewport_extent` pixels, using [`MAX_ELEMENT_EXTENT`].
    #[must_use]
    pub fn new(virtual_extent: f64, viewport_extent: f64) -> Self {
        Self::with_limit(virtual_extent, viewport_extent, MAX_ELEMENT_EXTENT)
    }

    /// Builds the mapping against an explicit element limit.
    ///
    /// The snap zones are one viewport wide, clamped so the two zones never
    /// overlap.
    #[must_use]
    pub fn with_limit(virtual_extent: f64, viewport_extent: f64, limit: f64) -> Self {
        let virtual_extent = virtual_extent.max(0.0);
        if virtual_extent <= limit {
            return Self::Passthrough {
                extent: virtual_extent,
            };
        }
        // Keep the zones strictly apart so the middle segment never
        // degenerates, even for absurd viewport/limit combinations.
        let snap_extent = viewport_extent.max(0.0).min(limit / 2.0 - 1.0).max(0.0);
        Self::Compressed(Compressed {
            virtual_extent,
            actual_extent: limit,
            snap_extent,
        })
    }

    /// Returns `true` when compression is active.
    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        matches!(self, Self::Compressed(_))
    }

    /// Extent of the actual space (what the element reports).
    #[must_use]
    pub const fn actual_extent(&self) -> f64 {
        match self {
            Self::Passthrough { extent } => *extent,
            Self::Compressed(c) => c.actual_extent,
        }
    }

    /// Extent of the virtual space (the full layout).
    #[must_use]
    pub const fn virtual_extent(&self) -> f64 {
        match self {
            Self::Passthrough { extent } => *extent,
            Self::Compressed(c) => c.virtual_extent,
        }
    }

    /// `actual / virtual`; `1.0` in passthrough.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        match self {
            Self::Passthrough { .. } => 1.0,
            Self::Compressed(c) => c.actual_extent / c.virtual_extent,
        }
    }

    /// Upper bound on virtual pixels spanned by one actual pixel; `1.0` in
    /// passthrough.
    ///
    /// This is the (rounded-up) slope of the proportional segment between
    /// the snap zones, `ceil((V − 2s) / (A − 2s))`, which approaches `V/A`
    /// for realistic viewport sizes.
    #[must_use]
    pub fn jump_granularity(&self) -> f64 {
        match self {
            Self::Passthrough { .. } => 1.0,
            Self::Compressed(c) => {
                let s = c.snap_extent;
                libm::ceil((c.virtual_extent - 2.0 * s) / (c.actual_extent - 2.0 * s))
            }
        }
    }

    /// Maps a virtual offset into actual space, clamped to `[0, A]`.
    #[must_use]
    pub fn virtual_to_actual(&self, offset: f64) -> f64 {
        match self {
            Self::Passthrough { extent } => offset.clamp(0.0, *extent),
            Self::Compressed(c) => {
                let v = offset.clamp(0.0, c.virtual_extent);
                let s = c.snap_extent;
                let a = if v < s {
                    v
                } else if v > c.virtual_extent - s {
                    v - (c.virtual_extent - c.actual_extent)
                } else {
                    // Proportional segment joining the snap zones: maps
                    // [s, V−s] onto [s, A−s], continuous at both seams.
                    s + (v - s) * (c.actual_extent - 2.0 * s) / (c.virtual_extent - 2.0 * s)
                };
                a.clamp(0.0, c.actual_extent)
            }
        }
    }

    /// Maps an actual offset back into virtual space, clamped to `[0, V]`.
    #[must_use]
    pub fn actual_to_virtual(&self, offset: f64) -> f64 {
        match self {
            Self::Passthrough { extent } => offset.clamp(0.0, *extent),
            Self::Compressed(c) => {
                let a = offset.clamp(0.0, c.actual_extent);
                let s = c.snap_extent;
                let v = if a < s {
                    a
                } else if a > c.actual_extent - s {
                    a + (c.virtual_extent - c.actual_extent)
                } else {
                    s + (a - s) * (c.virtual_extent - 2.0 * s) / (c.actual_extent - 2.0 * s)
                };
                v.clamp(0.0, c.virtual_extent)
            }
        }
    }

    /// Snapshot of the mapping for owners and debugging.
    #[must_use]
    pub fn state(&self) -> CompressionState {
        CompressionState {
            is_compressed: self.is_compressed(),
            actual_extent: self.actual_extent(),
            virtual_extent: self.virtual_extent(),
            ratio: self.ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_ELEMENT_EXTENT, SpaceMap};

    #[test]
    fn passthrough_is_identity() {
        let map = SpaceMap::new(4000.0, 500.0);
        assert!(!map.is_compressed());
        assert_eq!(map.virtual_to_actual(1234.0), 1234.0);
        assert_eq!(map.actual_to_virtual(1234.0), 1234.0);
        assert_eq!(map.ratio(), 1.0);
        assert_eq!(map.jump_granularity(), 1.0);
        // Clamped at both ends.
        assert_eq!(map.virtual_to_actual(-5.0), 0.0);
        assert_eq!(map.actual_to_virtual(9999.0), 4000.0);
    }

    #[test]
    fn activates_exactly_past_the_limit() {
        let at = SpaceMap::new(MAX_ELEMENT_EXTENT, 500.0);
        assert!(!at.is_compressed());
        let past = SpaceMap::new(MAX_ELEMENT_EXTENT + 1.0, 500.0);
        assert!(past.is_compressed());
        assert_eq!(past.actual_extent(), MAX_ELEMENT_EXTENT);
    }

    #[test]
    fn top_snap_zone_is_identity() {
        // Small limit keeps the numbers readable.
        let map = SpaceMap::with_limit(10_000.0, 100.0, 1_000.0);
        assert!(map.is_compressed());
        for v in [0.0, 1.0, 50.0, 99.0] {
            assert_eq!(map.virtual_to_actual(v), v);
            assert_eq!(map.actual_to_virtual(v), v);
        }
    }

    #[test]
    fn bottom_snap_zone_is_identity_plus_offset() {
        let map = SpaceMap::with_limit(10_000.0, 100.0, 1_000.0);
        // V - A = 9000; the last virtual pixels map to the last actual ones.
        assert_eq!(map.virtual_to_actual(10_000.0), 1_000.0);
        assert_eq!(map.virtual_to_actual(9_950.0), 950.0);
        assert_eq!(map.actual_to_virtual(1_000.0), 10_000.0);
        assert_eq!(map.actual_to_virtual(950.0), 9_950.0);
    }

    #[test]
    fn round_trip_exact_inside_snap_zones() {
        let map = SpaceMap::with_limit(10_000.0, 100.0, 1_000.0);
        for v in [0.0, 10.0, 99.0, 9_901.0, 9_999.0, 10_000.0] {
            assert_eq!(map.actual_to_virtual(map.virtual_to_actual(v)), v);
        }
    }

    #[test]
    fn round_trip_bounded_outside_snap_zones() {
        let map = SpaceMap::with_limit(10_000.0, 100.0, 1_000.0);
        let bound = map.jump_granularity();
        let mut v = 150.0;
        while v < 9_800.0 {
            let back = map.actual_to_virtual(map.virtual_to_actual(v));
            assert!(
                (back - v).abs() <= bound,
                "round trip of {v} drifted to {back}"
            );
            v += 137.0;
        }
    }

    #[test]
    fn proportional_region_is_linear_between_zones() {
        let map = SpaceMap::with_limit(20_000.0, 100.0, 1_000.0);
        assert_eq!(map.ratio(), 0.05);
        // The virtual midpoint lands on the actual midpoint.
        assert_eq!(map.virtual_to_actual(10_000.0), 500.0);
        assert_eq!(map.actual_to_virtual(500.0), 10_000.0);
        // Slope of the middle segment: (20_000 − 200) / (1_000 − 200).
        assert_eq!(map.jump_granularity(), 25.0);
    }

    #[test]
    fn state_snapshot_reports_extents() {
        let map = SpaceMap::with_limit(20_000.0, 100.0, 1_000.0);
        let state = map.state();
        assert!(state.is_compressed);
        assert_eq!(state.actual_extent, 1_000.0);
        assert_eq!(state.virtual_extent, 20_000.0);
        assert_eq!(state.ratio, 0.05);
    }

    #[test]
    fn oversized_viewport_cannot_overlap_snap_zones() {
        // Viewport wider than half the limit: zones clamp to A/2.
        let map = SpaceMap::with_limit(10_000.0, 900.0, 1_000.0);
        // Every offset still maps inside [0, A].
        for v in [0.0, 400.0, 5_000.0, 9_600.0, 10_000.0] {
            let a = map.virtual_to_actual(v);
            assert!((0.0..=1_000.0).contains(&a), "{v} mapped outside to {a}");
        }
    }
}
