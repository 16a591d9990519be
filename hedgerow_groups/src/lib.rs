// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Groups: header pseudo-entries spliced into the index space.
//!
//! A grouped list shows a header row before each run of items that share a
//! group key. Internally that means two index spaces:
//!
//! - the *data* space `0..N` of the caller's items, and
//! - the *layout* space `0..N+G` where each of the `G` groups contributes
//!   one header pseudo-entry before its items.
//!
//! [`GroupLayout`] owns the boundary table built by scanning the item keys
//! in order and provides O(log G) mappings between the two spaces.
//! [`GroupedExtents`] decorates an item
//! [`ExtentModel`](hedgerow_extents::ExtentModel) so that layout indices of
//! headers report the header extent, keeping the rest of the pipeline
//! (viewport math, compression, rendering) oblivious to grouping.
//! [`sticky_state`] computes which header is pinned to the viewport top and
//! the push-transition translate applied while the next header slides in.
//!
//! Items must arrive pre-sorted by group: a key that reappears after a
//! different key opens a *new* group. That is deliberate — the layout
//! reflects the sequence it is given, it does not sort.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_groups::{GroupLayout, LayoutEntry};
//!
//! // Items with keys A, A, A, B, B, C.
//! let keys = ["A", "A", "A", "B", "B", "C"];
//! let layout = GroupLayout::scan(keys.len(), |i| keys[i]);
//!
//! assert_eq!(layout.group_count(), 3);
//! assert_eq!(layout.layout_len(), 9);
//! assert_eq!(layout.data_to_layout(3), 5);
//! assert!(matches!(
//!     layout.entry(4),
//!     Some(LayoutEntry::Header { group }) if group.key == "B"
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod extents;
mod layout;
mod sticky;

pub use extents::GroupedExtents;
pub use layout::{GroupBoundary, GroupLayout, LayoutEntry};
pub use sticky::{StickySnapshot, sticky_state};
