// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-space extent model over an item model plus header extents.

use alloc::vec::Vec;

use hedgerow_extents::ExtentModel;

use crate::layout::{GroupLayout, LayoutEntry};

/// Decorates an item [`ExtentModel`] with group headers.
///
/// The inner model stays in data space; this wrapper exposes layout space,
/// where each group's header layout index reports that group's header
/// extent. Header extents are resolved once at construction (fixed or
/// per-group) — switching the header sizing mode means rebuilding the
/// wrapper, there is no incremental path.
#[derive(Debug, Clone)]
pub struct GroupedExtents<M, K> {
    inner: M,
    layout: GroupLayout<K>,
    /// `header_prefix[g]` = summed extents of headers `0..g`; one extra
    /// entry so `header_prefix[G]` is the total header contribution.
    header_prefix: Vec<f64>,
}

impl<M: ExtentModel, K: PartialEq> GroupedExtents<M, K> {
    /// Wraps `inner` with headers sized by `header_extent` per group.
    #[must_use]
    pub fn new(
        inner: M,
        layout: GroupLayout<K>,
        mut header_extent: impl FnMut(&K) -> f64,
    ) -> Self {
        let mut header_prefix = Vec::with_capacity(layout.group_count() + 1);
        let mut acc = 0.0;
        header_prefix.push(acc);
        for boundary in layout.boundaries() {
            acc += header_extent(&boundary.key).max(0.0);
            header_prefix.push(acc);
        }
        Self {
            inner,
            layout,
            header_prefix,
        }
    }

    /// Wraps `inner` with a single fixed header extent.
    #[must_use]
    pub fn with_fixed_header(inner: M, layout: GroupLayout<K>, extent: f64) -> Self {
        Self::new(inner, layout, |_| extent)
    }

    /// The group layout this wrapper was built over.
    #[must_use]
    pub fn layout(&self) -> &GroupLayout<K> {
        &self.layout
    }

    /// Shared access to the item-space model.
    #[must_use]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Header extent of group `g`.
    fn header_extent_of(&self, group_index: usize) -> f64 {
        self.header_prefix[group_index + 1] - self.header_prefix[group_index]
    }

    /// Layout offset where group `g`'s header starts.
    fn group_start(&self, group_index: usize) -> f64 {
        let first_data = self.layout.boundaries()[group_index].first_data_index;
        self.inner.offset_of(first_data) + self.header_prefix[group_index]
    }
}

impl<M: ExtentModel, K: PartialEq> ExtentModel for GroupedExtents<M, K> {
    fn len(&self) -> usize {
        self.layout.layout_len()
    }

    fn extent_of(&self, index: usize) -> f64 {
        match self.layout.entry(index) {
            Some(LayoutEntry::Header { group }) => self.header_extent_of(group.group_index),
            Some(LayoutEntry::Item { data_index, .. }) => self.inner.extent_of(data_index),
            None => 0.0,
        }
    }

    fn offset_of(&self, index: usize) -> f64 {
        match self.layout.entry(index) {
            Some(LayoutEntry::Header { group }) => self.group_start(group.group_index),
            Some(LayoutEntry::Item { data_index, group }) => {
                self.inner.offset_of(data_index) + self.header_prefix[group.group_index + 1]
            }
            None => self.total_extent(),
        }
    }

    fn index_at_offset(&self, offset: f64) -> usize {
        let groups = self.layout.group_count();
        if groups == 0 || offset <= 0.0 {
            return 0;
        }

        // Find the last group starting at or before the offset.
        let mut low = 0;
        let mut high = groups;
        while low + 1 < high {
            let mid = low + (high - low) / 2;
            if self.group_start(mid) <= offset {
                low = mid;
            } else {
                high = mid;
            }
        }
        let group = &self.layout.boundaries()[low];

        // Inside the header band of that group?
        let header_end = self.group_start(low) + self.header_extent_of(low);
        if offset < header_end {
            return group.header_layout_index;
        }

        // Otherwise delegate to the item model in data space and clamp the
        // answer into this group's run.
        let data_index = self
            .inner
            .index_at_offset(offset - self.header_prefix[low + 1])
            .clamp(
                group.first_data_index,
                group.first_data_index + group.count - 1,
            );
        self.layout.data_to_layout(data_index)
    }

    fn total_extent(&self) -> f64 {
        self.inner.total_extent() + self.header_prefix[self.layout.group_count()]
    }
}
