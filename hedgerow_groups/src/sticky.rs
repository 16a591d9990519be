// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky-header selection and push-transition geometry.

use hedgerow_extents::ExtentModel;

use crate::extents::GroupedExtents;
use crate::layout::GroupBoundary;

/// What the sticky header node should show for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickySnapshot<'a, K> {
    /// The active group whose header is pinned.
    pub group: &'a GroupBoundary<K>,
    /// Translate along the scroll axis, in `[-sticky_extent, 0]`.
    ///
    /// Zero while the group has room; negative during the push transition
    /// as the next group's header slides underneath the pinned one.
    pub push_offset: f64,
}

/// Computes the sticky header for a scroll position, in virtual space.
///
/// The active group is the one containing the entry at `scroll_offset`.
/// When the next group's header is closer than `sticky_extent`, the pinned
/// node is pushed up by the overlap; hosts apply the returned
/// `push_offset` as a translate. Returns `None` for an empty layout.
///
/// The host should re-render the sticky node's content only when the
/// returned group changes; the push offset changes every frame during a
/// transition and is just a transform update.
#[must_use]
pub fn sticky_state<'a, M: ExtentModel, K: PartialEq>(
    extents: &'a GroupedExtents<M, K>,
    scroll_offset: f64,
    sticky_extent: f64,
) -> Option<StickySnapshot<'a, K>> {
    let layout = extents.layout();
    if layout.layout_len() == 0 {
        return None;
    }

    let scroll_offset = scroll_offset.max(0.0);
    let active_entry = extents.index_at_offset(scroll_offset);
    let group = layout.group_at_layout(active_entry)?;

    let mut push_offset = 0.0;
    if let Some(next) = layout.boundaries().get(group.group_index + 1) {
        let distance = extents.offset_of(next.header_layout_index) - scroll_offset;
        if distance < sticky_extent {
            push_offset = (distance - sticky_extent).max(-sticky_extent);
        }
    }

    Some(StickySnapshot { group, push_offset })
}

#[cfg(test)]
mod tests {
    use super::sticky_state;
    use crate::extents::GroupedExtents;
    use crate::layout::GroupLayout;
    use hedgerow_extents::FixedExtents;

    /// A,A,A,B,B,C with 40px items and 10px headers; hB starts at 130.
    fn grouped() -> GroupedExtents<FixedExtents, &'static str> {
        let keys = ["A", "A", "A", "B", "B", "C"];
        let layout = GroupLayout::scan(keys.len(), |i| keys[i]);
        GroupedExtents::with_fixed_header(FixedExtents::new(6, 40.0), layout, 10.0)
    }

    #[test]
    fn active_group_follows_scroll() {
        let model = grouped();
        let top = sticky_state(&model, 0.0, 10.0).unwrap();
        assert_eq!(top.group.key, "A");
        assert_eq!(top.push_offset, 0.0);

        let in_b = sticky_state(&model, 150.0, 10.0).unwrap();
        assert_eq!(in_b.group.key, "B");

        let in_c = sticky_state(&model, 240.0, 10.0).unwrap();
        assert_eq!(in_c.group.key, "C");
    }

    #[test]
    fn push_transition_engages_within_one_header() {
        let model = grouped();
        // hB starts at 130. At scroll 125 the distance is 5 < 10.
        let snapshot = sticky_state(&model, 125.0, 10.0).unwrap();
        assert_eq!(snapshot.group.key, "A");
        assert_eq!(snapshot.push_offset, -5.0);

        // At distance exactly the sticky extent, no push yet.
        let no_push = sticky_state(&model, 120.0, 10.0).unwrap();
        assert_eq!(no_push.push_offset, 0.0);
    }

    #[test]
    fn last_group_never_pushes() {
        let model = grouped();
        let snapshot = sticky_state(&model, 260.0, 10.0).unwrap();
        assert_eq!(snapshot.group.key, "C");
        assert_eq!(snapshot.push_offset, 0.0);
    }

    #[test]
    fn empty_layout_has_no_sticky_header() {
        let layout: GroupLayout<&str> = GroupLayout::scan(0, |_| "A");
        let model = GroupedExtents::with_fixed_header(FixedExtents::new(0, 40.0), layout, 10.0);
        assert_eq!(sticky_state(&model, 0.0, 10.0), None);
    }

    #[test]
    fn negative_scroll_clamps_to_top() {
        let model = grouped();
        let snapshot = sticky_state(&model, -50.0, 10.0).unwrap();
        assert_eq!(snapshot.group.key, "A");
    }
}
