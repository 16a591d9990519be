// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios over the in-memory host.

mod common;

use common::*;
use hedgerow_core::{
    ContainerTarget, GridConfig, GroupConfig, HeaderExtent, List, ListConfig,
};
use hedgerow_scroll::{ScrollAlign, ScrollBehavior};

/// Static list, fixed extents: 100 × 40px in a 500px container,
/// overscan 3.
#[test]
fn static_fixed_list() {
    let mut list = mount_fixed(100, 40.0, 500.0, 3);

    let mounted = mounted_indices(&list);
    // 13 visible plus up to 3 overscan below (none above at the top).
    assert!(
        (16..=19).contains(&mounted.len()),
        "mounted {} nodes",
        mounted.len()
    );
    assert_eq!(mounted[0], 0);

    user_scroll(&mut list, 2_000.0, 10.0);
    let mounted = mounted_indices(&list);
    assert!(
        mounted.iter().all(|&index| index >= 47),
        "expected no node above index 47, got {mounted:?}"
    );
    assert!(mounted.contains(&50));
    assert!(mounted.contains(&62));
}

/// Shrinking then growing the item set keeps identities coherent.
#[test]
fn set_items_shrink_grow() {
    let mut list = mount_fixed(0, 40.0, 500.0, 3);
    list.set_items((1..=5).collect());
    list.set_items((1..=2).collect());
    list.set_items((1..=10).collect());

    let ids = mounted_ids(&list);
    assert_eq!(ids.len(), 10);
    let mut expected: Vec<String> = (1..=10).map(|v| v.to_string()).collect();
    expected.sort();
    assert_eq!(ids, expected);

    // Content sizer reflects 10 × 40px.
    let content = content_height(&list);
    assert_eq!(content, "400px");
}

/// Half a million rows: virtual space exceeds the element limit, yet
/// any index remains reachable.
#[test]
fn compressed_half_million() {
    let mut list = mount_fixed(500_000, 40.0, 500.0, 3);
    let state = list.viewport_state();
    assert!(state.is_compressed);
    assert_eq!(state.virtual_extent, 20_000_000.0);
    assert!(state.actual_extent < state.virtual_extent);

    list.scroll_to_index(250_000, ScrollAlign::Center, ScrollBehavior::Auto, 0.0);
    let mounted = mounted_indices(&list);
    assert!(!mounted.is_empty());
    for index in &mounted {
        assert!(
            index.abs_diff(250_000) <= 100,
            "index {index} too far from the target"
        );
    }

    list.scroll_to_index(499_999, ScrollAlign::End, ScrollBehavior::Auto, 16.0);
    assert!(mounted_indices(&list).contains(&499_999));

    // And back to the top, exactly.
    list.scroll_to_index(0, ScrollAlign::Start, ScrollBehavior::Auto, 32.0);
    assert_eq!(mounted_indices(&list)[0], 0);
    assert_eq!(list.viewport_state().scroll_actual, 0.0);
}

/// Grouped list: headers are spliced into the mounted sequence and the
/// sticky header tracks the active group.
#[test]
fn grouped_list_headers_and_sticky() {
    let groups = ["A", "A", "A", "B", "B", "C"];
    let item = item_config(40.0);
    let mut config = ListConfig::new(ContainerTarget::Selector("#list".into()), item);
    config.items = (0..6).collect();
    config.groups = Some(GroupConfig {
        key_of: Box::new(move |value, _| groups[*value as usize].to_string()),
        header_extent: HeaderExtent::Fixed(10.0),
        header_template: Box::new(|key| format!("header-{key}")),
    });
    let mut list = List::mount(host(300.0, 500.0), config).unwrap();

    // Layout: [hA, 0, 1, 2, hB, 3, 4, hC, 5] — all nine fit.
    assert_eq!(mounted_indices(&list), (0..9).collect::<Vec<_>>());

    let dom = list.host().dom();
    let header = dom.find_by_attribute(list.root(), "data-index", "4")[0];
    assert_eq!(dom.content(&header), Some("header-B"));
    let item_node = dom.find_by_attribute(list.root(), "data-index", "5")[0];
    assert_eq!(dom.content(&item_node), Some("item-3"));
    // hB sits below header A (10) and items 0-2 (120).
    assert_eq!(dom.transform(&header), Some((0.0, 130.0)));

    // The sticky node shows the active group and pushes near the next
    // header: at scroll 125, hB (at 130) is 5px away against a 10px
    // header.
    let sticky = sticky_node(&list);
    assert_eq!(dom.content(&sticky), Some("header-A"));
    user_scroll(&mut list, 125.0, 10.0);
    let dom = list.host().dom();
    assert_eq!(dom.content(&sticky), Some("header-A"));
    assert_eq!(dom.transform(&sticky), Some((0.0, -5.0)));

    // Past hB the sticky swaps content and sits flush again.
    user_scroll(&mut list, 150.0, 30.0);
    let dom = list.host().dom();
    assert_eq!(dom.content(&sticky), Some("header-B"));
    assert_eq!(dom.transform(&sticky), Some((0.0, 0.0)));
}

/// Grid: 4 columns, 10px gap, 300px container.
#[test]
fn grid_four_columns() {
    let item = item_config(40.0);
    let mut config = ListConfig::new(ContainerTarget::Selector("#list".into()), item);
    config.items = (0..10).collect();
    config.grid = Some(GridConfig {
        columns: 4,
        gap: 10.0,
    });
    let list = List::mount(host(300.0, 500.0), config).unwrap();

    let dom = list.host().dom();
    let cell = dom.find_by_attribute(list.root(), "data-index", "5")[0];
    // Row 1 (after a 40px row plus the 10px gap), column 1 at 77.5px.
    assert_eq!(dom.transform(&cell), Some((77.5, 50.0)));
    assert_eq!(dom.width(&cell), Some(67.5));

    // Every cell carries the explicit column width.
    for index in 0..10 {
        let node = dom.find_by_attribute(list.root(), "data-index", &index.to_string())[0];
        assert_eq!(dom.width(&node), Some(67.5));
    }
}

/// Scroll events emit `Scroll` always and `RangeChange` only on range
/// movement.
#[test]
fn scroll_events_and_range_memo() {
    let mut list = mount_fixed(100, 40.0, 500.0, 3);
    let events = record_events(&mut list);

    user_scroll(&mut list, 10.0, 10.0);
    user_scroll(&mut list, 2_000.0, 26.0);

    let events = events.borrow();
    let scrolls = events
        .iter()
        .filter(|e| matches!(e, hedgerow_core::ListEvent::Scroll { .. }))
        .count();
    let range_changes: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            hedgerow_core::ListEvent::RangeChange { start, end } => Some((*start, *end)),
            _ => None,
        })
        .collect();
    assert_eq!(scrolls, 2);
    // A 10px nudge keeps the same render range; only the jump moves it.
    assert_eq!(range_changes, [(47, 66)]);
}

/// Smooth scrolling animates through frame ticks and lands exactly.
#[test]
fn smooth_scroll_reaches_target() {
    let mut list = mount_fixed(100, 40.0, 500.0, 3);
    list.scroll_to_offset(1_000.0, ScrollBehavior::Smooth, 0.0);
    assert!(list.is_animating());

    list.tick(150.0);
    assert_eq!(list.viewport_state().scroll_actual, 500.0);
    assert!(list.is_animating());

    list.tick(300.0);
    assert_eq!(list.viewport_state().scroll_actual, 1_000.0);
    assert!(!list.is_animating());
    assert!(mounted_indices(&list).contains(&25));
}

/// Snapshots restore both the anchor position and the selection.
#[test]
fn snapshot_round_trip() {
    let mut list = mount_fixed(100, 40.0, 500.0, 3);
    user_scroll(&mut list, 2_010.0, 10.0);
    let snapshot = list.snapshot();
    assert_eq!(snapshot.index, 50);
    assert_eq!(snapshot.offset_in_item, 10.0);

    user_scroll(&mut list, 0.0, 30.0);
    list.restore(&snapshot, 50.0);
    assert_eq!(list.viewport_state().scroll_virtual, 2_010.0);
    assert!(mounted_indices(&list).contains(&50));

    // Out-of-range snapshots saturate instead of failing.
    let wild = hedgerow_core::Snapshot {
        index: 10_000,
        offset_in_item: 500.0,
        selected: Vec::new(),
    };
    list.restore(&wild, 70.0);
    let state = list.viewport_state();
    assert!(state.visible.end <= 100);
    assert!(state.scroll_virtual <= 4_000.0);
}

/// Resize recomputes the viewport and emits the new geometry.
#[test]
fn resize_recomputes_ranges() {
    let mut list = mount_fixed(100, 40.0, 500.0, 0);
    assert_eq!(mounted_indices(&list).len(), 13);

    let events = record_events(&mut list);
    list.host_mut().set_container_extents(300.0, 900.0);
    list.notify_resize(10.0);

    // 900px over 40px rows: 23 rows intersect.
    assert_eq!(mounted_indices(&list).len(), 23);
    assert!(events.borrow().iter().any(|e| matches!(
        e,
        hedgerow_core::ListEvent::Resize {
            height,
            ..
        } if *height == 900.0
    )));
}

/// Reverse (tail-anchored) mode: the list opens at the bottom, appends
/// keep it pinned, and prepends do not move the entries in view.
#[test]
fn reverse_mode_stays_tail_anchored() {
    let item = item_config(40.0);
    let mut config = ListConfig::new(ContainerTarget::Selector("#list".into()), item);
    config.items = (0..50).collect();
    config.reverse = true;
    let mut list = List::mount(host(300.0, 500.0), config).unwrap();

    // 50 × 40 = 2000px behind a 500px viewport: opened at 1500.
    assert_eq!(list.viewport_state().scroll_actual, 1_500.0);
    assert!(mounted_indices(&list).contains(&49));

    // Pinned to the tail: an append keeps the newest entry in view.
    list.append_items(vec![50, 51]);
    assert_eq!(list.viewport_state().scroll_actual, 1_580.0);
    assert!(mounted_ids(&list).contains(&String::from("51")));

    // Away from the tail: appends leave the viewport alone, and a
    // prepend shifts the offset by exactly the added extent.
    user_scroll(&mut list, 800.0, 10.0);
    list.append_items(vec![52]);
    assert_eq!(list.viewport_state().scroll_actual, 800.0);

    list.prepend_items(vec![100, 101]);
    assert_eq!(list.viewport_state().scroll_actual, 880.0);
}

// Helpers -----------------------------------------------------------------

fn content_height(list: &TestList) -> String {
    let dom = list.host().dom();
    let children = dom.children(list.root());
    // root > viewport > content.
    let viewport = children[0];
    let content = dom.children(&viewport)[0];
    dom.style(&content, "height").unwrap().to_string()
}

fn sticky_node(list: &TestList) -> hedgerow_dom::MemoryNode {
    let dom = list.host().dom();
    dom.children(list.root())
        .into_iter()
        .find(|node| dom.has_class(node, "vlist-sticky-header"))
        .expect("sticky header node")
}
