// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount failures, destroy semantics, and destroyed-state no-ops.

mod common;

use common::*;
use hedgerow_core::{ConfigError, ContainerTarget, List, ListConfig};
use hedgerow_scroll::{ScrollBehavior, ScrollSurface};

/// Mounting against an unknown selector fails with a descriptive error.
#[test]
fn unknown_container_fails_mount() {
    let host = hedgerow_core::memory::MemoryListHost::new(300.0, 500.0);
    let config: ListConfig<u64, String, _> = ListConfig::new(
        ContainerTarget::Selector("#missing".into()),
        item_config(40.0),
    );
    let err = List::mount(host, config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::ContainerNotFound {
            selector: "#missing".into(),
        }
    );
}

/// The mounted skeleton carries the documented roles and classes.
#[test]
fn skeleton_structure_and_aria() {
    let list = mount_fixed(100, 40.0, 500.0, 3);
    let dom = list.host().dom();
    let root = list.root();

    assert_eq!(dom.attribute(root, "role"), Some("listbox"));
    assert_eq!(dom.attribute(root, "tabindex"), Some("0"));
    assert_eq!(dom.attribute(root, "aria-orientation"), Some("vertical"));
    assert!(dom.has_class(root, "vlist"));

    let viewport = dom.children(root)[0];
    assert!(dom.has_class(&viewport, "vlist-viewport"));
    let content = dom.children(&viewport)[0];
    assert!(dom.has_class(&content, "vlist-content"));
    let items = dom.children(&content)[0];
    assert!(dom.has_class(&items, "vlist-items"));

    // Every mounted node is an option with matching metadata.
    for (node, value) in dom.collect_attribute(root, "data-index") {
        assert_eq!(dom.attribute(&node, "role"), Some("option"));
        let index: usize = value.parse().unwrap();
        assert_eq!(
            dom.attribute(&node, "aria-posinset"),
            Some((index + 1).to_string().as_str())
        );
        assert_eq!(dom.attribute(&node, "aria-setsize"), Some("100"));
    }
}

/// Destroy detaches the root, empties the pool, and silences listeners.
#[test]
fn destroy_releases_everything() {
    let mut list = mount_fixed(100, 40.0, 500.0, 3);
    let events = record_events(&mut list);
    let root = *list.root();

    list.destroy();
    assert!(list.is_destroyed());
    assert_eq!(list.host().dom().parent(&root), None);
    assert_eq!(
        list.host()
            .dom()
            .collect_attribute(&root, "data-index")
            .len(),
        0
    );

    // Listeners were cleared: nothing further is observed.
    let before = events.borrow().len();
    user_scroll(&mut list, 2_000.0, 10.0);
    assert_eq!(events.borrow().len(), before);

    // Idempotent.
    list.destroy();
    assert!(list.is_destroyed());
}

/// Every operation on a destroyed list is a silent no-op.
#[test]
fn destroyed_operations_are_noops() {
    let mut list = mount_fixed(10, 40.0, 500.0, 3);
    list.destroy();

    list.set_items((0..5).collect());
    list.append_items(vec![99]);
    list.scroll_to_offset(1_000.0, ScrollBehavior::Auto, 0.0);
    list.notify_resize(0.0);
    list.handle_click(0, 0.0);
    assert!(!list.handle_key(hedgerow_core::ListKey::ArrowDown, 0.0));
    list.tick(16.0);
    list.notify_idle(200.0);

    assert!(list.is_destroyed());
    assert_eq!(list.viewport_state().scroll_actual, 0.0);
    assert_eq!(list.focused_index(), None);
}

/// Destroy cancels an in-flight smooth scroll.
#[test]
fn destroy_cancels_animation() {
    let mut list = mount_fixed(100, 40.0, 500.0, 3);
    list.scroll_to_offset(1_000.0, ScrollBehavior::Smooth, 0.0);
    assert!(list.is_animating());
    list.destroy();
    assert!(!list.is_animating());
    list.tick(150.0);
    assert_eq!(list.host().surface().scroll_offset(), 0.0);
}
