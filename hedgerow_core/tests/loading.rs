// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy loading: the read protocol, velocity gating, and failures.

mod common;

use common::*;
use hedgerow_core::ListEvent;
use hedgerow_data::Page;

/// Mounting with an adapter plans the initial read and marks the root
/// busy until it resolves.
#[test]
fn initial_load_protocol() {
    let mut list = mount_lazy(10_000, 40.0, 500.0);
    assert_eq!(
        list.host().dom().attribute(list.root(), "aria-busy"),
        Some("true")
    );

    let reads = list.host_mut().take_reads();
    assert_eq!(reads.len(), 1);
    assert_eq!((reads[0].offset, reads[0].limit), (0, 50));

    // Placeholders render through the template until the page lands.
    let first = list.host().dom().find_by_attribute(list.root(), "data-index", "0")[0];
    assert_eq!(list.host().dom().content(&first), Some("pending"));

    let events = record_events(&mut list);
    list.complete_read(reads[0].request_id, Page::new((0..50).collect(), Some(10_000), true));

    assert_eq!(list.host().dom().attribute(list.root(), "aria-busy"), None);
    let first = list.host().dom().find_by_attribute(list.root(), "data-index", "0")[0];
    assert_eq!(list.host().dom().content(&first), Some("item-0"));
    assert!(matches!(events.borrow()[0], ListEvent::LoadEnd));
}

/// Scenario S4: five fast scroll events issue zero reads; the first
/// slow event issues exactly one read covering the pending range.
#[test]
fn storm_prevention() {
    let mut list = mount_lazy(100_000, 40.0, 500.0);
    let initial = list.host_mut().take_reads();
    list.complete_read(initial[0].request_id, Page::new((0..50).collect(), Some(100_000), true));

    // Two warm-up events inside the loaded region get the tracker
    // stable at 50 px/ms.
    user_scroll(&mut list, 800.0, 0.0);
    user_scroll(&mut list, 1_600.0, 16.0);
    list.host_mut().take_reads();

    // Five consecutive fast events across unloaded territory.
    for step in 0..5_u32 {
        let now = 32.0 + f64::from(step) * 16.0;
        user_scroll(&mut list, 2_400.0 + f64::from(step) * 800.0, now);
    }
    assert!(
        list.host().reads().is_empty(),
        "no adapter read may be issued above the cancel threshold"
    );

    // Velocity collapses: one read, covering the deferred range.
    user_scroll(&mut list, 5_700.0, 400.0);
    let reads = list.host_mut().take_reads();
    assert_eq!(reads.len(), 1, "expected one coalesced read, got {reads:?}");
    let read = reads[0];
    // The read spans from the first deferred miss through the current
    // render range (50 is the first unloaded index).
    assert_eq!(read.offset, 50);
    assert!(read.offset + read.limit >= 146, "read too short: {read:?}");
}

/// Out-of-order completion and stale generations.
#[test]
fn stale_pages_are_ignored() {
    let mut list = mount_lazy(1_000, 40.0, 500.0);
    let initial = list.host_mut().take_reads();

    // Replace the data before the page lands: the page is stale.
    list.set_items((0..20).collect());
    list.complete_read(initial[0].request_id, Page::new((100..150).collect(), Some(1_000), true));

    assert_eq!(mounted_indices(&list).len(), 13 + 3);
    let ids = mounted_ids(&list);
    assert!(ids.iter().all(|id| id.parse::<u64>().unwrap() < 20));
}

/// Failed reads surface as error events and retry implicitly on the
/// next scroll.
#[test]
fn failed_reads_emit_and_retry() {
    let mut list = mount_lazy(10_000, 40.0, 500.0);
    let events = record_events(&mut list);
    let initial = list.host_mut().take_reads();

    list.fail_read(initial[0].request_id, "network unreachable");
    assert!(events.borrow().iter().any(|e| matches!(
        e,
        ListEvent::Error {
            context: "loadInitial",
            ..
        }
    )));
    // Placeholders stay in view.
    let first = list.host().dom().find_by_attribute(list.root(), "data-index", "0")[0];
    assert_eq!(list.host().dom().content(&first), Some("pending"));

    // A later slow scroll retries the visible range.
    user_scroll(&mut list, 40.0, 1_000.0);
    let reads = list.host_mut().take_reads();
    assert!(!reads.is_empty(), "the failed range should be retried");
    assert_eq!(reads[0].offset, 0);
}

/// Approaching the bottom edge triggers a load-more chunk once.
#[test]
fn infinite_scroll_trigger() {
    let mut list = mount_lazy(0, 40.0, 500.0);
    let initial = list.host_mut().take_reads();
    list.complete_read(initial[0].request_id, Page::new((0..50).collect(), None, true));
    let events = record_events(&mut list);

    // 50 items × 40px = 2000px; max scroll 1500. Within 200px of the
    // bottom edge, slowly.
    user_scroll(&mut list, 1_350.0, 0.0);
    user_scroll(&mut list, 1_360.0, 100.0);

    let reads = list.host_mut().take_reads();
    let load_more: Vec<_> = reads.iter().filter(|r| r.offset == 50).collect();
    assert_eq!(load_more.len(), 1, "reads: {reads:?}");
    assert!(events.borrow().iter().any(|e| matches!(
        e,
        ListEvent::LoadStart { offset: 50, .. }
    )));

    // Resolving with `has_more = false` stops the trigger for good.
    list.complete_read(load_more[0].request_id, Page::new((50..60).collect(), None, false));
    user_scroll(&mut list, 1_900.0, 300.0);
    user_scroll(&mut list, 1_901.0, 400.0);
    assert!(list.host_mut().take_reads().is_empty());
}
