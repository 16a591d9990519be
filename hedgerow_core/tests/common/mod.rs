// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the orchestrator test suites.

#![allow(dead_code, reason = "each test binary uses a subset of these helpers")]

use std::cell::RefCell;
use std::rc::Rc;

use hedgerow_core::memory::MemoryListHost;
use hedgerow_core::{
    AdapterConfig, ContainerTarget, ItemConfig, ItemContext, ItemExtent, Key, List, ListConfig,
    ListEvent,
};
use hedgerow_scroll::ScrollSurface;

pub type TestList = List<u64, MemoryListHost>;

/// Builds the standard item config: 40px rows keyed by item value,
/// rendered as `item-<value>` (placeholders render as `pending`).
pub fn item_config(extent: f64) -> ItemConfig<u64, String> {
    ItemConfig::new(
        ItemExtent::Fixed(extent),
        Box::new(|ctx: ItemContext<'_, u64>| match ctx.item {
            Some(value) => format!("item-{value}"),
            None => String::from("pending"),
        }),
    )
    .with_key(Box::new(|value, _| Key::Int(*value as i64)))
}

/// Builds a host with a `#list` container of the given geometry.
pub fn host(cross: f64, extent: f64) -> MemoryListHost {
    let mut host = MemoryListHost::new(cross, extent);
    host.register_selector("#list");
    host
}

/// Mounts an eager fixed-extent list of `0..count`.
pub fn mount_fixed(count: u64, extent: f64, viewport: f64, overscan: usize) -> TestList {
    let item = item_config(extent);
    let mut config = ListConfig::new(ContainerTarget::Selector("#list".into()), item);
    config.items = (0..count).collect();
    config.overscan = overscan;
    List::mount(host(300.0, viewport), config).unwrap()
}

/// Mounts a lazy list backed by the recorded-read adapter queue.
pub fn mount_lazy(total: usize, extent: f64, viewport: f64) -> TestList {
    let item = item_config(extent);
    let mut config = ListConfig::new(ContainerTarget::Selector("#list".into()), item);
    config.adapter = Some(AdapterConfig {
        total,
        chunk_size: 50,
    });
    List::mount(host(300.0, viewport), config).unwrap()
}

/// Simulates a user scroll: move the surface, then deliver the event.
pub fn user_scroll(list: &mut TestList, offset: f64, now_ms: f64) {
    let mut surface = list.host().surface();
    surface.set_scroll_offset(offset);
    list.host_mut().set_now(now_ms);
    list.notify_scroll(now_ms);
}

/// The mounted `data-index` values under the list root, sorted.
pub fn mounted_indices(list: &TestList) -> Vec<usize> {
    let mut indices: Vec<usize> = list
        .host()
        .dom()
        .collect_attribute(list.root(), "data-index")
        .into_iter()
        .map(|(_, value)| value.parse().unwrap())
        .collect();
    indices.sort_unstable();
    indices
}

/// The mounted `data-id` values under the list root, sorted.
pub fn mounted_ids(list: &TestList) -> Vec<String> {
    let mut ids: Vec<String> = list
        .host()
        .dom()
        .collect_attribute(list.root(), "data-id")
        .into_iter()
        .map(|(_, value)| value)
        .collect();
    ids.sort();
    ids
}

/// Registers a recorder that captures every emitted event.
pub fn record_events(list: &mut TestList) -> Rc<RefCell<Vec<ListEvent>>> {
    let events: Rc<RefCell<Vec<ListEvent>>> = Rc::default();
    let sink = events.clone();
    list.on(move |event| sink.borrow_mut().push(event.clone()));
    events
}

/// Mutable scroll-surface access for tests that bypass `user_scroll`.
pub fn set_surface_offset(list: &TestList, offset: f64) {
    let mut surface = list.host().surface();
    surface.set_scroll_offset(offset);
}
