// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Core: the virtual list orchestrator.
//!
//! This crate ties the Hedgerow components into a working list: the
//! extent models, compression map, and viewport math drive a
//! pool-backed reconciler over a host-node abstraction, with scroll
//! velocity gating a sans-IO lazy loader, and grouped/grid layout
//! strategies spliced in by the plugin registry.
//!
//! The central type is [`List`]. Embedders provide a [`ListHost`] (the
//! platform: nodes, scroll surface, clock, adapter dispatch — see the
//! `hedgerow_web` backend for the browser one and [`memory`] for the
//! in-memory reference), a [`ListConfig`] (container, item extents,
//! template, and the optional feature set), and then forward raw
//! platform events:
//!
//! - scroll events → [`List::notify_scroll`]
//! - animation frames → [`List::tick`] while [`List::is_animating`]
//! - the idle timer → [`List::notify_idle`] at [`List::idle_deadline`]
//! - resizes → [`List::notify_resize`]
//! - clicks and keys → [`List::handle_click`] / [`List::handle_key`]
//! - adapter pages → [`List::complete_read`] / [`List::fail_read`]
//!
//! Everything the list wants to say comes back through the event
//! channel ([`ListEvent`]) and through the host-node mutations it
//! performs.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_core::memory::MemoryListHost;
//! use hedgerow_core::{ContainerTarget, ItemConfig, ItemExtent, List, ListConfig};
//!
//! let mut host = MemoryListHost::new(300.0, 500.0);
//! host.register_selector("#list");
//!
//! let item = ItemConfig::new(
//!     ItemExtent::Fixed(40.0),
//!     Box::new(|ctx| match ctx.item {
//!         Some(label) => String::from(*label),
//!         None => String::from("…"),
//!     }),
//! );
//! let mut config = ListConfig::new(ContainerTarget::Selector("#list".into()), item);
//! config.items = vec!["alpha", "beta", "gamma"];
//!
//! let list = List::mount(host, config).unwrap();
//! assert_eq!(list.viewport_state().visible.start, 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod events;
mod handlers;
mod host;
mod key;
mod layout;
mod list;
pub mod memory;
mod plugin;
mod scrollbar;
mod selection;
mod snapshot;

pub use config::{
    AdapterConfig, ContainerTarget, DEFAULT_OVERSCAN, Direction, GridConfig, GroupConfig,
    HeaderExtent, ItemConfig, ItemContext, ItemExtent, KeyFn, ListConfig, ScrollMode, Template,
};
pub use error::ConfigError;
pub use events::{Emitter, ListEvent, ListenerId};
pub use handlers::ListKey;
pub use host::ListHost;
pub use key::Key;
pub use list::List;
pub use plugin::{PluginDescriptor, PluginSet, builtin};
pub use scrollbar::{Thumb, thumb};
pub use selection::{Selection, SelectionMode};
pub use snapshot::Snapshot;

// The types that appear in `List`'s own signatures.
pub use hedgerow_data::{Page, ReadRequest};
pub use hedgerow_scroll::{ScrollAlign, ScrollBehavior, ScrollDirection};
pub use hedgerow_viewport::ViewportState;
