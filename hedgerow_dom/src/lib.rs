// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow DOM: node pooling and render-range reconciliation.
//!
//! The engine never touches a concrete DOM. Everything it does to nodes —
//! create, attribute, class, transform, content, attach, detach — goes
//! through the [`NodeHost`] trait, so the same reconciliation logic runs
//! against a real browser document (see the `hedgerow_web` backend) or the
//! in-memory [`MemoryHost`] used by the test suites.
//!
//! Three pieces live here:
//!
//! - [`NodePool`]: a reservoir of detached, reusable nodes plus the map of
//!   currently mounted layout indices. Releasing resets a node's content
//!   and content-derived attributes; the pool has no size cap because the
//!   render range bounds how many nodes are live.
//! - [`Reconciler`]: diffs a target render range against the mounted set.
//!   Missing indices mount a pooled node; indices whose item identity
//!   changed re-template in place; unchanged identities only toggle
//!   selection/focus classes; indices that left the range release back to
//!   the pool. Identity is the item key, not the position, so overlapping
//!   ranges reuse nodes across scrolls.
//! - [`ClassNames`]: the CSS class family derived from the configurable
//!   prefix, and [`ItemFlags`]: the per-node presentation state.
//!
//! Reconciliation also maintains the ARIA contract: each mounted node
//! carries `role="option"`, `data-index`, `data-id`, a stable element id,
//! `aria-posinset`/`aria-setsize`, and the root's `aria-activedescendant`
//! follows the focused index.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classes;
mod host;
mod memory;
mod pool;
mod reconcile;

pub use classes::ClassNames;
pub use host::NodeHost;
pub use memory::{MemoryHost, MemoryNode};
pub use pool::NodePool;
pub use reconcile::{ItemFlags, ItemRender, Reconciler};
