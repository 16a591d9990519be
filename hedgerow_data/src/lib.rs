// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Data: item storage and lazy-load planning.
//!
//! A virtualized list either owns its items outright or pages them in
//! through an asynchronous adapter. [`DataManager`] covers both: a sparse
//! store keyed by absolute data index, plus the bookkeeping that decides
//! *when* to read — in-flight ranges, a velocity-deferred pending range,
//! and an infinite-scroll trigger.
//!
//! ## Reads are planned, not performed
//!
//! This crate never awaits anything. [`DataManager::ensure_range`] and
//! [`DataManager::load_more`] return [`ReadRequest`] values describing the
//! adapter calls the host should make; the host performs the actual
//! asynchronous read and reports back with [`DataManager::complete`] or
//! [`DataManager::fail`]. Every request carries the generation it was
//! planned under: [`DataManager::set_items`] bumps the generation, so pages
//! that resolve after a reset are recognized as stale and discarded.
//! Out-of-order completions are harmless because pages are inserted by
//! absolute index.
//!
//! ## Velocity gating
//!
//! During a scrollbar drag the viewport can cross tens of thousands of
//! entries in a single frame; issuing an adapter read for every
//! intermediate range is a request storm that delivers nothing useful.
//! [`LoadGate`] implements the policy: above
//! [`CANCEL_LOAD_VELOCITY`] the requested range is deferred (merged into a
//! single pending range, flushed when scrolling slows or stops); above
//! [`PRELOAD_VELOCITY`] the range is extended by [`PRELOAD_AHEAD`] entries
//! in the scroll direction so the list stays ahead of the user.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_data::{DataManager, Page, ReadOutcome};
//!
//! let mut data: DataManager<u32> = DataManager::lazy(100);
//! let requests = data.ensure_range(0..10);
//! assert_eq!(requests.len(), 1);
//!
//! // The host performs the read and feeds the page back.
//! let page = Page::new((0..10).collect(), Some(100), true);
//! match data.complete(requests[0].request_id, page) {
//!     ReadOutcome::Applied { .. } => {}
//!     ReadOutcome::Stale => unreachable!("generation did not change"),
//! }
//! assert!(data.is_loaded(5));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod gate;
mod manager;
mod request;

pub use gate::{
    CANCEL_LOAD_VELOCITY, GateDecision, LOAD_MORE_THRESHOLD, LoadGate, PRELOAD_AHEAD,
    PRELOAD_VELOCITY,
};
pub use manager::{DataManager, ReadOutcome, Slot};
pub use request::{INITIAL_LOAD_SIZE, Page, ReadContext, ReadRequest};
