// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planned adapter reads and their results.

use alloc::vec::Vec;

/// Default number of items requested by the initial load and by each
/// load-more chunk.
pub const INITIAL_LOAD_SIZE: usize = 50;

/// Which operation planned a read.
///
/// Carried through to the error channel so a failed read can be attributed
/// (`"ensureRange"`, `"loadMore"`, `"loadInitial"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadContext {
    /// A scroll brought unloaded indices into the render range.
    EnsureRange,
    /// The infinite-scroll trigger requested the next chunk.
    LoadMore,
    /// The first read after mounting with an adapter.
    LoadInitial,
}

impl ReadContext {
    /// The context tag used in error events.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnsureRange => "ensureRange",
            Self::LoadMore => "loadMore",
            Self::LoadInitial => "loadInitial",
        }
    }
}

/// An adapter read the host should perform.
///
/// Maps directly onto the adapter contract
/// `read({offset, limit}) → page`. The `request_id` and `generation` are
/// echoed back through [`DataManager::complete`](crate::DataManager::complete)
/// / [`DataManager::fail`](crate::DataManager::fail).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRequest {
    /// Identity of this read; unique per manager.
    pub request_id: u64,
    /// First data index to read.
    pub offset: usize,
    /// Number of items to read.
    pub limit: usize,
    /// Storage generation the read was planned under.
    pub generation: u64,
    /// The operation that planned the read.
    pub context: ReadContext,
}

/// A resolved adapter page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items, positioned at the request's offset.
    pub items: Vec<T>,
    /// Revised total count, when the adapter knows it.
    pub total: Option<usize>,
    /// Whether more items exist past the loaded edge.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Bundles a page result.
    #[must_use]
    pub const fn new(items: Vec<T>, total: Option<usize>, has_more: bool) -> Self {
        Self {
            items,
            total,
            has_more,
        }
    }
}
