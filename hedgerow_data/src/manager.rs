// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse item storage and read-plan bookkeeping.

use alloc::vec::Vec;
use core::ops::Range;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::request::{INITIAL_LOAD_SIZE, Page, ReadContext, ReadRequest};

/// What [`DataManager::get`] found at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a, T> {
    /// The item is loaded.
    Loaded(&'a T),
    /// The index is within the declared total but not yet loaded; render
    /// the placeholder record.
    Placeholder,
    /// The index is outside the declared total.
    Absent,
}

impl<'a, T> Slot<'a, T> {
    /// The loaded item, if any.
    #[must_use]
    pub const fn loaded(&self) -> Option<&'a T> {
        match self {
            Self::Loaded(item) => Some(item),
            _ => None,
        }
    }
}

/// Result of feeding a resolved page back into the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The page was inserted.
    Applied {
        /// The operation that planned the read.
        context: ReadContext,
        /// The data-index range the page now occupies.
        range: Range<usize>,
    },
    /// The page belonged to a previous generation (or an unknown request)
    /// and was discarded.
    Stale,
}

#[derive(Debug)]
struct InFlight {
    request_id: u64,
    range: Range<usize>,
    generation: u64,
    context: ReadContext,
}

/// Item storage plus lazy-load bookkeeping for one list.
///
/// Items live in a sparse map keyed by absolute data index, so pages may
/// resolve in any order. All read planning is synchronous; see the crate
/// docs for the request/complete protocol.
#[derive(Debug)]
pub struct DataManager<T> {
    lazy: bool,
    reverse: bool,
    total: usize,
    has_more: bool,
    generation: u64,
    next_request_id: u64,
    chunk_size: usize,
    storage: HashMap<usize, T>,
    in_flight: Vec<InFlight>,
    pending: Option<Range<usize>>,
    loading_more: bool,
}

impl<T> DataManager<T> {
    /// Creates a manager over a fully loaded item array.
    #[must_use]
    pub fn eager(items: Vec<T>) -> Self {
        let mut manager = Self::empty(false);
        manager.replace_storage(items);
        manager
    }

    /// Creates a manager that pages items in through an adapter.
    ///
    /// `total` is the declared count; it may be revised by resolved pages.
    #[must_use]
    pub fn lazy(total: usize) -> Self {
        let mut manager = Self::empty(true);
        manager.total = total;
        manager.has_more = true;
        manager
    }

    fn empty(lazy: bool) -> Self {
        Self {
            lazy,
            reverse: false,
            total: 0,
            has_more: false,
            generation: 0,
            next_request_id: 0,
            chunk_size: INITIAL_LOAD_SIZE,
            storage: HashMap::new(),
            in_flight: Vec::new(),
            pending: None,
            loading_more: false,
        }
    }

    /// Sets reverse mode: load-more grows the list before index 0.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Overrides the load-more chunk size.
    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = chunk_size.max(1);
    }

    /// Declared item count (may exceed the loaded count).
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of loaded items.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.storage.len()
    }

    /// Whether more items exist past the loaded edge.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether items are paged in through an adapter.
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// Returns `true` while any planned read is unresolved.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// The current storage generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Looks up the slot at a data index.
    #[must_use]
    pub fn get(&self, index: usize) -> Slot<'_, T> {
        if index >= self.total {
            return Slot::Absent;
        }
        match self.storage.get(&index) {
            Some(item) => Slot::Loaded(item),
            None if self.lazy => Slot::Placeholder,
            None => Slot::Absent,
        }
    }

    /// Returns `true` if the item at `index` is loaded.
    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.storage.contains_key(&index)
    }

    /// Replaces the entire item sequence.
    ///
    /// Bumps the generation (in-flight reads become stale), clears the
    /// pending range, and resets the load-more latch.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.generation = self.generation.wrapping_add(1);
        self.in_flight.clear();
        self.pending = None;
        self.loading_more = false;
        self.replace_storage(items);
    }

    fn replace_storage(&mut self, items: Vec<T>) {
        self.total = items.len();
        self.storage = items.into_iter().enumerate().collect();
    }

    /// Inserts items at the front of the index space without resetting
    /// read bookkeeping.
    ///
    /// This is how eagerly supplied items seed a lazy manager: the
    /// declared total stays at least as large as the adapter declared.
    pub fn seed(&mut self, items: Vec<T>) {
        let count = items.len();
        for (i, item) in items.into_iter().enumerate() {
            self.storage.insert(i, item);
        }
        self.total = self.total.max(count);
    }

    /// Appends items after the current total.
    pub fn append(&mut self, items: Vec<T>) {
        let base = self.total;
        for (i, item) in items.into_iter().enumerate() {
            self.storage.insert(base + i, item);
        }
        self.total = self.storage.len().max(self.total);
    }

    /// Prepends items before index 0, shifting every loaded index up.
    pub fn prepend(&mut self, items: Vec<T>) {
        let shift = items.len();
        if shift == 0 {
            return;
        }
        let shifted: HashMap<usize, T> = self
            .storage
            .drain()
            .map(|(index, item)| (index + shift, item))
            .collect();
        self.storage = shifted;
        for (i, item) in items.into_iter().enumerate() {
            self.storage.insert(i, item);
        }
        self.total += shift;
    }

    /// Replaces the item at `index`; out-of-range updates are ignored.
    pub fn update(&mut self, index: usize, item: T) -> bool {
        if index >= self.total {
            return false;
        }
        self.storage.insert(index, item);
        true
    }

    /// Removes the item at `index`, shifting later indices down.
    ///
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.total {
            return None;
        }
        let removed = self.storage.remove(&index);
        let shifted: HashMap<usize, T> = self
            .storage
            .drain()
            .map(|(i, item)| if i > index { (i - 1, item) } else { (i, item) })
            .collect();
        self.storage = shifted;
        self.total -= 1;
        removed
    }

    /// Plans the initial adapter read for an empty lazy list.
    pub fn initial_load(&mut self) -> Option<ReadRequest> {
        if !self.lazy || !self.storage.is_empty() || self.is_loading() {
            return None;
        }
        Some(self.register(0..self.chunk_size, ReadContext::LoadInitial))
    }

    /// Plans reads covering every unloaded, not-in-flight index in `range`.
    ///
    /// Adjacent misses coalesce into a single read; runs separated by
    /// loaded or in-flight indices produce separate reads. Eager managers
    /// plan nothing.
    pub fn ensure_range(&mut self, range: Range<usize>) -> SmallVec<[ReadRequest; 2]> {
        let mut requests = SmallVec::new();
        if !self.lazy {
            return requests;
        }
        let range = range.start.min(self.total)..range.end.min(self.total);

        let mut run_start = None;
        for index in range.start..range.end {
            let miss = !self.storage.contains_key(&index) && !self.is_in_flight(index);
            match (miss, run_start) {
                (true, None) => run_start = Some(index),
                (false, Some(start)) => {
                    requests.push(self.register(start..index, ReadContext::EnsureRange));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            requests.push(self.register(start..range.end, ReadContext::EnsureRange));
        }
        requests
    }

    /// Merges `range` into the single pending range for a later flush.
    pub fn defer_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.pending = Some(match self.pending.take() {
            Some(pending) => pending.start.min(range.start)..pending.end.max(range.end),
            None => range,
        });
    }

    /// Takes the pending range, if any, for the caller to ensure.
    pub fn flush_pending(&mut self) -> Option<Range<usize>> {
        self.pending.take()
    }

    /// The currently deferred range, if any.
    #[must_use]
    pub fn pending_range(&self) -> Option<&Range<usize>> {
        self.pending.as_ref()
    }

    /// Plans the next load-more chunk.
    ///
    /// Returns `None` while a previous load-more is unresolved, when no
    /// adapter is present, or when the adapter reported the end of the
    /// data. Forward mode reads after the last loaded index; reverse mode
    /// reads the chunk that will be prepended before index 0.
    pub fn load_more(&mut self) -> Option<ReadRequest> {
        if !self.lazy || !self.has_more || self.loading_more {
            return None;
        }
        self.loading_more = true;
        let range = if self.reverse {
            0..self.chunk_size
        } else {
            let next = self.storage.keys().max().map_or(0, |last| last + 1);
            next..next + self.chunk_size
        };
        Some(self.register(range, ReadContext::LoadMore))
    }

    /// Feeds a resolved page back into storage.
    ///
    /// Unknown request ids and pages planned under an older generation are
    /// reported as [`ReadOutcome::Stale`] and leave storage untouched.
    pub fn complete(&mut self, request_id: u64, page: Page<T>) -> ReadOutcome {
        let Some(read) = self.take_in_flight(request_id) else {
            return ReadOutcome::Stale;
        };
        if read.context == ReadContext::LoadMore {
            self.loading_more = false;
        }
        if read.generation != self.generation {
            return ReadOutcome::Stale;
        }

        self.has_more = page.has_more;
        let count = page.items.len();

        if self.reverse && read.context == ReadContext::LoadMore {
            // The chunk grows the list before index 0.
            self.prepend(page.items);
            return ReadOutcome::Applied {
                context: read.context,
                range: 0..count,
            };
        }

        let offset = read.range.start;
        for (i, item) in page.items.into_iter().enumerate() {
            self.storage.insert(offset + i, item);
        }
        if let Some(total) = page.total {
            self.total = total;
        } else {
            self.total = self.total.max(offset + count);
        }
        ReadOutcome::Applied {
            context: read.context,
            range: offset..offset + count,
        }
    }

    /// Records a failed read, returning its context for the error channel.
    ///
    /// Unknown ids and stale generations return `None`; the failure of an
    /// abandoned read is not worth reporting.
    pub fn fail(&mut self, request_id: u64) -> Option<ReadContext> {
        let read = self.take_in_flight(request_id)?;
        if read.context == ReadContext::LoadMore {
            self.loading_more = false;
        }
        (read.generation == self.generation).then_some(read.context)
    }

    fn register(&mut self, range: Range<usize>, context: ReadContext) -> ReadRequest {
        let request = ReadRequest {
            request_id: self.next_request_id,
            offset: range.start,
            limit: range.end - range.start,
            generation: self.generation,
            context,
        };
        self.next_request_id += 1;
        self.in_flight.push(InFlight {
            request_id: request.request_id,
            range,
            generation: self.generation,
            context,
        });
        request
    }

    fn take_in_flight(&mut self, request_id: u64) -> Option<InFlight> {
        let position = self
            .in_flight
            .iter()
            .position(|read| read.request_id == request_id)?;
        Some(self.in_flight.swap_remove(position))
    }

    fn is_in_flight(&self, index: usize) -> bool {
        self.in_flight
            .iter()
            .any(|read| read.generation == self.generation && read.range.contains(&index))
    }
}
