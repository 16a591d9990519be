// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event channel between the list and its embedder.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use hedgerow_scroll::ScrollDirection;

use crate::key::Key;

/// Everything a list announces to its listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// The scroll offset changed.
    Scroll {
        /// The new scroll offset in actual space.
        offset: f64,
        /// Direction of travel.
        direction: ScrollDirection,
    },
    /// The render range moved.
    RangeChange {
        /// First layout index of the new render range.
        start: usize,
        /// One past the last layout index.
        end: usize,
    },
    /// The container was resized.
    Resize {
        /// New container width in pixels.
        width: f64,
        /// New container height in pixels.
        height: f64,
    },
    /// An item was clicked.
    ItemClick {
        /// Data index of the clicked item.
        index: usize,
        /// The item's key.
        key: Key,
    },
    /// The selection set changed.
    SelectionChange {
        /// The selected keys, in insertion order.
        selected: Vec<Key>,
    },
    /// An adapter read is about to be dispatched.
    LoadStart {
        /// First data index being read.
        offset: usize,
        /// Number of items being read.
        limit: usize,
    },
    /// An adapter read resolved and its items are in storage.
    LoadEnd,
    /// An adapter read failed.
    Error {
        /// Which operation failed: `"ensureRange"`, `"loadMore"`, or
        /// `"loadInitial"`.
        context: &'static str,
        /// Host-provided failure description.
        message: String,
    },
}

/// Listener handle returned by [`Emitter::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// An ordered listener list.
///
/// Listeners fire in registration order and are always all invoked — no
/// listener can abort dispatch to the ones after it. Listeners are plain
/// infallible closures; anything they need to report goes through their
/// own channels.
#[derive(Default)]
pub struct Emitter {
    listeners: Vec<(ListenerId, Box<dyn FnMut(&ListEvent)>)>,
    next_id: u64,
}

impl core::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Emitter {
    /// Creates an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener, returning its handle.
    pub fn on(&mut self, listener: impl FnMut(&ListEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; unknown handles are ignored.
    pub fn off(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Invokes every listener, in registration order.
    pub fn emit(&mut self, event: &ListEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` when no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drops every listener (on destroy).
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::{Emitter, ListEvent};

    #[test]
    fn listeners_fire_in_registration_order() {
        let order: Rc<RefCell<Vec<u32>>> = Rc::default();
        let mut emitter = Emitter::new();
        for tag in [1_u32, 2, 3] {
            let order = order.clone();
            emitter.on(move |_| order.borrow_mut().push(tag));
        }
        emitter.emit(&ListEvent::LoadEnd);
        assert_eq!(*order.borrow(), [1, 2, 3]);
    }

    #[test]
    fn off_removes_only_the_named_listener() {
        let hits: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let mut emitter = Emitter::new();
        let first = {
            let hits = hits.clone();
            emitter.on(move |_| hits.borrow_mut().push("first"))
        };
        {
            let hits = hits.clone();
            emitter.on(move |_| hits.borrow_mut().push("second"));
        }
        emitter.off(first);
        emitter.emit(&ListEvent::LoadEnd);
        assert_eq!(*hits.borrow(), ["second"]);
        // Unknown ids are ignored.
        emitter.off(first);
        assert_eq!(emitter.len(), 1);
    }

    #[test]
    fn clear_drops_everyone() {
        let mut emitter = Emitter::new();
        emitter.on(|_| {});
        emitter.on(|_| {});
        emitter.clear();
        assert!(emitter.is_empty());
        emitter.emit(&ListEvent::LoadEnd);
    }
}
