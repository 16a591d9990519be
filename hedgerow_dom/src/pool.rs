// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element pool: detached reusable nodes plus the mounted-index map.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::classes::ClassNames;
use crate::host::NodeHost;

/// Attributes that describe a node's current content and must not leak
/// into its next tenancy.
const CONTENT_ATTRIBUTES: &[&str] = &["data-index", "data-id", "id", "aria-posinset", "aria-setsize"];

/// Reservoir of detached nodes and the map of mounted layout indices.
///
/// Invariant: a node is either in the free stack or in the mounted map,
/// never both. Every mounted node's `data-index` attribute matches its map
/// key (the reconciler writes it at mount time).
///
/// There is no size cap. The mounted map is bounded by the render range
/// and the free stack by the largest render range seen, so memory stays
/// bounded regardless of item count.
pub struct NodePool<H: NodeHost> {
    free: Vec<H::Node>,
    mounted: HashMap<usize, H::Node>,
}

impl<H: NodeHost> core::fmt::Debug for NodePool<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePool")
            .field("free", &self.free.len())
            .field("mounted", &self.mounted.len())
            .finish()
    }
}

impl<H: NodeHost> Default for NodePool<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: NodeHost> NodePool<H> {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            free: Vec::new(),
            mounted: HashMap::new(),
        }
    }

    /// Pops a pooled node or creates a fresh one with the item skeleton.
    ///
    /// Fresh nodes get the fixed per-item setup exactly once: the item
    /// class, `role="option"`, absolute positioning, and a transform
    /// hint — everything content-independent.
    pub fn acquire(&mut self, host: &mut H, classes: &ClassNames) -> H::Node {
        if let Some(node) = self.free.pop() {
            return node;
        }
        let node = host.create_node();
        host.set_class(&node, &classes.item, true);
        host.set_attribute(&node, "role", "option");
        host.set_style(&node, "position", "absolute");
        host.set_style(&node, "will-change", "transform");
        node
    }

    /// Resets a node and returns it to the free stack.
    ///
    /// Clears content, content-derived attributes, and the
    /// selection/focus modifiers, then detaches the node.
    pub fn release(&mut self, host: &mut H, classes: &ClassNames, node: H::Node) {
        host.clear_content(&node);
        for attribute in CONTENT_ATTRIBUTES {
            host.remove_attribute(&node, attribute);
        }
        host.set_class(&node, &classes.item_selected, false);
        host.set_class(&node, &classes.item_focused, false);
        host.set_width(&node, None);
        host.detach(&node);
        self.free.push(node);
    }

    /// Records `node` as mounted at `layout_index`.
    pub fn mount(&mut self, layout_index: usize, node: H::Node) {
        self.mounted.insert(layout_index, node);
    }

    /// Removes and returns the node mounted at `layout_index`.
    pub fn unmount(&mut self, layout_index: usize) -> Option<H::Node> {
        self.mounted.remove(&layout_index)
    }

    /// The node mounted at `layout_index`, if any.
    #[must_use]
    pub fn node_at(&self, layout_index: usize) -> Option<&H::Node> {
        self.mounted.get(&layout_index)
    }

    /// Iterates over mounted `(layout_index, node)` pairs, unordered.
    pub fn mounted(&self) -> impl Iterator<Item = (usize, &H::Node)> {
        self.mounted.iter().map(|(index, node)| (*index, node))
    }

    /// Number of mounted nodes.
    #[must_use]
    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    /// Number of pooled (detached) nodes.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Releases every mounted node and drops the free stack.
    ///
    /// Used on destroy: afterwards the pool holds no node handles at all.
    pub fn release_all(&mut self, host: &mut H, classes: &ClassNames) {
        let indices: Vec<usize> = self.mounted.keys().copied().collect();
        for index in indices {
            if let Some(node) = self.mounted.remove(&index) {
                self.release(host, classes, node);
            }
        }
        self.free.clear();
    }
}
