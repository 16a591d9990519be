// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range reconciliation: diff the target render range against the DOM.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;
use core::ops::Range;

use bitflags::bitflags;
use hashbrown::HashMap;

use crate::classes::ClassNames;
use crate::host::NodeHost;
use crate::pool::NodePool;

bitflags! {
    /// Presentation state of one mounted item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ItemFlags: u8 {
        /// The item is in the selection set.
        const SELECTED = 1 << 0;
        /// The item is the keyboard-focused entry.
        const FOCUSED = 1 << 1;
    }
}

/// Everything the reconciler needs to mount one layout index.
///
/// Produced per index by the resolver closure the orchestrator passes in —
/// that closure is where templates run and where data/layout indices,
/// placeholders, and grid positions are resolved.
#[derive(Debug)]
pub struct ItemRender<C> {
    /// Stable identity of the entry (the item key, stringified).
    ///
    /// Reconciliation is identity-based: a mounted node re-templates only
    /// when the key at its index changes.
    pub key: String,
    /// Template output for the node's content.
    pub content: C,
    /// Selection/focus presentation state.
    pub flags: ItemFlags,
    /// Cross-axis position, in pixels (non-zero only for grids).
    pub x: f64,
    /// Scroll-axis position, in pixels (already bias-corrected under
    /// compression).
    pub y: f64,
    /// Explicit width, set for grid cells.
    pub width: Option<f64>,
}

#[derive(Debug)]
struct RenderedMeta {
    key: String,
    flags: ItemFlags,
    x: f64,
    y: f64,
    width: Option<f64>,
}

/// Reconciles render ranges against the mounted node set.
///
/// The reconciler is the sole consumer of the [`NodePool`]: it mounts
/// missing indices from the pool, re-templates nodes whose item identity
/// changed, toggles classes for pure selection/focus changes, and releases
/// nodes that left the range. It keeps per-index metadata so unchanged
/// nodes cost nothing.
#[derive(Debug, Default)]
pub struct Reconciler {
    rendered: HashMap<usize, RenderedMeta>,
    set_size: usize,
}

impl Reconciler {
    /// Creates an empty reconciler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles `range` against the currently mounted nodes.
    ///
    /// `resolve` is called once per index in `range`; returning `None`
    /// releases whatever is mounted there (an index past the data edge
    /// after a shrink). `set_size` is the layout length `L` reported
    /// through `aria-setsize`; `focused` drives the root's
    /// `aria-activedescendant`.
    pub fn reconcile<H: NodeHost>(
        &mut self,
        host: &mut H,
        pool: &mut NodePool<H>,
        classes: &ClassNames,
        root: &H::Node,
        items_parent: &H::Node,
        range: Range<usize>,
        set_size: usize,
        focused: Option<usize>,
        mut resolve: impl FnMut(usize) -> Option<ItemRender<H::Content>>,
    ) {
        // Release everything that left the range.
        let stale: Vec<usize> = pool
            .mounted()
            .map(|(index, _)| index)
            .filter(|index| !range.contains(index))
            .collect();
        for index in stale {
            if let Some(node) = pool.unmount(index) {
                pool.release(host, classes, node);
            }
            self.rendered.remove(&index);
        }

        let set_size_changed = self.set_size != set_size;
        self.set_size = set_size;

        let mut scratch = String::new();
        for index in range {
            let Some(item) = resolve(index) else {
                if let Some(node) = pool.unmount(index) {
                    pool.release(host, classes, node);
                }
                self.rendered.remove(&index);
                continue;
            };

            if let Some(node) = pool.node_at(index).cloned() {
                self.update_mounted(host, classes, &node, index, item, set_size_changed, &mut scratch);
            } else {
                self.mount(host, pool, classes, items_parent, index, item, &mut scratch);
            }
        }

        self.apply_active_descendant(host, classes, root, focused);
    }

    /// Re-templates one mounted index without touching the range.
    pub fn update_item<H: NodeHost>(
        &mut self,
        host: &mut H,
        pool: &NodePool<H>,
        classes: &ClassNames,
        index: usize,
        item: ItemRender<H::Content>,
    ) {
        let Some(node) = pool.node_at(index).cloned() else {
            return;
        };
        host.set_attribute(&node, "data-id", &item.key);
        host.set_content(&node, item.content);
        host.set_transform(&node, item.x, item.y);
        host.set_width(&node, item.width);
        self.apply_flag_classes(host, classes, &node, index, item.flags);
        if let Some(meta) = self.rendered.get_mut(&index) {
            meta.key = item.key;
            meta.flags = item.flags;
            meta.x = item.x;
            meta.y = item.y;
            meta.width = item.width;
        }
    }

    /// Toggles selection/focus classes on one mounted index.
    ///
    /// This is the cheap path for arrow-key focus movement: no template,
    /// no layout, just class flips.
    pub fn update_item_classes<H: NodeHost>(
        &mut self,
        host: &mut H,
        pool: &NodePool<H>,
        classes: &ClassNames,
        index: usize,
        flags: ItemFlags,
    ) {
        let Some(node) = pool.node_at(index).cloned() else {
            return;
        };
        self.apply_flag_classes(host, classes, &node, index, flags);
    }

    /// Updates the root's `aria-activedescendant` for a focus change.
    pub fn apply_active_descendant<H: NodeHost>(
        &self,
        host: &mut H,
        classes: &ClassNames,
        root: &H::Node,
        focused: Option<usize>,
    ) {
        match focused {
            Some(index) if self.rendered.contains_key(&index) => {
                host.set_attribute(root, "aria-activedescendant", &classes.item_id(index));
            }
            _ => host.remove_attribute(root, "aria-activedescendant"),
        }
    }

    /// Forgets all per-index metadata (when the pool is released).
    pub fn clear(&mut self) {
        self.rendered.clear();
        self.set_size = 0;
    }

    /// Indices currently known to be rendered, unordered.
    pub fn rendered_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.rendered.keys().copied()
    }

    fn mount<H: NodeHost>(
        &mut self,
        host: &mut H,
        pool: &mut NodePool<H>,
        classes: &ClassNames,
        items_parent: &H::Node,
        index: usize,
        item: ItemRender<H::Content>,
        scratch: &mut String,
    ) {
        let node = pool.acquire(host, classes);

        write_usize(scratch, index);
        host.set_attribute(&node, "data-index", scratch);
        host.set_attribute(&node, "id", &classes.item_id(index));
        host.set_attribute(&node, "data-id", &item.key);
        write_usize(scratch, index + 1);
        host.set_attribute(&node, "aria-posinset", scratch);
        write_usize(scratch, self.set_size);
        host.set_attribute(&node, "aria-setsize", scratch);

        host.set_transform(&node, item.x, item.y);
        host.set_width(&node, item.width);
        host.set_content(&node, item.content);
        if item.flags.contains(ItemFlags::SELECTED) {
            host.set_class(&node, &classes.item_selected, true);
        }
        if item.flags.contains(ItemFlags::FOCUSED) {
            host.set_class(&node, &classes.item_focused, true);
        }
        host.append_to(items_parent, &node);

        pool.mount(index, node);
        self.rendered.insert(
            index,
            RenderedMeta {
                key: item.key,
                flags: item.flags,
                x: item.x,
                y: item.y,
                width: item.width,
            },
        );
    }

    fn update_mounted<H: NodeHost>(
        &mut self,
        host: &mut H,
        classes: &ClassNames,
        node: &H::Node,
        index: usize,
        item: ItemRender<H::Content>,
        set_size_changed: bool,
        scratch: &mut String,
    ) {
        if set_size_changed {
            write_usize(scratch, self.set_size);
            host.set_attribute(node, "aria-setsize", scratch);
        }

        let Some(meta) = self.rendered.get_mut(&index) else {
            return;
        };

        if meta.key != item.key {
            host.set_attribute(node, "data-id", &item.key);
            host.set_content(node, item.content);
            meta.key = item.key;
        }
        if meta.x != item.x || meta.y != item.y {
            host.set_transform(node, item.x, item.y);
            meta.x = item.x;
            meta.y = item.y;
        }
        if meta.width != item.width {
            host.set_width(node, item.width);
            meta.width = item.width;
        }

        let flags = item.flags;
        if meta.flags != flags {
            let previous = meta.flags;
            meta.flags = flags;
            toggle_changed_flags(host, classes, node, previous, flags);
        }
    }

    fn apply_flag_classes<H: NodeHost>(
        &mut self,
        host: &mut H,
        classes: &ClassNames,
        node: &H::Node,
        index: usize,
        flags: ItemFlags,
    ) {
        let previous = match self.rendered.get_mut(&index) {
            Some(meta) => {
                let previous = meta.flags;
                meta.flags = flags;
                previous
            }
            None => ItemFlags::empty(),
        };
        toggle_changed_flags(host, classes, node, previous, flags);
    }
}

/// Flips only the selection/focus classes that actually changed.
fn toggle_changed_flags<H: NodeHost>(
    host: &mut H,
    classes: &ClassNames,
    node: &H::Node,
    previous: ItemFlags,
    next: ItemFlags,
) {
    let changed = previous ^ next;
    if changed.contains(ItemFlags::SELECTED) {
        host.set_class(node, &classes.item_selected, next.contains(ItemFlags::SELECTED));
    }
    if changed.contains(ItemFlags::FOCUSED) {
        host.set_class(node, &classes.item_focused, next.contains(ItemFlags::FOCUSED));
    }
}

/// Formats `value` into `scratch`, replacing its contents.
fn write_usize(scratch: &mut String, value: usize) {
    scratch.clear();
    let _ = write!(scratch, "{value}");
}
