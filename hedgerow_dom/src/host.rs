// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node-host abstraction the engine renders through.

/// Everything the engine needs from a document.
///
/// A host owns the actual nodes and exposes them as cheap [`Clone`]
/// handles. The engine holds handles only while a node is pooled or
/// mounted; after [`NodeHost::detach`]-and-release the handle is dropped
/// and never used again.
///
/// Implementations exist for the browser DOM (on `wasm32`) and for an
/// in-memory document used in tests ([`MemoryHost`](crate::MemoryHost)).
pub trait NodeHost {
    /// Handle to one element.
    type Node: Clone + PartialEq;

    /// What a template produces for a node's content.
    type Content;

    /// Creates a new detached element.
    fn create_node(&mut self) -> Self::Node;

    /// Sets an attribute.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Removes an attribute, if present.
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Sets an inline style property.
    fn set_style(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Adds or removes one class.
    fn set_class(&mut self, node: &Self::Node, class: &str, enabled: bool);

    /// Positions the node with a 2D translate, in pixels.
    fn set_transform(&mut self, node: &Self::Node, x: f64, y: f64);

    /// Sets or clears an explicit width, in pixels.
    fn set_width(&mut self, node: &Self::Node, width: Option<f64>);

    /// Replaces the node's content with a template result.
    fn set_content(&mut self, node: &Self::Node, content: Self::Content);

    /// Removes all content from the node.
    fn clear_content(&mut self, node: &Self::Node);

    /// Appends `node` as the last child of `parent`.
    fn append_to(&mut self, parent: &Self::Node, node: &Self::Node);

    /// Detaches `node` from its parent, if attached.
    fn detach(&mut self, node: &Self::Node);
}
