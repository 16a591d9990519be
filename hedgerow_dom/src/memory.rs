// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory reference host.
//!
//! [`MemoryHost`] implements [`NodeHost`] over plain data structures with
//! `String` content. It exists so every layer above the host abstraction —
//! pool, reconciler, orchestrator — can be exercised headlessly, and so
//! tests can assert on the exact attribute/class/transform state a real
//! document would carry.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::host::NodeHost;

/// Handle to a [`MemoryHost`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryNode(usize);

#[derive(Debug, Default)]
struct NodeData {
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    classes: BTreeSet<String>,
    transform: Option<(f64, f64)>,
    width: Option<f64>,
    content: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// An in-memory document.
#[derive(Debug, Default)]
pub struct MemoryHost {
    nodes: Vec<NodeData>,
}

impl MemoryHost {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn data(&self, node: &MemoryNode) -> &NodeData {
        &self.nodes[node.0]
    }

    fn data_mut(&mut self, node: &MemoryNode) -> &mut NodeData {
        &mut self.nodes[node.0]
    }

    /// Total nodes ever created.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// An attribute's value, if set.
    #[must_use]
    pub fn attribute(&self, node: &MemoryNode, name: &str) -> Option<&str> {
        self.data(node).attributes.get(name).map(String::as_str)
    }

    /// An inline style property's value, if set.
    #[must_use]
    pub fn style(&self, node: &MemoryNode, name: &str) -> Option<&str> {
        self.data(node).styles.get(name).map(String::as_str)
    }

    /// Whether the node carries a class.
    #[must_use]
    pub fn has_class(&self, node: &MemoryNode, class: &str) -> bool {
        self.data(node).classes.contains(class)
    }

    /// The node's translate, if one was applied.
    #[must_use]
    pub fn transform(&self, node: &MemoryNode) -> Option<(f64, f64)> {
        self.data(node).transform
    }

    /// The node's explicit width, if one was applied.
    #[must_use]
    pub fn width(&self, node: &MemoryNode) -> Option<f64> {
        self.data(node).width
    }

    /// The node's content, if set.
    #[must_use]
    pub fn content(&self, node: &MemoryNode) -> Option<&str> {
        self.data(node).content.as_deref()
    }

    /// The node's parent, if attached.
    #[must_use]
    pub fn parent(&self, node: &MemoryNode) -> Option<MemoryNode> {
        self.data(node).parent.map(MemoryNode)
    }

    /// The node's children, in document order.
    #[must_use]
    pub fn children(&self, node: &MemoryNode) -> Vec<MemoryNode> {
        self.data(node).children.iter().copied().map(MemoryNode).collect()
    }

    /// All attached descendants of `root` (including `root`) whose
    /// attribute `name` equals `value`.
    #[must_use]
    pub fn find_by_attribute(&self, root: &MemoryNode, name: &str, value: &str) -> Vec<MemoryNode> {
        let mut found = Vec::new();
        let mut stack = Vec::from([root.0]);
        while let Some(index) = stack.pop() {
            let node = MemoryNode(index);
            if self.attribute(&node, name) == Some(value) {
                found.push(node);
            }
            stack.extend(self.data(&node).children.iter().copied());
        }
        found
    }

    /// All attached descendants of `root` carrying attribute `name`,
    /// with its value.
    #[must_use]
    pub fn collect_attribute(&self, root: &MemoryNode, name: &str) -> Vec<(MemoryNode, String)> {
        let mut found = Vec::new();
        let mut stack = Vec::from([root.0]);
        while let Some(index) = stack.pop() {
            let node = MemoryNode(index);
            if let Some(value) = self.attribute(&node, name) {
                found.push((node, String::from(value)));
            }
            stack.extend(self.data(&node).children.iter().copied());
        }
        found
    }
}

impl NodeHost for MemoryHost {
    type Node = MemoryNode;
    type Content = String;

    fn create_node(&mut self) -> MemoryNode {
        self.nodes.push(NodeData::default());
        MemoryNode(self.nodes.len() - 1)
    }

    fn set_attribute(&mut self, node: &MemoryNode, name: &str, value: &str) {
        self.data_mut(node)
            .attributes
            .insert(String::from(name), String::from(value));
    }

    fn remove_attribute(&mut self, node: &MemoryNode, name: &str) {
        self.data_mut(node).attributes.remove(name);
    }

    fn set_style(&mut self, node: &MemoryNode, name: &str, value: &str) {
        self.data_mut(node)
            .styles
            .insert(String::from(name), String::from(value));
    }

    fn set_class(&mut self, node: &MemoryNode, class: &str, enabled: bool) {
        let classes = &mut self.data_mut(node).classes;
        if enabled {
            classes.insert(String::from(class));
        } else {
            classes.remove(class);
        }
    }

    fn set_transform(&mut self, node: &MemoryNode, x: f64, y: f64) {
        self.data_mut(node).transform = Some((x, y));
    }

    fn set_width(&mut self, node: &MemoryNode, width: Option<f64>) {
        self.data_mut(node).width = width;
    }

    fn set_content(&mut self, node: &MemoryNode, content: String) {
        self.data_mut(node).content = Some(content);
    }

    fn clear_content(&mut self, node: &MemoryNode) {
        self.data_mut(node).content = None;
    }

    fn append_to(&mut self, parent: &MemoryNode, node: &MemoryNode) {
        self.detach(node);
        self.data_mut(node).parent = Some(parent.0);
        self.data_mut(parent).children.push(node.0);
    }

    fn detach(&mut self, node: &MemoryNode) {
        if let Some(parent) = self.data(node).parent {
            let parent_node = MemoryNode(parent);
            self.data_mut(&parent_node).children.retain(|&c| c != node.0);
            self.data_mut(node).parent = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryHost;
    use crate::host::NodeHost;

    #[test]
    fn attach_detach_maintains_the_tree() {
        let mut host = MemoryHost::new();
        let parent = host.create_node();
        let a = host.create_node();
        let b = host.create_node();

        host.append_to(&parent, &a);
        host.append_to(&parent, &b);
        assert_eq!(host.children(&parent), [a, b]);
        assert_eq!(host.parent(&a), Some(parent));

        host.detach(&a);
        assert_eq!(host.children(&parent), [b]);
        assert_eq!(host.parent(&a), None);

        // Re-appending moves instead of duplicating.
        host.append_to(&parent, &a);
        host.append_to(&parent, &a);
        assert_eq!(host.children(&parent), [b, a]);
    }

    #[test]
    fn queries_reflect_mutations() {
        let mut host = MemoryHost::new();
        let node = host.create_node();
        host.set_attribute(&node, "data-id", "x");
        host.set_class(&node, "item", true);
        host.set_transform(&node, 0.0, 120.0);
        host.set_content(&node, "body".into());

        assert_eq!(host.attribute(&node, "data-id"), Some("x"));
        assert!(host.has_class(&node, "item"));
        assert_eq!(host.transform(&node), Some((0.0, 120.0)));
        assert_eq!(host.content(&node), Some("body"));

        host.remove_attribute(&node, "data-id");
        host.set_class(&node, "item", false);
        host.clear_content(&node);
        assert_eq!(host.attribute(&node, "data-id"), None);
        assert!(!host.has_class(&node, "item"));
        assert_eq!(host.content(&node), None);
    }

    #[test]
    fn find_by_attribute_walks_the_subtree() {
        let mut host = MemoryHost::new();
        let root = host.create_node();
        let child = host.create_node();
        let grandchild = host.create_node();
        host.append_to(&root, &child);
        host.append_to(&child, &grandchild);
        host.set_attribute(&grandchild, "data-index", "5");

        let found = host.find_by_attribute(&root, "data-index", "5");
        assert_eq!(found, [grandchild]);
    }
}
