// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`ListHost`] for tests and headless embedding.
//!
//! Wraps [`MemoryHost`](hedgerow_dom::MemoryHost) (the reference node
//! host) with the platform services the orchestrator needs: selector
//! lookup, a scroll surface with explicit geometry, a manually advanced
//! clock, and a queue that records dispatched adapter reads instead of
//! performing them. Tests drive the queue by hand:
//!
//! 1. interact with the list,
//! 2. inspect [`MemoryListHost::take_reads`],
//! 3. feed pages back through [`List::complete_read`](crate::List::complete_read).

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;
use hedgerow_data::ReadRequest;
use hedgerow_dom::{MemoryHost, MemoryNode, NodeHost};
use hedgerow_scroll::ScrollSurface;

use crate::config::{ContainerTarget, ScrollMode};
use crate::host::ListHost;

#[derive(Debug)]
struct SurfaceState {
    offset: f64,
    viewport_extent: f64,
    content_extent: f64,
}

/// A scroll surface over plain numbers.
///
/// Handles are shared: the clone held by the list and the clone held by
/// the test see the same state, so a test can move the "scrollbar" and
/// then deliver the scroll event.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl MemorySurface {
    fn new(viewport_extent: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                offset: 0.0,
                viewport_extent,
                content_extent: 0.0,
            })),
        }
    }

    /// Changes the viewport extent (simulating a resize).
    pub fn set_viewport_extent(&self, extent: f64) {
        self.state.borrow_mut().viewport_extent = extent;
    }
}

impl ScrollSurface for MemorySurface {
    fn scroll_offset(&self) -> f64 {
        self.state.borrow().offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        let max = self.max_scroll_offset();
        self.state.borrow_mut().offset = offset.clamp(0.0, max);
    }

    fn viewport_extent(&self) -> f64 {
        self.state.borrow().viewport_extent
    }

    fn max_scroll_offset(&self) -> f64 {
        let state = self.state.borrow();
        (state.content_extent - state.viewport_extent).max(0.0)
    }

    fn set_content_extent(&mut self, extent: f64) {
        self.state.borrow_mut().content_extent = extent.max(0.0);
    }
}

/// The in-memory platform.
#[derive(Debug)]
pub struct MemoryListHost {
    dom: MemoryHost,
    selectors: HashMap<String, MemoryNode>,
    surface: MemorySurface,
    now_ms: f64,
    reads: Vec<ReadRequest>,
    cross_extent: f64,
    scroll_extent: f64,
}

impl MemoryListHost {
    /// Creates a host whose container is `cross_extent` wide and
    /// `scroll_extent` tall (for a vertical list).
    #[must_use]
    pub fn new(cross_extent: f64, scroll_extent: f64) -> Self {
        Self {
            dom: MemoryHost::new(),
            selectors: HashMap::new(),
            surface: MemorySurface::new(scroll_extent),
            now_ms: 0.0,
            reads: Vec::new(),
            cross_extent,
            scroll_extent,
        }
    }

    /// Creates a container node and registers it under `selector`.
    pub fn register_selector(&mut self, selector: &str) -> MemoryNode {
        let node = self.dom.create_node();
        self.selectors.insert(String::from(selector), node);
        node
    }

    /// The underlying document, for assertions.
    #[must_use]
    pub fn dom(&self) -> &MemoryHost {
        &self.dom
    }

    /// A handle to the scroll surface shared with the list.
    #[must_use]
    pub fn surface(&self) -> MemorySurface {
        self.surface.clone()
    }

    /// Sets the clock.
    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Advances the clock.
    pub fn advance(&mut self, delta_ms: f64) {
        self.now_ms += delta_ms;
    }

    /// Drains the recorded adapter reads.
    pub fn take_reads(&mut self) -> Vec<ReadRequest> {
        core::mem::take(&mut self.reads)
    }

    /// The recorded adapter reads, undrained.
    #[must_use]
    pub fn reads(&self) -> &[ReadRequest] {
        &self.reads
    }

    /// Changes the container geometry (before a resize notification).
    pub fn set_container_extents(&mut self, cross_extent: f64, scroll_extent: f64) {
        self.cross_extent = cross_extent;
        self.scroll_extent = scroll_extent;
        self.surface.set_viewport_extent(scroll_extent);
    }
}

impl NodeHost for MemoryListHost {
    type Node = MemoryNode;
    type Content = String;

    fn create_node(&mut self) -> MemoryNode {
        self.dom.create_node()
    }

    fn set_attribute(&mut self, node: &MemoryNode, name: &str, value: &str) {
        self.dom.set_attribute(node, name, value);
    }

    fn remove_attribute(&mut self, node: &MemoryNode, name: &str) {
        self.dom.remove_attribute(node, name);
    }

    fn set_style(&mut self, node: &MemoryNode, name: &str, value: &str) {
        self.dom.set_style(node, name, value);
    }

    fn set_class(&mut self, node: &MemoryNode, class: &str, enabled: bool) {
        self.dom.set_class(node, class, enabled);
    }

    fn set_transform(&mut self, node: &MemoryNode, x: f64, y: f64) {
        self.dom.set_transform(node, x, y);
    }

    fn set_width(&mut self, node: &MemoryNode, width: Option<f64>) {
        self.dom.set_width(node, width);
    }

    fn set_content(&mut self, node: &MemoryNode, content: String) {
        self.dom.set_content(node, content);
    }

    fn clear_content(&mut self, node: &MemoryNode) {
        self.dom.clear_content(node);
    }

    fn append_to(&mut self, parent: &MemoryNode, node: &MemoryNode) {
        self.dom.append_to(parent, node);
    }

    fn detach(&mut self, node: &MemoryNode) {
        self.dom.detach(node);
    }
}

impl ListHost for MemoryListHost {
    type Surface = MemorySurface;

    fn resolve_container(&mut self, target: &ContainerTarget<MemoryNode>) -> Option<MemoryNode> {
        match target {
            ContainerTarget::Node(node) => Some(*node),
            ContainerTarget::Selector(selector) => self.selectors.get(selector.as_str()).copied(),
        }
    }

    fn create_surface(&mut self, _viewport: &MemoryNode, _mode: ScrollMode) -> MemorySurface {
        self.surface.clone()
    }

    fn container_cross_extent(&self, _container: &MemoryNode) -> f64 {
        self.cross_extent
    }

    fn container_extent(&self, _container: &MemoryNode) -> f64 {
        self.scroll_extent
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn dispatch_read(&mut self, request: ReadRequest) {
        self.reads.push(request);
    }
}
