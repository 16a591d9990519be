// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The DOM-backed list host.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

use hedgerow_core::{ContainerTarget, Direction, ListHost, ScrollMode};
use hedgerow_data::ReadRequest;
use hedgerow_dom::NodeHost;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::surface::WebSurface;

/// What a template can hand to the renderer.
#[derive(Debug, Clone)]
pub enum WebContent {
    /// Markup assigned through `innerHTML`.
    Html(String),
    /// A detached element adopted as the node's only child.
    Element(Element),
}

/// The browser platform for one list.
///
/// The adapter callback receives every planned read; the embedder
/// performs it (usually a `fetch` wrapped in `spawn_local`) and resolves
/// it through `List::complete_read` / `List::fail_read`.
pub struct WebHost {
    window: Window,
    document: Document,
    direction: Direction,
    dispatch: Box<dyn FnMut(ReadRequest)>,
}

impl core::fmt::Debug for WebHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebHost")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl WebHost {
    /// Creates a host over the given window.
    ///
    /// `dispatch` is invoked for every planned adapter read; lists
    /// without an adapter never call it.
    #[must_use]
    pub fn new(
        window: Window,
        direction: Direction,
        dispatch: impl FnMut(ReadRequest) + 'static,
    ) -> Self {
        let document = window.document().expect("window has no document");
        Self {
            window,
            document,
            direction,
            dispatch: Box::new(dispatch),
        }
    }

    fn style_of(element: &Element) -> Option<web_sys::CssStyleDeclaration> {
        element.dyn_ref::<HtmlElement>().map(HtmlElement::style)
    }
}

impl NodeHost for WebHost {
    type Node = Element;
    type Content = WebContent;

    fn create_node(&mut self) -> Element {
        self.document
            .create_element("div")
            .expect("failed to create element")
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        node.set_attribute(name, value)
            .expect("failed to set attribute");
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        let _ = node.remove_attribute(name);
    }

    fn set_style(&mut self, node: &Element, name: &str, value: &str) {
        if let Some(style) = Self::style_of(node) {
            style
                .set_property(name, value)
                .expect("failed to set style property");
        }
    }

    fn set_class(&mut self, node: &Element, class: &str, enabled: bool) {
        let classes = node.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        result.expect("failed to toggle class");
    }

    fn set_transform(&mut self, node: &Element, x: f64, y: f64) {
        if let Some(style) = Self::style_of(node) {
            style
                .set_property("transform", &format!("translate({x}px, {y}px)"))
                .expect("failed to set transform");
        }
    }

    fn set_width(&mut self, node: &Element, width: Option<f64>) {
        if let Some(style) = Self::style_of(node) {
            match width {
                Some(width) => style
                    .set_property("width", &format!("{width}px"))
                    .expect("failed to set width"),
                None => {
                    let _ = style.remove_property("width");
                }
            }
        }
    }

    fn set_content(&mut self, node: &Element, content: WebContent) {
        match content {
            WebContent::Html(html) => node.set_inner_html(&html),
            WebContent::Element(child) => {
                node.set_inner_html("");
                node.append_child(&child).expect("failed to adopt content");
            }
        }
    }

    fn clear_content(&mut self, node: &Element) {
        node.set_inner_html("");
    }

    fn append_to(&mut self, parent: &Element, node: &Element) {
        parent.append_child(node).expect("failed to append node");
    }

    fn detach(&mut self, node: &Element) {
        node.remove();
    }
}

impl ListHost for WebHost {
    type Surface = WebSurface;

    fn resolve_container(&mut self, target: &ContainerTarget<Element>) -> Option<Element> {
        match target {
            ContainerTarget::Node(node) => Some(node.clone()),
            ContainerTarget::Selector(selector) => {
                self.document.query_selector(selector).ok().flatten()
            }
        }
    }

    fn create_surface(&mut self, viewport: &Element, mode: ScrollMode) -> WebSurface {
        let surface = match mode {
            ScrollMode::Container => WebSurface::element(viewport.clone(), self.direction),
            ScrollMode::Window => WebSurface::window(self.window.clone(), self.direction),
        };
        if mode == ScrollMode::Container {
            // The viewport element is the scroll container.
            self.set_style(viewport, "overflow", "auto");
            self.set_style(viewport, "height", "100%");
        }
        surface
    }

    fn container_cross_extent(&self, container: &Element) -> f64 {
        match self.direction {
            Direction::Vertical => f64::from(container.client_width()),
            Direction::Horizontal => f64::from(container.client_height()),
        }
    }

    fn container_extent(&self, container: &Element) -> f64 {
        match self.direction {
            Direction::Vertical => f64::from(container.client_height()),
            Direction::Horizontal => f64::from(container.client_width()),
        }
    }

    fn now_ms(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    fn dispatch_read(&mut self, request: ReadRequest) {
        (self.dispatch)(request);
    }
}
