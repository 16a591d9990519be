// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll sources: overflow element or document window.

use hedgerow_core::Direction;
use hedgerow_scroll::ScrollSurface;
use web_sys::{Element, Window};

/// A browser scroll source along one axis.
///
/// The browser derives the scrollable range from the sized content
/// element, so `set_content_extent` is the default no-op here.
#[derive(Debug, Clone)]
pub enum WebSurface {
    /// An `overflow: auto` element (the list's own viewport).
    Element {
        /// The scrolling element.
        element: Element,
        /// Which axis scrolls.
        direction: Direction,
    },
    /// The document window.
    Window {
        /// The window.
        window: Window,
        /// Which axis scrolls.
        direction: Direction,
    },
}

impl WebSurface {
    /// Wraps the list's own overflow viewport.
    #[must_use]
    pub fn element(element: Element, direction: Direction) -> Self {
        Self::Element { element, direction }
    }

    /// Wraps the document window.
    #[must_use]
    pub fn window(window: Window, direction: Direction) -> Self {
        Self::Window { window, direction }
    }
}

impl ScrollSurface for WebSurface {
    fn scroll_offset(&self) -> f64 {
        match self {
            Self::Element { element, direction } => match direction {
                Direction::Vertical => f64::from(element.scroll_top()),
                Direction::Horizontal => f64::from(element.scroll_left()),
            },
            Self::Window { window, direction } => match direction {
                Direction::Vertical => window.page_y_offset().unwrap_or(0.0),
                Direction::Horizontal => window.page_x_offset().unwrap_or(0.0),
            },
        }
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        let offset = offset.max(0.0);
        match self {
            Self::Element { element, direction } => match direction {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "scrollTop is an integer CSSOM quantity; sub-pixel offsets round"
                )]
                Direction::Vertical => element.set_scroll_top(offset as i32),
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "scrollLeft is an integer CSSOM quantity; sub-pixel offsets round"
                )]
                Direction::Horizontal => element.set_scroll_left(offset as i32),
            },
            Self::Window { window, direction } => {
                let (x, y) = match direction {
                    Direction::Vertical => (window.page_x_offset().unwrap_or(0.0), offset),
                    Direction::Horizontal => (offset, window.page_y_offset().unwrap_or(0.0)),
                };
                window.scroll_to_with_x_and_y(x, y);
            }
        }
    }

    fn viewport_extent(&self) -> f64 {
        match self {
            Self::Element { element, direction } => match direction {
                Direction::Vertical => f64::from(element.client_height()),
                Direction::Horizontal => f64::from(element.client_width()),
            },
            Self::Window { window, direction } => {
                let extent = match direction {
                    Direction::Vertical => window.inner_height(),
                    Direction::Horizontal => window.inner_width(),
                };
                extent.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
            }
        }
    }

    fn max_scroll_offset(&self) -> f64 {
        match self {
            Self::Element { element, direction } => {
                let (scroll, client) = match direction {
                    Direction::Vertical => (element.scroll_height(), element.client_height()),
                    Direction::Horizontal => (element.scroll_width(), element.client_width()),
                };
                f64::from(scroll - client).max(0.0)
            }
            Self::Window { window, direction } => {
                let document = window.document();
                let root = document.as_ref().and_then(web_sys::Document::document_element);
                match root {
                    Some(root) => {
                        let scroll = match direction {
                            Direction::Vertical => root.scroll_height(),
                            Direction::Horizontal => root.scroll_width(),
                        };
                        (f64::from(scroll) - self.viewport_extent()).max(0.0)
                    }
                    None => 0.0,
                }
            }
        }
    }
}
