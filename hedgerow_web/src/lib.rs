// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Web: the browser backend.
//!
//! This crate implements the Hedgerow host abstractions over the real
//! DOM when targeting `wasm32`:
//!
//! - [`WebHost`]: a [`NodeHost`](hedgerow_dom::NodeHost) +
//!   [`ListHost`](hedgerow_core::ListHost) over `web_sys::Element`, with
//!   [`WebContent`] as the template output (an HTML string or a detached
//!   element).
//! - [`WebSurface`]: the scroll-source polymorphism — an overflow element
//!   or the document window — behind one
//!   [`ScrollSurface`](hedgerow_scroll::ScrollSurface).
//! - [`ResizeObserver`]: a minimal `wasm_bindgen` binding for
//!   `ResizeObserver`, which `web-sys` does not expose in the feature set
//!   this crate pins.
//!
//! ## Wiring
//!
//! The embedder owns the event registration (frameworks differ too much
//! for this crate to take it over):
//!
//! - `scroll` on the viewport (or window) → `List::notify_scroll` with
//!   `performance.now()`, and arm a timeout for `List::idle_deadline` →
//!   `List::notify_idle`.
//! - `requestAnimationFrame` while `List::is_animating` → `List::tick`.
//! - `click` → walk up from the event target to the nearest
//!   `data-index` carrier and call `List::handle_click`.
//! - `keydown` → `ListKey::from_key(event.key())`, call
//!   `List::handle_key`, and `preventDefault()` when it returns `true`.
//! - [`ResizeObserver`] on the container (element mode) or a window
//!   `resize` listener (window mode) → `List::notify_resize`.
//! - Adapter reads arrive through the callback given to
//!   [`WebHost::new`]; resolve them with `List::complete_read` /
//!   `List::fail_read`.
//!
//! On non-`wasm32` targets this crate compiles to an empty shell, like
//! any other platform backend.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod resize_observer;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use host::{WebContent, WebHost};
#[cfg(target_arch = "wasm32")]
pub use resize_observer::{ObservedElement, ResizeObserver};
#[cfg(target_arch = "wasm32")]
pub use surface::WebSurface;
