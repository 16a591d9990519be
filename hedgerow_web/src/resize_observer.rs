// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal `ResizeObserver` binding.
//!
//! `web-sys` gates `ResizeObserver` behind its own feature flags and an
//! older callback shape; this binding declares exactly the surface the
//! list needs — construct, observe, unobserve, disconnect.

use alloc::boxed::Box;

use wasm_bindgen::prelude::Closure;
use web_sys::Element;

mod raw {
    use wasm_bindgen::prelude::{Closure, wasm_bindgen};
    use wasm_bindgen::JsValue;
    use web_sys::{DomRectReadOnly, Element};

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(extends = ::js_sys::Object)]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub(super) type ResizeObserver;
        #[wasm_bindgen(constructor)]
        pub(super) fn new(callback: &ResizeCallback) -> ResizeObserver;
        #[wasm_bindgen(method, catch)]
        pub(super) fn disconnect(this: &ResizeObserver) -> Result<(), JsValue>;
        #[wasm_bindgen(method, catch)]
        pub(super) fn observe(this: &ResizeObserver, element: Element) -> Result<(), JsValue>;
        #[wasm_bindgen(method, catch)]
        pub(super) fn unobserve(this: &ResizeObserver, element: Element) -> Result<(), JsValue>;

        #[wasm_bindgen(extends = ::js_sys::Object)]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub(super) type ResizeObserverEntry;
        #[wasm_bindgen(structural, method, getter)]
        pub(super) fn target(this: &ResizeObserverEntry) -> Element;
        #[wasm_bindgen(structural, method, getter, js_name = contentRect)]
        pub(super) fn content_rect(this: &ResizeObserverEntry) -> DomRectReadOnly;
    }

    pub(super) type ResizeFn = dyn FnMut(Box<[ResizeObserverEntry]>, ResizeObserver);
    pub(super) type ResizeCallback = Closure<ResizeFn>;
}

/// Observes element size changes and reports the new content box.
///
/// Dropping the observer disconnects it; dropping an
/// [`ObservedElement`] unobserves just that element.
#[derive(Debug)]
pub struct ResizeObserver {
    // Held so the JS closure outlives the observer registration.
    _closure: raw::ResizeCallback,
    observer: raw::ResizeObserver,
}

/// An element registration returned by [`ResizeObserver::observe`].
#[derive(Debug)]
pub struct ObservedElement {
    observer: raw::ResizeObserver,
    element: Element,
}

impl ResizeObserver {
    /// Creates an observer invoking `callback(width, height)` for each
    /// resized element's content rect.
    #[must_use]
    pub fn new<F>(mut callback: F) -> Self
    where
        F: 'static + FnMut(f64, f64),
    {
        let closure = Closure::wrap(Box::new(
            move |entries: Box<[raw::ResizeObserverEntry]>, _this: raw::ResizeObserver| {
                for entry in &entries {
                    let rect = entry.content_rect();
                    callback(rect.width(), rect.height());
                }
            },
        ) as Box<raw::ResizeFn>);
        let observer = raw::ResizeObserver::new(&closure);
        Self {
            _closure: closure,
            observer,
        }
    }

    /// Starts observing `element`.
    pub fn observe(&self, element: Element) -> ObservedElement {
        self.observer
            .observe(element.clone())
            .expect("ResizeObserver.observe failed");
        ObservedElement {
            observer: self.observer.clone(),
            element,
        }
    }
}

impl Drop for ResizeObserver {
    fn drop(&mut self) {
        let _ = self.observer.disconnect();
    }
}

impl ObservedElement {
    /// The observed element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Drop for ObservedElement {
    fn drop(&mut self) {
        let _ = self.observer.unobserve(self.element.clone());
    }
}
