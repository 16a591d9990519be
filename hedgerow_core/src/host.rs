// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the orchestrator needs from its platform, beyond plain nodes.

use hedgerow_data::ReadRequest;
use hedgerow_dom::NodeHost;
use hedgerow_scroll::ScrollSurface;

use crate::config::{ContainerTarget, ScrollMode};

/// Platform services for one list instance.
///
/// Extends [`NodeHost`] with the pieces that are not per-node: container
/// lookup, the scroll surface, geometry reads, the clock, and adapter-read
/// dispatch. The browser backend implements this over `web-sys`; the
/// in-memory host in [`crate::memory`] implements it for tests and
/// headless embedding.
pub trait ListHost: NodeHost {
    /// The scroll surface this host produces.
    type Surface: ScrollSurface;

    /// Resolves the mount container; `None` fails the mount.
    fn resolve_container(&mut self, target: &ContainerTarget<Self::Node>) -> Option<Self::Node>;

    /// Builds the scroll surface for a mounted skeleton.
    ///
    /// In [`ScrollMode::Container`] the surface wraps `viewport`; in
    /// [`ScrollMode::Window`] it wraps the document window and `viewport`
    /// only anchors the content.
    fn create_surface(&mut self, viewport: &Self::Node, mode: ScrollMode) -> Self::Surface;

    /// The container's cross-axis size (width for vertical lists).
    fn container_cross_extent(&self, container: &Self::Node) -> f64;

    /// The container's size along the scroll axis.
    fn container_extent(&self, container: &Self::Node) -> f64;

    /// Current monotonic time in milliseconds (`performance.now()`).
    fn now_ms(&self) -> f64;

    /// Performs a planned adapter read.
    ///
    /// The host runs the read however it likes (a JS promise, a channel, a
    /// test queue) and eventually reports back through
    /// [`List::complete_read`](crate::List::complete_read) or
    /// [`List::fail_read`](crate::List::fail_read). Hosts without an
    /// adapter never receive this call because mounts without
    /// [`AdapterConfig`](crate::AdapterConfig) plan no reads.
    fn dispatch_read(&mut self, request: ReadRequest);
}
