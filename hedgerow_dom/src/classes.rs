// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The CSS class family derived from a configurable prefix.

use alloc::format;
use alloc::string::String;

/// Class names for every element the engine creates.
///
/// All names derive from one prefix (default `vlist`), precomputed because
/// the item-level names are applied on every mount. BEM-ish shape:
/// block `vlist`, elements `vlist-item`, modifiers `vlist-item--selected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// The root element.
    pub root: String,
    /// The scrollable viewport element.
    pub viewport: String,
    /// The full-height content sizer.
    pub content: String,
    /// The container holding mounted items.
    pub items: String,
    /// One mounted item.
    pub item: String,
    /// Modifier for a selected item.
    pub item_selected: String,
    /// Modifier for the focused item.
    pub item_focused: String,
    /// Root modifier while grid mode is active.
    pub grid: String,
    /// Root modifier while grouping is active.
    pub grouped: String,
    /// The sticky group-header node.
    pub sticky_header: String,
    /// Root modifier while scrolling is in progress.
    pub scrolling: String,
    /// The custom scrollbar container.
    pub scrollbar: String,
    /// The scrollbar thumb.
    pub scrollbar_thumb: String,
    /// The scrollbar track.
    pub scrollbar_track: String,
}

impl ClassNames {
    /// Default class prefix.
    pub const DEFAULT_PREFIX: &'static str = "vlist";

    /// Derives the class family from `prefix`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            root: String::from(prefix),
            viewport: format!("{prefix}-viewport"),
            content: format!("{prefix}-content"),
            items: format!("{prefix}-items"),
            item: format!("{prefix}-item"),
            item_selected: format!("{prefix}-item--selected"),
            item_focused: format!("{prefix}-item--focused"),
            grid: format!("{prefix}--grid"),
            grouped: format!("{prefix}--grouped"),
            sticky_header: format!("{prefix}-sticky-header"),
            scrolling: format!("{prefix}--scrolling"),
            scrollbar: format!("{prefix}-scrollbar"),
            scrollbar_thumb: format!("{prefix}-scrollbar-thumb"),
            scrollbar_track: format!("{prefix}-scrollbar-track"),
        }
    }

    /// The element id for the item at a layout index,
    /// `<prefix>-item-<index>`.
    #[must_use]
    pub fn item_id(&self, layout_index: usize) -> String {
        format!("{}-item-{layout_index}", self.root)
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}
