// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List configuration and mount-time validation.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hedgerow_data::INITIAL_LOAD_SIZE;
use hedgerow_dom::ClassNames;

use crate::error::ConfigError;
use crate::key::Key;
use crate::plugin::{PluginSet, builtin};
use crate::selection::SelectionMode;

/// Extra entries rendered on each side of the visible range.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Scroll axis of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Items stack top-to-bottom.
    #[default]
    Vertical,
    /// Items stack left-to-right.
    Horizontal,
}

/// What actually scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// The list owns an internal overflow viewport.
    #[default]
    Container,
    /// The list rides the document window.
    Window,
}

/// How the mount container is identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerTarget<N> {
    /// A node handle the embedder already holds.
    Node(N),
    /// A selector for the host to resolve; mount fails if nothing matches.
    Selector(String),
}

/// What the template renders for one entry.
#[derive(Debug)]
pub struct ItemContext<'a, T> {
    /// The item, or `None` for a not-yet-loaded placeholder. Templates
    /// must tolerate the placeholder case; it is what stays on screen
    /// when an adapter read fails.
    pub item: Option<&'a T>,
    /// The entry's data index.
    pub index: usize,
    /// Whether the entry is in the selection set.
    pub selected: bool,
    /// Whether the entry holds keyboard focus.
    pub focused: bool,
}

/// Produces a node's content for one entry.
pub type Template<T, C> = Box<dyn FnMut(ItemContext<'_, T>) -> C>;

/// Extracts an item's stable key.
pub type KeyFn<T> = Box<dyn Fn(&T, usize) -> Key>;

/// Per-entry extent along the scroll axis.
pub enum ItemExtent {
    /// Every entry shares one extent.
    Fixed(f64),
    /// Extents are declared per index.
    PerIndex(Box<dyn Fn(usize) -> f64>),
}

impl fmt::Debug for ItemExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(extent) => f.debug_tuple("Fixed").field(extent).finish(),
            Self::PerIndex(_) => f.write_str("PerIndex(..)"),
        }
    }
}

/// The mandatory per-item configuration.
pub struct ItemConfig<T, C> {
    /// Entry extents; a fixed extent must be positive.
    pub extent: ItemExtent,
    /// The template invoked for every mount and identity change.
    pub template: Template<T, C>,
    /// The key function; defaults to the data index.
    pub key: KeyFn<T>,
}

impl<T, C> ItemConfig<T, C> {
    /// Creates an item configuration with index-based keys.
    #[must_use]
    pub fn new(extent: ItemExtent, template: Template<T, C>) -> Self {
        Self {
            extent,
            template,
            key: Box::new(|_, index| Key::from(index)),
        }
    }

    /// Replaces the key function.
    #[must_use]
    pub fn with_key(mut self, key: KeyFn<T>) -> Self {
        self.key = key;
        self
    }
}

impl<T, C> fmt::Debug for ItemConfig<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemConfig")
            .field("extent", &self.extent)
            .finish_non_exhaustive()
    }
}

/// Header extent for grouped lists.
pub enum HeaderExtent {
    /// Every header shares one extent.
    Fixed(f64),
    /// Extents are declared per group key.
    PerKey(Box<dyn Fn(&str) -> f64>),
}

impl fmt::Debug for HeaderExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(extent) => f.debug_tuple("Fixed").field(extent).finish(),
            Self::PerKey(_) => f.write_str("PerKey(..)"),
        }
    }
}

/// Grouping configuration.
pub struct GroupConfig<T, C> {
    /// Maps an item to its group key; items must be pre-sorted by group.
    pub key_of: Box<dyn Fn(&T, usize) -> String>,
    /// Header sizing. Switching between fixed and per-key sizing rebuilds
    /// the grouped layout wholesale.
    pub header_extent: HeaderExtent,
    /// Renders a header's content (also used for the sticky header).
    pub header_template: Box<dyn FnMut(&str) -> C>,
}

impl<T, C> fmt::Debug for GroupConfig<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupConfig")
            .field("header_extent", &self.header_extent)
            .finish_non_exhaustive()
    }
}

/// Grid configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of columns; must be at least 1.
    pub columns: usize,
    /// Gap between cells on both axes.
    pub gap: f64,
}

/// Lazy-loading configuration.
///
/// The adapter itself lives host-side (see
/// [`ListHost::dispatch_read`](crate::ListHost::dispatch_read)); this only
/// declares that one exists and how it pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Declared item count; revised by resolved pages.
    pub total: usize,
    /// Items per load-more chunk and per initial load.
    pub chunk_size: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            total: 0,
            chunk_size: INITIAL_LOAD_SIZE,
        }
    }
}

/// Full configuration for one list instance.
pub struct ListConfig<T, C, N> {
    /// Where to mount.
    pub container: ContainerTarget<N>,
    /// Item extents, template, and keys.
    pub item: ItemConfig<T, C>,
    /// Eagerly supplied items.
    pub items: Vec<T>,
    /// Lazy loading through a host-side adapter.
    pub adapter: Option<AdapterConfig>,
    /// Extra entries rendered on each side of the visible range.
    pub overscan: usize,
    /// CSS class prefix, default `vlist`.
    pub class_prefix: String,
    /// Selection behavior.
    pub selection_mode: SelectionMode,
    /// Scroll axis.
    pub direction: Direction,
    /// Tail-anchored mode: the list grows at the top.
    pub reverse: bool,
    /// Container or window scrolling.
    pub scroll_mode: ScrollMode,
    /// Accessible label for the listbox root.
    pub aria_label: Option<String>,
    /// Group headers.
    pub groups: Option<GroupConfig<T, C>>,
    /// Grid layout.
    pub grid: Option<GridConfig>,
}

impl<T, C, N> ListConfig<T, C, N> {
    /// Creates a configuration with defaults for everything optional.
    #[must_use]
    pub fn new(container: ContainerTarget<N>, item: ItemConfig<T, C>) -> Self {
        Self {
            container,
            item,
            items: Vec::new(),
            adapter: None,
            overscan: DEFAULT_OVERSCAN,
            class_prefix: String::from(ClassNames::DEFAULT_PREFIX),
            selection_mode: SelectionMode::default(),
            direction: Direction::default(),
            reverse: false,
            scroll_mode: ScrollMode::default(),
            aria_label: None,
            groups: None,
            grid: None,
        }
    }

    /// Validates the configuration and resolves the active plugin set.
    ///
    /// Checks the hard requirements (positive fixed extent, non-empty
    /// grid) and the feature compatibility matrix (grid against groups,
    /// horizontal, and reverse).
    pub fn validate(&self) -> Result<PluginSet, ConfigError> {
        if let ItemExtent::Fixed(extent) = &self.item.extent
            && *extent <= 0.0
        {
            return Err(ConfigError::NonPositiveExtent { extent: *extent });
        }
        if let Some(grid) = &self.grid
            && grid.columns == 0
        {
            return Err(ConfigError::EmptyGrid);
        }

        let mut requested = Vec::from([
            builtin::COMPRESSION,
            builtin::SCROLLBAR,
            builtin::SNAPSHOTS,
        ]);
        if self.selection_mode != SelectionMode::None {
            requested.push(builtin::SELECTION);
        }
        if self.adapter.is_some() {
            requested.push(builtin::ADAPTER);
        }
        if self.groups.is_some() {
            requested.push(builtin::GROUPS);
        }
        if self.grid.is_some() {
            requested.push(builtin::GRID);
        }
        if self.direction == Direction::Horizontal {
            requested.push(builtin::HORIZONTAL);
        }
        if self.reverse {
            requested.push(builtin::REVERSE);
        }
        PluginSet::resolve(requested)
    }
}

impl<T, C, N: fmt::Debug> fmt::Debug for ListConfig<T, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListConfig")
            .field("container", &self.container)
            .field("items", &self.items.len())
            .field("adapter", &self.adapter)
            .field("overscan", &self.overscan)
            .field("class_prefix", &self.class_prefix)
            .field("selection_mode", &self.selection_mode)
            .field("direction", &self.direction)
            .field("reverse", &self.reverse)
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::{
        ContainerTarget, Direction, GridConfig, GroupConfig, HeaderExtent, ItemConfig, ItemExtent,
        ListConfig,
    };
    use crate::error::ConfigError;

    fn config() -> ListConfig<u32, String, u32> {
        ListConfig::new(
            ContainerTarget::Selector(String::from("#list")),
            ItemConfig::new(
                ItemExtent::Fixed(40.0),
                Box::new(|ctx| alloc::format!("{:?}", ctx.item)),
            ),
        )
    }

    fn groups() -> GroupConfig<u32, String> {
        GroupConfig {
            key_of: Box::new(|item, _| alloc::format!("{}", item / 10)),
            header_extent: HeaderExtent::Fixed(10.0),
            header_template: Box::new(|key| String::from(key)),
        }
    }

    #[test]
    fn defaults_validate() {
        let set = config().validate().unwrap();
        assert!(set.contains("compression"));
        assert!(set.contains("scrollbar"));
        assert!(!set.contains("grid"));
    }

    #[test]
    fn non_positive_extents_are_rejected() {
        let mut cfg = config();
        cfg.item.extent = ItemExtent::Fixed(0.0);
        assert_eq!(
            cfg.validate().unwrap_err(),
            ConfigError::NonPositiveExtent { extent: 0.0 }
        );
    }

    #[test]
    fn grid_combinations_fail_at_validation() {
        let mut cfg = config();
        cfg.grid = Some(GridConfig {
            columns: 4,
            gap: 10.0,
        });
        cfg.groups = Some(groups());
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::Incompatible { .. }
        ));

        let mut cfg = config();
        cfg.grid = Some(GridConfig {
            columns: 4,
            gap: 0.0,
        });
        cfg.direction = Direction::Horizontal;
        assert!(cfg.validate().is_err());

        let mut cfg = config();
        cfg.grid = Some(GridConfig {
            columns: 0,
            gap: 0.0,
        });
        assert_eq!(cfg.validate().unwrap_err(), ConfigError::EmptyGrid);
    }

    #[test]
    fn variable_extents_skip_the_positivity_check() {
        let mut cfg = config();
        cfg.item.extent = ItemExtent::PerIndex(Box::new(|_| 40.0));
        assert!(cfg.validate().is_ok());
    }
}
