// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orchestrator: owns every component and runs the scroll pipeline.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Range;

use hedgerow_compression::SpaceMap;
use hedgerow_data::{
    DataManager, GateDecision, LOAD_MORE_THRESHOLD, LoadGate, Page, ReadContext, ReadOutcome,
};
use hedgerow_dom::{ClassNames, ItemFlags, ItemRender, NodePool, Reconciler};
use hedgerow_extents::{ExtentModel, FixedExtents, VariableExtents};
use hedgerow_grid::{GridLayout, row_extents};
use hedgerow_groups::{GroupLayout, GroupedExtents, sticky_state};
use hedgerow_scroll::{
    ScrollAlign, ScrollBehavior, ScrollController, ScrollSurface, aligned_offset,
};
use hedgerow_viewport::{RangeMemo, ViewportState, compute_viewport};

use crate::config::{
    ContainerTarget, Direction, GroupConfig, GridConfig, ItemContext, ItemExtent, KeyFn,
    ListConfig, Template,
};
use crate::error::ConfigError;
use crate::events::{Emitter, ListEvent, ListenerId};
use crate::host::ListHost;
use crate::key::Key;
use crate::layout::{ExtentStore, LayoutModel, NodeEntry};
use crate::scrollbar;
use crate::selection::{Selection, SelectionMode};
use crate::snapshot::Snapshot;

/// Lifecycle phase of a list instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Mounted and idle.
    Initialized,
    /// Inside a reconcile pass.
    Rendering,
    /// Destroyed; every operation is a silent no-op.
    Destroyed,
}

/// A mounted virtual list.
///
/// Constructed by [`List::mount`]; torn down by [`List::destroy`]. The
/// host forwards raw platform events (`notify_scroll`, `notify_resize`,
/// `handle_click`, `handle_key`, frame ticks, idle timers, adapter-read
/// completions) and the list runs the pipeline: viewport math, node
/// reconciliation, sticky header, scrollbar, and lazy loading.
pub struct List<T, H: ListHost> {
    host: H,
    phase: Phase,

    // Configuration.
    classes: ClassNames,
    overscan: usize,
    selection_mode: SelectionMode,
    direction: Direction,
    reverse: bool,
    template: Template<T, H::Content>,
    key_fn: KeyFn<T>,
    item_extent: ItemExtent,
    group_cfg: Option<GroupConfig<T, H::Content>>,
    grid_cfg: Option<GridConfig>,

    // Skeleton nodes.
    container: H::Node,
    root: H::Node,
    viewport_node: H::Node,
    content_node: H::Node,
    items_node: H::Node,
    sticky_node: Option<H::Node>,
    scrollbar_thumb: Option<H::Node>,

    // Components.
    scroll: ScrollController<H::Surface>,
    pool: NodePool<H>,
    reconciler: Reconciler,
    data: DataManager<T>,
    layout: LayoutModel,
    space_map: SpaceMap,
    viewport_state: ViewportState,
    memo: RangeMemo,
    selection: Selection,
    focused: Option<usize>,
    emitter: Emitter,
    gate: LoadGate,

    // Derived view state.
    sticky_group: Option<usize>,
    scrolling_class_on: bool,
    initial_load_pending: bool,
    viewport_extent: f64,
    cross_extent: f64,
}

impl<T, H: ListHost> core::fmt::Debug for List<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("List")
            .field("phase", &self.phase)
            .field("viewport_state", &self.viewport_state)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl<T, H: ListHost> List<T, H> {
    /// Mounts a list into the configured container.
    ///
    /// Validates the configuration, builds the DOM skeleton
    /// (`root[listbox] > viewport > content > items` plus the sticky
    /// header and scrollbar), constructs every component, performs the
    /// initial render, and — when an adapter is configured — plans the
    /// initial read.
    pub fn mount(mut host: H, config: ListConfig<T, H::Content, H::Node>) -> Result<Self, ConfigError> {
        let plugins = config.validate()?;

        let container = host.resolve_container(&config.container).ok_or_else(|| {
            let selector = match &config.container {
                ContainerTarget::Selector(selector) => selector.clone(),
                ContainerTarget::Node(_) => String::from("<node>"),
            };
            ConfigError::ContainerNotFound { selector }
        })?;

        let classes = ClassNames::new(&config.class_prefix);

        // Skeleton: root[listbox] > viewport > content > items.
        let root = host.create_node();
        host.set_class(&root, &classes.root, true);
        host.set_attribute(&root, "role", "listbox");
        host.set_attribute(&root, "tabindex", "0");
        let orientation = match config.direction {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        };
        host.set_attribute(&root, "aria-orientation", orientation);
        if let Some(label) = &config.aria_label {
            host.set_attribute(&root, "aria-label", label);
        }
        if config.grid.is_some() {
            host.set_class(&root, &classes.grid, true);
        }
        if config.groups.is_some() {
            host.set_class(&root, &classes.grouped, true);
        }

        let viewport_node = host.create_node();
        host.set_class(&viewport_node, &classes.viewport, true);
        let content_node = host.create_node();
        host.set_class(&content_node, &classes.content, true);
        let items_node = host.create_node();
        host.set_class(&items_node, &classes.items, true);

        host.append_to(&container, &root);
        host.append_to(&root, &viewport_node);
        host.append_to(&viewport_node, &content_node);
        host.append_to(&content_node, &items_node);

        let sticky_node = if plugins.contains("groups") {
            let node = host.create_node();
            host.set_class(&node, &classes.sticky_header, true);
            host.set_attribute(&node, "role", "presentation");
            host.set_attribute(&node, "aria-hidden", "true");
            host.set_style(&node, "position", "absolute");
            host.set_style(&node, "top", "0");
            host.set_style(&node, "pointer-events", "none");
            host.append_to(&root, &node);
            Some(node)
        } else {
            None
        };

        // Scrollbar: container > track > thumb.
        let scrollbar_node = host.create_node();
        host.set_class(&scrollbar_node, &classes.scrollbar, true);
        let track = host.create_node();
        host.set_class(&track, &classes.scrollbar_track, true);
        let thumb = host.create_node();
        host.set_class(&thumb, &classes.scrollbar_thumb, true);
        host.append_to(&root, &scrollbar_node);
        host.append_to(&scrollbar_node, &track);
        host.append_to(&track, &thumb);

        let surface = host.create_surface(&viewport_node, config.scroll_mode);
        let scroll = ScrollController::new(surface);

        let mut data = match &config.adapter {
            Some(adapter) => {
                let mut manager = DataManager::lazy(adapter.total);
                manager.set_chunk_size(adapter.chunk_size);
                // Eagerly supplied items seed the sparse store without
                // shrinking the declared total.
                manager.seed(config.items);
                manager
            }
            None => DataManager::eager(config.items),
        };
        data.set_reverse(config.reverse);

        let viewport_extent = host.container_extent(&container);
        let cross_extent = host.container_cross_extent(&container);

        let mut list = Self {
            host,
            phase: Phase::Initialized,
            classes,
            overscan: config.overscan,
            selection_mode: config.selection_mode,
            direction: config.direction,
            reverse: config.reverse,
            template: config.item.template,
            key_fn: config.item.key,
            item_extent: config.item.extent,
            group_cfg: config.groups,
            grid_cfg: config.grid,
            container,
            root,
            viewport_node,
            content_node,
            items_node,
            sticky_node,
            scrollbar_thumb: Some(thumb),
            scroll,
            pool: NodePool::new(),
            reconciler: Reconciler::new(),
            data,
            layout: LayoutModel::Plain(ExtentStore::Fixed(FixedExtents::new(0, 1.0))),
            space_map: SpaceMap::new(0.0, 0.0),
            viewport_state: ViewportState::empty(),
            memo: RangeMemo::new(),
            selection: Selection::new(),
            focused: None,
            emitter: Emitter::new(),
            gate: LoadGate::default(),
            sticky_group: None,
            scrolling_class_on: false,
            initial_load_pending: false,
            viewport_extent,
            cross_extent,
        };

        list.rebuild_layout();
        list.refresh();

        // Tail-anchored lists start at the bottom.
        if list.reverse {
            let max = list.scroll.surface().max_scroll_offset();
            let now = list.host.now_ms();
            list.scroll.scroll_to(max, ScrollBehavior::Auto, now);
            list.refresh();
        }

        if list.data.is_lazy()
            && let Some(request) = list.data.initial_load()
        {
            list.initial_load_pending = true;
            list.host.set_attribute(&list.root, "aria-busy", "true");
            list.emitter.emit(&ListEvent::LoadStart {
                offset: request.offset,
                limit: request.limit,
            });
            list.host.dispatch_read(request);
        }

        Ok(list)
    }

    // Accessors -----------------------------------------------------------

    /// Shared access to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The root node of the mounted skeleton.
    #[must_use]
    pub fn root(&self) -> &H::Node {
        &self.root
    }

    /// The scrollable viewport node (where hosts attach scroll listeners).
    #[must_use]
    pub fn viewport_node(&self) -> &H::Node {
        &self.viewport_node
    }

    /// The latest viewport state.
    #[must_use]
    pub fn viewport_state(&self) -> &ViewportState {
        &self.viewport_state
    }

    /// The selected keys, in insertion order.
    #[must_use]
    pub fn selected_keys(&self) -> &[Key] {
        self.selection.keys()
    }

    /// The focused data index, if any.
    #[must_use]
    pub const fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Returns `true` after [`List::destroy`].
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.phase == Phase::Destroyed
    }

    /// Registers an event listener.
    pub fn on(&mut self, listener: impl FnMut(&ListEvent) + 'static) -> ListenerId {
        self.emitter.on(listener)
    }

    /// Removes an event listener.
    pub fn off(&mut self, id: ListenerId) {
        self.emitter.off(id);
    }

    // Scroll pipeline -----------------------------------------------------

    /// Handles a raw scroll event from the host.
    pub fn notify_scroll(&mut self, now_ms: f64) {
        if self.is_destroyed() {
            return;
        }
        let offset = self.scroll.scroll_offset();
        self.handle_scroll(now_ms, offset);
    }

    /// Advances an in-flight smooth scroll; the host calls this from its
    /// frame callback while [`List::is_animating`] holds.
    pub fn tick(&mut self, now_ms: f64) {
        if self.is_destroyed() {
            return;
        }
        if let Some(offset) = self.scroll.animate(now_ms) {
            self.handle_scroll(now_ms, offset);
        }
    }

    /// Returns `true` while a smooth scroll is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.is_destroyed() && self.scroll.is_animating()
    }

    /// The instant the scroll-idle timeout elapses, for the host's timer.
    #[must_use]
    pub fn idle_deadline(&self) -> Option<f64> {
        self.scroll.idle_deadline()
    }

    /// Handles the scroll-idle timer.
    ///
    /// Once the idle timeout has genuinely elapsed this drops the
    /// scrolling CSS state and flushes any velocity-deferred load range.
    pub fn notify_idle(&mut self, now_ms: f64) {
        if self.is_destroyed() || self.scroll.is_scrolling(now_ms) {
            return;
        }
        if self.scrolling_class_on {
            let root = self.root.clone();
            self.host.set_class(&root, &self.classes.scrolling, false);
            self.scrolling_class_on = false;
        }
        if let Some(pending) = self.data.flush_pending() {
            self.ensure_data_range(pending);
        }
        self.maybe_load_more();
    }

    /// Handles a container resize.
    pub fn notify_resize(&mut self, now_ms: f64) {
        if self.is_destroyed() {
            return;
        }
        let _ = now_ms;
        self.viewport_extent = self.host.container_extent(&self.container);
        self.cross_extent = self.host.container_cross_extent(&self.container);
        // The snap zones are one viewport wide, so the map depends on the
        // viewport extent as much as on the content.
        self.rebuild_space_map();
        self.memo.invalidate();
        self.refresh();
        self.emitter.emit(&ListEvent::Resize {
            width: self.cross_extent,
            height: self.viewport_extent,
        });
    }

    fn handle_scroll(&mut self, now_ms: f64, offset: f64) {
        let direction = self.scroll.on_scroll_event(now_ms, offset);
        if !self.scrolling_class_on {
            let root = self.root.clone();
            self.host.set_class(&root, &self.classes.scrolling, true);
            self.scrolling_class_on = true;
        }

        let range_before = self.layout.node_range(&self.viewport_state.render);
        self.refresh();
        let range_after = self.layout.node_range(&self.viewport_state.render);

        self.emitter.emit(&ListEvent::Scroll { offset, direction });
        if range_before != range_after {
            self.emitter.emit(&ListEvent::RangeChange {
                start: range_after.start,
                end: range_after.end,
            });
        }

        self.ensure_after_scroll();
    }

    /// Recomputes the viewport state and reconciles when the range moved.
    fn refresh(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        let offset = self.scroll.scroll_offset();
        self.viewport_state = compute_viewport(
            offset,
            self.viewport_extent,
            &self.space_map,
            &self.layout,
            self.overscan,
        );
        self.reconcile_now();
        self.update_sticky();
        self.update_scrollbar();
    }

    fn reconcile_now(&mut self) {
        let node_range = self.layout.node_range(&self.viewport_state.render);
        if !self.memo.should_render(&node_range) {
            return;
        }
        self.phase = Phase::Rendering;

        let set_size = self.layout_set_size();
        let layout = &self.layout;
        let data = &self.data;
        let selection = &self.selection;
        let template = &mut self.template;
        let key_fn = &self.key_fn;
        let mut group_cfg = self.group_cfg.as_mut();
        let focused = self.focused;
        let bias = self.viewport_state.position_bias;
        let cross = self.cross_extent;
        let horizontal = self.direction == Direction::Horizontal;
        let focused_node = focused.map(|d| layout.node_of_data(d));

        self.reconciler.reconcile(
            &mut self.host,
            &mut self.pool,
            &self.classes,
            &self.root,
            &self.items_node,
            node_range,
            set_size,
            focused_node,
            |node_index| {
                let entry = layout.node_entry(node_index)?;
                let position = layout.node_position(node_index, cross, bias);
                let (x, y) = if horizontal {
                    (position.y, position.x)
                } else {
                    (position.x, position.y)
                };
                match entry {
                    NodeEntry::Item { data_index } => {
                        let item = match data.get(data_index) {
                            hedgerow_data::Slot::Loaded(item) => Some(item),
                            hedgerow_data::Slot::Placeholder => None,
                            hedgerow_data::Slot::Absent => return None,
                        };
                        let key = match item {
                            Some(item) => key_fn(item, data_index),
                            None => Key::Str(format!("pending-{data_index}")),
                        };
                        let selected = item.is_some() && selection.contains(&key);
                        let is_focused = focused == Some(data_index);
                        let mut flags = ItemFlags::empty();
                        if selected {
                            flags |= ItemFlags::SELECTED;
                        }
                        if is_focused {
                            flags |= ItemFlags::FOCUSED;
                        }
                        let content = template(ItemContext {
                            item,
                            index: data_index,
                            selected,
                            focused: is_focused,
                        });
                        Some(ItemRender {
                            key: key.to_string(),
                            content,
                            flags,
                            x,
                            y,
                            width: position.width,
                        })
                    }
                    NodeEntry::Header { group_index, key } => {
                        let config = group_cfg.as_deref_mut()?;
                        let content = (config.header_template)(&key);
                        Some(ItemRender {
                            key: format!("group-{group_index}-{key}"),
                            content,
                            flags: ItemFlags::empty(),
                            x,
                            y,
                            width: position.width,
                        })
                    }
                }
            },
        );

        self.phase = Phase::Initialized;
    }

    fn update_sticky(&mut self) {
        let Some(sticky_node) = self.sticky_node.clone() else {
            return;
        };
        let Some(grouped) = self.layout.grouped() else {
            return;
        };

        let scroll_virtual = self.viewport_state.scroll_virtual;
        let active = grouped
            .layout()
            .group_at_layout(grouped.index_at_offset(scroll_virtual));
        let Some(active) = active else {
            self.sticky_group = None;
            self.host.clear_content(&sticky_node);
            return;
        };
        let sticky_extent = grouped.extent_of(active.header_layout_index);
        let Some(snapshot) = sticky_state(grouped, scroll_virtual, sticky_extent) else {
            return;
        };

        let group_index = snapshot.group.group_index;
        let push = snapshot.push_offset;
        if self.sticky_group != Some(group_index) {
            self.sticky_group = Some(group_index);
            let key = snapshot.group.key.clone();
            if let Some(config) = self.group_cfg.as_mut() {
                let content = (config.header_template)(&key);
                self.host.set_content(&sticky_node, content);
            }
        }
        match self.direction {
            Direction::Vertical => self.host.set_transform(&sticky_node, 0.0, push),
            Direction::Horizontal => self.host.set_transform(&sticky_node, push, 0.0),
        }
    }

    fn update_scrollbar(&mut self) {
        let Some(thumb_node) = self.scrollbar_thumb.clone() else {
            return;
        };
        let thumb = scrollbar::thumb(
            self.viewport_extent,
            self.viewport_extent,
            self.viewport_state.actual_extent,
            self.viewport_state.scroll_actual,
        );
        match self.direction {
            Direction::Vertical => {
                self.host.set_transform(&thumb_node, 0.0, thumb.offset);
                self.host
                    .set_style(&thumb_node, "height", &format!("{}px", thumb.extent));
            }
            Direction::Horizontal => {
                self.host.set_transform(&thumb_node, thumb.offset, 0.0);
                self.host
                    .set_style(&thumb_node, "width", &format!("{}px", thumb.extent));
            }
        }
    }

    // Layout maintenance --------------------------------------------------

    /// Rebuilds the extent model, compression map, and content sizing.
    ///
    /// Every data mutation funnels through here; the render memo is
    /// invalidated so the next refresh reconciles unconditionally.
    fn rebuild_layout(&mut self) {
        let item_count = self.data.total();

        self.layout = if let Some(grid) = &self.grid_cfg {
            let grid = GridLayout::new(grid.columns, grid.gap);
            let rows = match &self.item_extent {
                ItemExtent::Fixed(extent) => row_extents(&grid, item_count, |_| *extent),
                ItemExtent::PerIndex(extent_of) => row_extents(&grid, item_count, extent_of),
            };
            LayoutModel::Grid {
                grid,
                rows,
                item_count,
            }
        } else {
            let store = match &self.item_extent {
                ItemExtent::Fixed(extent) => {
                    ExtentStore::Fixed(FixedExtents::new(item_count, *extent))
                }
                ItemExtent::PerIndex(extent_of) => {
                    ExtentStore::Variable(VariableExtents::from_fn(item_count, extent_of))
                }
            };
            if let Some(groups) = &self.group_cfg {
                let data = &self.data;
                let key_of = &groups.key_of;
                let mut last_key = String::new();
                let group_layout = GroupLayout::scan(item_count, |data_index| {
                    if let Some(item) = data.get(data_index).loaded() {
                        last_key = key_of(item, data_index);
                    }
                    last_key.clone()
                });
                let grouped = match &groups.header_extent {
                    crate::config::HeaderExtent::Fixed(extent) => {
                        GroupedExtents::with_fixed_header(store, group_layout, *extent)
                    }
                    crate::config::HeaderExtent::PerKey(extent_of) => {
                        GroupedExtents::new(store, group_layout, |key| extent_of(key))
                    }
                };
                LayoutModel::Grouped(grouped)
            } else {
                LayoutModel::Plain(store)
            }
        };

        self.rebuild_space_map();
        self.memo.invalidate();
        self.sticky_group = None;
    }

    fn rebuild_space_map(&mut self) {
        self.space_map = SpaceMap::new(self.layout.total_extent(), self.viewport_extent);
        let actual = self.space_map.actual_extent();

        let content_node = self.content_node.clone();
        let size = format!("{actual}px");
        match self.direction {
            Direction::Vertical => self.host.set_style(&content_node, "height", &size),
            Direction::Horizontal => self.host.set_style(&content_node, "width", &size),
        }
        self.scroll.surface_mut().set_content_extent(actual);
    }

    fn layout_set_size(&self) -> usize {
        match &self.layout {
            LayoutModel::Grid { item_count, .. } => *item_count,
            other => other.len(),
        }
    }

    // Data operations -----------------------------------------------------

    /// Replaces the item sequence.
    pub fn set_items(&mut self, items: Vec<T>) {
        if self.is_destroyed() {
            return;
        }
        self.data.set_items(items);
        // A reset obsoletes the initial load; the list is no longer busy
        // even if that read never resolves.
        if self.initial_load_pending {
            self.initial_load_pending = false;
            let root = self.root.clone();
            self.host.remove_attribute(&root, "aria-busy");
        }
        self.after_data_mutation();
    }

    /// Appends items at the end.
    ///
    /// In reverse (tail-anchored) mode, a viewport pinned to the tail
    /// stays pinned across the append — the chat-log contract.
    pub fn append_items(&mut self, items: Vec<T>) {
        if self.is_destroyed() {
            return;
        }
        let keep_tail = self.reverse && self.scroll.is_at_tail(1.0);
        self.data.append(items);
        self.after_data_mutation();
        if keep_tail {
            let tail = self.scroll.tail_offset();
            let now = self.host.now_ms();
            self.scroll.scroll_to(tail, ScrollBehavior::Auto, now);
            self.refresh();
        }
    }

    /// Prepends items before index 0.
    ///
    /// The scroll offset shifts by the prepended extent so the entries in
    /// view do not visually move.
    pub fn prepend_items(&mut self, items: Vec<T>) {
        if self.is_destroyed() || items.is_empty() {
            return;
        }
        let count = items.len();
        self.data.prepend(items);
        self.after_data_mutation();
        self.anchor_after_prepend(count);
    }

    /// Compensates the scroll offset after `count` entries appeared at
    /// the front of the data space.
    fn anchor_after_prepend(&mut self, count: usize) {
        if count >= self.data.total() {
            // Everything is new; there is no previous entry to anchor on.
            return;
        }
        let first_old = self.layout.node_of_data(count);
        let added = self.layout.offset_of(first_old);
        if added <= 0.0 {
            return;
        }
        let target = self.viewport_state.scroll_virtual + added;
        let actual = self.space_map.virtual_to_actual(target);
        self.scroll.surface_mut().set_scroll_offset(actual);
        self.refresh();
    }

    /// Replaces one item in place.
    pub fn update_item(&mut self, index: usize, item: T) {
        if self.is_destroyed() || !self.data.update(index, item) {
            return;
        }
        match self.item_extent {
            // Fixed extents cannot shift the layout: a targeted
            // re-template of the one node is enough.
            ItemExtent::Fixed(_) => {
                self.retemplate_index(index);
            }
            // Variable extents may change, which moves every later entry.
            ItemExtent::PerIndex(_) => self.after_data_mutation(),
        }
    }

    /// Removes one item.
    pub fn remove_item(&mut self, index: usize) {
        if self.is_destroyed() {
            return;
        }
        if self.data.remove(index).is_some() {
            if let Some(focused) = self.focused
                && self.data.total() > 0
            {
                self.focused = Some(focused.min(self.data.total() - 1));
            } else if self.data.total() == 0 {
                self.focused = None;
            }
            self.after_data_mutation();
        }
    }

    fn after_data_mutation(&mut self) {
        self.rebuild_layout();
        self.refresh();
    }

    fn retemplate_index(&mut self, data_index: usize) {
        let node_index = self.layout.node_of_data(data_index);
        let Some(render) = self.resolve_single(node_index) else {
            return;
        };
        self.reconciler
            .update_item(&mut self.host, &self.pool, &self.classes, node_index, render);
    }

    /// Resolves one node index outside a reconcile pass.
    fn resolve_single(&mut self, node_index: usize) -> Option<ItemRender<H::Content>> {
        let entry = self.layout.node_entry(node_index)?;
        let position = self
            .layout
            .node_position(node_index, self.cross_extent, self.viewport_state.position_bias);
        let (x, y) = if self.direction == Direction::Horizontal {
            (position.y, position.x)
        } else {
            (position.x, position.y)
        };
        match entry {
            NodeEntry::Item { data_index } => {
                let item = match self.data.get(data_index) {
                    hedgerow_data::Slot::Loaded(item) => Some(item),
                    hedgerow_data::Slot::Placeholder => None,
                    hedgerow_data::Slot::Absent => return None,
                };
                let key = match item {
                    Some(item) => (self.key_fn)(item, data_index),
                    None => Key::Str(format!("pending-{data_index}")),
                };
                let selected = item.is_some() && self.selection.contains(&key);
                let is_focused = self.focused == Some(data_index);
                let mut flags = ItemFlags::empty();
                if selected {
                    flags |= ItemFlags::SELECTED;
                }
                if is_focused {
                    flags |= ItemFlags::FOCUSED;
                }
                let content = (self.template)(ItemContext {
                    item,
                    index: data_index,
                    selected,
                    focused: is_focused,
                });
                Some(ItemRender {
                    key: key.to_string(),
                    content,
                    flags,
                    x,
                    y,
                    width: position.width,
                })
            }
            NodeEntry::Header { group_index, key } => {
                let config = self.group_cfg.as_mut()?;
                let content = (config.header_template)(&key);
                Some(ItemRender {
                    key: format!("group-{group_index}-{key}"),
                    content,
                    flags: ItemFlags::empty(),
                    x,
                    y,
                    width: position.width,
                })
            }
        }
    }

    // Lazy loading --------------------------------------------------------

    /// Feeds a resolved adapter page back into the list.
    pub fn complete_read(&mut self, request_id: u64, page: Page<T>) {
        if self.is_destroyed() {
            return;
        }
        match self.data.complete(request_id, page) {
            ReadOutcome::Applied { context, range } => {
                if context == ReadContext::LoadInitial && self.initial_load_pending {
                    self.initial_load_pending = false;
                    let root = self.root.clone();
                    self.host.remove_attribute(&root, "aria-busy");
                }
                self.after_data_mutation();
                // A reverse load-more prepended its chunk; keep the
                // entries in view where they were.
                if self.reverse && context == ReadContext::LoadMore {
                    self.anchor_after_prepend(range.len());
                }
                self.emitter.emit(&ListEvent::LoadEnd);
            }
            ReadOutcome::Stale => {}
        }
    }

    /// Records a failed adapter read.
    ///
    /// The failure surfaces as an [`ListEvent::Error`]; placeholders stay
    /// in view and the next scroll retries implicitly.
    pub fn fail_read(&mut self, request_id: u64, message: impl Into<String>) {
        if self.is_destroyed() {
            return;
        }
        if let Some(context) = self.data.fail(request_id) {
            if context == ReadContext::LoadInitial && self.initial_load_pending {
                self.initial_load_pending = false;
                let root = self.root.clone();
                self.host.remove_attribute(&root, "aria-busy");
            }
            self.emitter.emit(&ListEvent::Error {
                context: context.as_str(),
                message: message.into(),
            });
        }
    }

    fn ensure_after_scroll(&mut self) {
        if !self.data.is_lazy() {
            return;
        }
        let node_range = self.layout.node_range(&self.viewport_state.render);
        let data_range = self.data_window(&node_range);

        let velocity = self.scroll.velocity();
        let tracking = self.scroll.is_tracking();
        let forward = !matches!(
            self.scroll.direction(),
            hedgerow_scroll::ScrollDirection::Backward
        );

        match self.gate.plan(
            data_range.clone(),
            velocity,
            tracking,
            forward,
            self.data.total(),
        ) {
            GateDecision::Defer => {
                self.data.defer_range(data_range);
            }
            GateDecision::Load(range) => {
                // Merge the current need into whatever was deferred while
                // scrolling fast, then issue one coalesced pass.
                self.data.defer_range(range);
                if let Some(range) = self.data.flush_pending() {
                    self.ensure_data_range(range);
                }
            }
        }

        self.maybe_load_more();
    }

    fn ensure_data_range(&mut self, range: Range<usize>) {
        let requests = self.data.ensure_range(range);
        for request in requests {
            self.host.dispatch_read(request);
        }
    }

    fn maybe_load_more(&mut self) {
        if !self.data.is_lazy()
            || !self.data.has_more()
            || self.data.is_loading()
            || !self
                .gate
                .allows_load_more(self.scroll.velocity(), self.scroll.is_tracking())
        {
            return;
        }

        let state = &self.viewport_state;
        let edge_distance = if self.reverse {
            state.scroll_actual
        } else {
            state.actual_extent - (state.scroll_actual + state.viewport_extent)
        };
        if edge_distance > LOAD_MORE_THRESHOLD {
            return;
        }

        if let Some(request) = self.data.load_more() {
            self.emitter.emit(&ListEvent::LoadStart {
                offset: request.offset,
                limit: request.limit,
            });
            self.host.dispatch_read(request);
        }
    }

    /// Maps a renderable node range to the data indices it covers.
    fn data_window(&self, node_range: &Range<usize>) -> Range<usize> {
        match &self.layout {
            LayoutModel::Plain(_) | LayoutModel::Grid { .. } => node_range.clone(),
            LayoutModel::Grouped(model) => {
                let layout = model.layout();
                let start = match layout.entry(node_range.start) {
                    Some(hedgerow_groups::LayoutEntry::Item { data_index, .. }) => data_index,
                    Some(hedgerow_groups::LayoutEntry::Header { group }) => group.first_data_index,
                    None => layout.data_len(),
                };
                let end = if node_range.end == 0 {
                    0
                } else {
                    match layout.entry(node_range.end - 1) {
                        Some(hedgerow_groups::LayoutEntry::Item { data_index, .. }) => {
                            data_index + 1
                        }
                        Some(hedgerow_groups::LayoutEntry::Header { group }) => {
                            group.first_data_index
                        }
                        None => layout.data_len(),
                    }
                };
                start..end.max(start)
            }
        }
    }

    // Programmatic scrolling ----------------------------------------------

    /// Scrolls a data index into view.
    pub fn scroll_to_index(
        &mut self,
        data_index: usize,
        align: ScrollAlign,
        behavior: ScrollBehavior,
        now_ms: f64,
    ) {
        if self.is_destroyed() || self.data.total() == 0 {
            return;
        }
        let data_index = data_index.min(self.data.total() - 1);
        let (item_start, item_extent) = self.layout.scroll_anchor(data_index);
        let virtual_total = self.space_map.virtual_extent();
        let max_virtual = (virtual_total - self.viewport_extent).max(0.0);
        let target_virtual = aligned_offset(
            align,
            item_start,
            item_extent,
            self.viewport_extent,
            self.viewport_state.scroll_virtual,
            max_virtual,
        );
        let target_actual = self.space_map.virtual_to_actual(target_virtual);
        self.scroll_to_offset(target_actual, behavior, now_ms);
    }

    /// Scrolls to an absolute actual-space offset.
    pub fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior, now_ms: f64) {
        if self.is_destroyed() {
            return;
        }
        self.scroll.scroll_to(offset, behavior, now_ms);
        if behavior == ScrollBehavior::Auto {
            let applied = self.scroll.scroll_offset();
            self.handle_scroll(now_ms, applied);
        }
    }

    /// Scrolls by a relative delta.
    pub fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior, now_ms: f64) {
        if self.is_destroyed() {
            return;
        }
        let target = self.scroll.scroll_offset() + delta;
        self.scroll_to_offset(target, behavior, now_ms);
    }

    /// Cancels any in-flight smooth scroll.
    pub fn cancel_scroll(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.scroll.cancel_scroll();
    }

    // Snapshots -----------------------------------------------------------

    /// Captures the current anchor entry, in-entry offset, and selection.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let state = &self.viewport_state;
        let index = state.visible.start;
        let entry_start = self.layout.offset_of(index);
        Snapshot {
            index,
            offset_in_item: (state.scroll_virtual - entry_start).max(0.0),
            selected: self.selection.keys().to_vec(),
        }
    }

    /// Restores a snapshot, saturating out-of-range values.
    pub fn restore(&mut self, snapshot: &Snapshot, now_ms: f64) {
        if self.is_destroyed() {
            return;
        }
        let len = self.layout.len();
        let extent = if len == 0 {
            0.0
        } else {
            self.layout.extent_of(snapshot.index.min(len - 1))
        };
        let clamped = snapshot.clamped(len, extent);

        if self.selection_mode != SelectionMode::None {
            let before = self.selection.revision();
            self.selection.replace_with(clamped.selected.iter().cloned());
            if self.selection.revision() != before {
                self.emitter.emit(&ListEvent::SelectionChange {
                    selected: self.selection.keys().to_vec(),
                });
            }
        }

        let target_virtual = self.layout.offset_of(clamped.index) + clamped.offset_in_item;
        let target_actual = self.space_map.virtual_to_actual(target_virtual);
        self.memo.invalidate();
        // The restore jump is not user scrolling; it must not trip the
        // velocity gate.
        self.scroll.reset_tracking();
        self.scroll_to_offset(target_actual, ScrollBehavior::Auto, now_ms);
    }

    // Crate-private helpers shared with the handlers module ---------------

    pub(crate) fn emit(&mut self, event: ListEvent) {
        self.emitter.emit(&event);
    }

    pub(crate) fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    pub(crate) fn data_total(&self) -> usize {
        self.data.total()
    }

    pub(crate) fn layout_entry(&self, node_index: usize) -> Option<NodeEntry> {
        self.layout.node_entry(node_index)
    }

    pub(crate) fn node_index_of(&self, data_index: usize) -> usize {
        self.layout.node_of_data(data_index)
    }

    pub(crate) fn loaded_key_at(&self, data_index: usize) -> Option<Key> {
        self.data
            .get(data_index)
            .loaded()
            .map(|item| (self.key_fn)(item, data_index))
    }

    pub(crate) fn apply_selection(&mut self, key: Key) -> bool {
        self.selection.activate(self.selection_mode, key)
    }

    pub(crate) fn rendered_indices(&self) -> Vec<usize> {
        self.reconciler.rendered_indices().collect()
    }

    pub(crate) fn apply_item_classes(&mut self, node_index: usize, flags: ItemFlags) {
        self.reconciler.update_item_classes(
            &mut self.host,
            &self.pool,
            &self.classes,
            node_index,
            flags,
        );
    }

    pub(crate) fn sync_active_descendant(&mut self) {
        let focused_node = self.focused.map(|d| self.layout.node_of_data(d));
        let root = self.root.clone();
        self.reconciler
            .apply_active_descendant(&mut self.host, &self.classes, &root, focused_node);
    }

    pub(crate) fn store_focus(&mut self, focused: Option<usize>) {
        self.focused = focused;
    }

    pub(crate) fn first_visible_data_index(&self) -> usize {
        let visible_nodes = self.layout.node_range(&self.viewport_state.visible);
        self.data_window(&visible_nodes).start
    }

    // Lifecycle -----------------------------------------------------------

    /// Tears the list down.
    ///
    /// Cancels the animation, releases every pooled node, clears all
    /// listeners, and detaches the root. Idempotent; every other
    /// operation on a destroyed list is a silent no-op.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.scroll.cancel_scroll();
        self.pool.release_all(&mut self.host, &self.classes);
        self.reconciler.clear();
        self.emitter.clear();
        let root = self.root.clone();
        self.host.detach(&root);
        self.phase = Phase::Destroyed;
    }
}
