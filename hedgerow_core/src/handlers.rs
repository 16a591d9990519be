// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click and keyboard handling.
//!
//! The host owns the raw platform events. For clicks it walks up from the
//! event target to the nearest `data-index` carrier and calls
//! [`List::handle_click`] with that node index; for key presses it maps
//! `KeyboardEvent.key` through [`ListKey::from_key`] and calls
//! [`List::handle_key`], invoking `preventDefault` exactly when the list
//! reports the key as handled.

use hedgerow_dom::ItemFlags;
use hedgerow_scroll::{ScrollAlign, ScrollBehavior};

use crate::events::ListEvent;
use crate::host::ListHost;
use crate::key::Key;
use crate::layout::NodeEntry;
use crate::list::List;
use crate::selection::SelectionMode;

/// The keys the keyboard handler consumes.
///
/// Everything else passes through to the browser untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    /// Move focus to the previous entry.
    ArrowUp,
    /// Move focus to the next entry.
    ArrowDown,
    /// Jump focus to the first entry.
    Home,
    /// Jump focus to the last entry.
    End,
    /// Toggle selection at the focused entry.
    Space,
    /// Toggle selection at the focused entry.
    Enter,
}

impl ListKey {
    /// Maps a `KeyboardEvent.key` value; `None` means "not ours".
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            " " | "Space" => Some(Self::Space),
            "Enter" => Some(Self::Enter),
            _ => None,
        }
    }
}

impl<T, H: ListHost> List<T, H> {
    /// Handles a click resolved to a renderable node index.
    ///
    /// Emits [`ListEvent::ItemClick`] for items (never for group
    /// headers); with selection enabled, moves focus to the clicked item
    /// and applies the mode's selection change.
    pub fn handle_click(&mut self, node_index: usize, now_ms: f64) {
        if self.is_destroyed() {
            return;
        }
        let _ = now_ms;
        let Some(NodeEntry::Item { data_index }) = self.layout_entry(node_index) else {
            return;
        };

        let key = self.key_at(data_index);
        self.emit(ListEvent::ItemClick {
            index: data_index,
            key,
        });

        if self.selection_mode() == SelectionMode::None {
            return;
        }
        self.set_focus(data_index);
        self.activate_selection(data_index);
    }

    /// Handles a consumed key, returning `true` when the host should call
    /// `preventDefault`.
    pub fn handle_key(&mut self, key: ListKey, now_ms: f64) -> bool {
        if self.is_destroyed() {
            return false;
        }
        let total = self.data_total();
        if total == 0 {
            // The keys are still ours; there is just nothing to move to.
            return true;
        }

        match key {
            ListKey::ArrowUp | ListKey::ArrowDown => {
                let current = self.focused_or_first_visible();
                let next = match key {
                    ListKey::ArrowUp => current.saturating_sub(1),
                    _ => (current + 1).min(total - 1),
                };
                self.move_focus(next, now_ms);
            }
            ListKey::Home => self.move_focus(0, now_ms),
            ListKey::End => self.move_focus(total - 1, now_ms),
            ListKey::Space | ListKey::Enter => {
                if let Some(focused) = self.focused_index() {
                    self.activate_selection(focused);
                }
            }
        }
        true
    }

    /// Moves focus and brings the entry into view, centered.
    fn move_focus(&mut self, data_index: usize, now_ms: f64) {
        self.set_focus(data_index);
        self.scroll_to_index(
            data_index,
            ScrollAlign::Center,
            ScrollBehavior::Auto,
            now_ms,
        );
    }

    /// Applies the selection change for activating `data_index`.
    ///
    /// Placeholders cannot be selected: until the item is loaded there is
    /// no stable key to select by.
    fn activate_selection(&mut self, data_index: usize) {
        let Some(key) = self.loaded_key_at(data_index) else {
            return;
        };
        if !self.apply_selection(key) {
            return;
        }
        self.refresh_presentation_flags();
        let selected = self.selected_keys().to_vec();
        self.emit(ListEvent::SelectionChange { selected });
    }

    /// The focused data index, or the first visible item as a starting
    /// point for keyboard navigation.
    fn focused_or_first_visible(&self) -> usize {
        self.focused_index()
            .unwrap_or_else(|| self.first_visible_data_index())
    }

    /// The key of a loaded or pending entry (pending keys are synthetic
    /// but stable, so events stay coherent).
    fn key_at(&self, data_index: usize) -> Key {
        self.loaded_key_at(data_index)
            .unwrap_or_else(|| Key::Str(alloc::format!("pending-{data_index}")))
    }
}

// The methods below live here rather than on `List`'s main impl because
// only the handlers need them; they stay crate-private.
impl<T, H: ListHost> List<T, H> {
    pub(crate) fn refresh_presentation_flags(&mut self) {
        let rendered: alloc::vec::Vec<usize> = self.rendered_indices();
        for node_index in rendered {
            if let Some(flags) = self.flags_of_node(node_index) {
                self.apply_item_classes(node_index, flags);
            }
        }
        self.sync_active_descendant();
    }

    pub(crate) fn set_focus(&mut self, data_index: usize) {
        let previous = self.focused_index();
        if previous == Some(data_index) {
            return;
        }
        self.store_focus(Some(data_index));
        for affected in [previous, Some(data_index)].into_iter().flatten() {
            let node_index = self.node_index_of(affected);
            if let Some(flags) = self.flags_of_node(node_index) {
                self.apply_item_classes(node_index, flags);
            }
        }
        self.sync_active_descendant();
    }

    fn flags_of_node(&mut self, node_index: usize) -> Option<ItemFlags> {
        let entry = self.layout_entry(node_index)?;
        match entry {
            NodeEntry::Item { data_index } => {
                let mut flags = ItemFlags::empty();
                if let Some(key) = self.loaded_key_at(data_index)
                    && self.selected_keys().contains(&key)
                {
                    flags |= ItemFlags::SELECTED;
                }
                if self.focused_index() == Some(data_index) {
                    flags |= ItemFlags::FOCUSED;
                }
                Some(flags)
            }
            NodeEntry::Header { .. } => Some(ItemFlags::empty()),
        }
    }
}
