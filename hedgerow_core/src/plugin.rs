// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plugin composition: setup ordering and declared conflicts.
//!
//! The optional subsystems — compression, scrollbar, selection, snapshots,
//! grid, groups, the data adapter — compose as *plugins*: each declares a
//! name, a setup priority, and the plugins it cannot coexist with. The
//! registry sorts by priority (lower sets up first, so compression is in
//! place before the scrollbar reads compressed bounds) and rejects
//! conflicting combinations at configuration time.
//!
//! Plugins never see the orchestrator; what a plugin "installs" is its
//! layout strategy (see [`crate::layout`]), and the registry here is the
//! gatekeeper that decides which strategies may be active together.

use smallvec::SmallVec;

use crate::error::ConfigError;

/// A feature that extends the core pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Stable plugin name, used in conflict declarations.
    pub name: &'static str,
    /// Setup order; lower runs first.
    pub priority: u8,
    /// Plugins this one cannot coexist with.
    pub conflicts: &'static [&'static str],
}

/// The built-in plugin table.
pub mod builtin {
    use super::PluginDescriptor;

    /// Scroll-space compression; sets up before the scrollbar so the
    /// scrollbar reads compressed bounds.
    pub const COMPRESSION: PluginDescriptor = PluginDescriptor {
        name: "compression",
        priority: 20,
        conflicts: &[],
    };

    /// The custom scrollbar.
    pub const SCROLLBAR: PluginDescriptor = PluginDescriptor {
        name: "scrollbar",
        priority: 30,
        conflicts: &[],
    };

    /// Selection bookkeeping.
    pub const SELECTION: PluginDescriptor = PluginDescriptor {
        name: "selection",
        priority: 40,
        conflicts: &[],
    };

    /// Scroll snapshots.
    pub const SNAPSHOTS: PluginDescriptor = PluginDescriptor {
        name: "snapshots",
        priority: 50,
        conflicts: &[],
    };

    /// The lazy data adapter.
    pub const ADAPTER: PluginDescriptor = PluginDescriptor {
        name: "adapter",
        priority: 60,
        conflicts: &[],
    };

    /// Group headers.
    pub const GROUPS: PluginDescriptor = PluginDescriptor {
        name: "groups",
        priority: 70,
        conflicts: &["grid"],
    };

    /// Grid layout. Exclusive with groups and with the horizontal and
    /// reverse list shapes (declared as pseudo-plugins by the config).
    pub const GRID: PluginDescriptor = PluginDescriptor {
        name: "grid",
        priority: 70,
        conflicts: &["groups", "horizontal", "reverse"],
    };

    /// Pseudo-plugin representing horizontal orientation.
    pub const HORIZONTAL: PluginDescriptor = PluginDescriptor {
        name: "horizontal",
        priority: 10,
        conflicts: &["grid"],
    };

    /// Pseudo-plugin representing reverse (tail-anchored) mode.
    pub const REVERSE: PluginDescriptor = PluginDescriptor {
        name: "reverse",
        priority: 10,
        conflicts: &["grid"],
    };
}

/// The set of active plugins for one list, in setup order.
#[derive(Debug, Default)]
pub struct PluginSet {
    active: SmallVec<[PluginDescriptor; 8]>,
}

impl PluginSet {
    /// Resolves a set of requested plugins.
    ///
    /// Sorts by priority (stable, so equal priorities keep their request
    /// order) and fails on the first declared conflict.
    pub fn resolve(
        requested: impl IntoIterator<Item = PluginDescriptor>,
    ) -> Result<Self, ConfigError> {
        let mut active: SmallVec<[PluginDescriptor; 8]> = requested.into_iter().collect();
        active.sort_by_key(|plugin| plugin.priority);

        for (position, plugin) in active.iter().enumerate() {
            for other in &active[position + 1..] {
                if plugin.conflicts.contains(&other.name) || other.conflicts.contains(&plugin.name)
                {
                    return Err(ConfigError::Incompatible {
                        first: plugin.name,
                        second: other.name,
                    });
                }
            }
        }
        Ok(Self { active })
    }

    /// The active plugins in setup order.
    #[must_use]
    pub fn setup_order(&self) -> &[PluginDescriptor] {
        &self.active
    }

    /// Returns `true` if a plugin with `name` is active.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.active.iter().any(|plugin| plugin.name == name)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{PluginSet, builtin};
    use crate::error::ConfigError;

    #[test]
    fn priorities_order_setup() {
        let set = PluginSet::resolve([builtin::SCROLLBAR, builtin::COMPRESSION, builtin::ADAPTER])
            .unwrap();
        let names: Vec<&str> = set.setup_order().iter().map(|p| p.name).collect();
        // Compression (20) before scrollbar (30) before adapter (60).
        assert_eq!(names, ["compression", "scrollbar", "adapter"]);
    }

    #[test]
    fn grid_conflicts_are_rejected_both_ways() {
        let err = PluginSet::resolve([builtin::GRID, builtin::GROUPS]).unwrap_err();
        assert!(matches!(err, ConfigError::Incompatible { .. }));

        let err = PluginSet::resolve([builtin::HORIZONTAL, builtin::GRID]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Incompatible {
                first: "horizontal",
                second: "grid",
            }
        );

        let err = PluginSet::resolve([builtin::REVERSE, builtin::GRID]).unwrap_err();
        assert!(matches!(err, ConfigError::Incompatible { .. }));
    }

    #[test]
    fn compatible_sets_resolve() {
        let set = PluginSet::resolve([
            builtin::COMPRESSION,
            builtin::SCROLLBAR,
            builtin::SELECTION,
            builtin::GROUPS,
            builtin::REVERSE,
        ])
        .unwrap();
        assert!(set.contains("groups"));
        assert!(!set.contains("grid"));
    }
}
