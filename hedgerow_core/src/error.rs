// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration-time failures.

use alloc::string::String;
use core::fmt;

/// Why a list refused to mount.
///
/// These are programmer errors: they are raised once, at mount time, and
/// are deliberately unrecoverable at runtime. Everything that can go wrong
/// *after* mounting (adapter failures, boundary inputs) is reported through
/// the event channel or clamped instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The container selector matched nothing.
    ContainerNotFound {
        /// The selector that was searched for.
        selector: String,
    },
    /// The fixed item extent is zero or negative.
    NonPositiveExtent {
        /// The configured extent.
        extent: f64,
    },
    /// Two configured features cannot be combined.
    Incompatible {
        /// The first feature.
        first: &'static str,
        /// The conflicting feature.
        second: &'static str,
    },
    /// A grid was configured with zero columns.
    EmptyGrid,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerNotFound { selector } => {
                write!(f, "container not found for selector {selector:?}")
            }
            Self::NonPositiveExtent { extent } => {
                write!(f, "item extent must be positive, got {extent}")
            }
            Self::Incompatible { first, second } => {
                write!(f, "{first} cannot be combined with {second}")
            }
            Self::EmptyGrid => write!(f, "grid requires at least one column"),
        }
    }
}

impl core::error::Error for ConfigError {}
