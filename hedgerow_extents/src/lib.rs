// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Extents: index↔offset accounting for virtualized lists.
//!
//! A virtualized list needs to answer two questions many times per scroll
//! frame: "where does item `i` start?" and "which item contains pixel offset
//! `o`?". This crate provides that accounting as a small trait plus two
//! implementations:
//!
//! - [`ExtentModel`]: the capability set — `offset_of`, `index_at_offset`,
//!   `extent_of`, `total_extent`, `len`.
//! - [`FixedExtents`]: every entry shares one extent; lookups are O(1)
//!   arithmetic.
//! - [`VariableExtents`]: per-entry extents backed by an eagerly maintained
//!   prefix-sum array; lookups are O(log L) binary search.
//!
//! All offsets and extents are `f64` logical pixels along the scroll axis
//! (vertical or horizontal — the model is axis-agnostic). Boundary inputs
//! saturate instead of failing: `offset_of` clamps to `[0, total]`,
//! `index_at_offset` clamps to `[0, len)` and returns 0 for an empty model
//! or a non-positive offset.
//!
//! The model must reflect the current item sequence exactly. Any item
//! mutation goes through [`VariableExtents::rebuild`] (full recompute) or
//! [`VariableExtents::set_extent`] (suffix patch); callers that cache
//! derived state, such as a compression mapping over the total extent, are
//! expected to invalidate it whenever they mutate the model.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_extents::{ExtentModel, FixedExtents, VariableExtents};
//!
//! // 100 items, each 40 logical pixels.
//! let fixed = FixedExtents::new(100, 40.0);
//! assert_eq!(fixed.offset_of(10), 400.0);
//! assert_eq!(fixed.index_at_offset(2000.0), 50);
//!
//! // The same strip with one tall entry.
//! let mut variable = VariableExtents::from_fn(100, |i| if i == 3 { 120.0 } else { 40.0 });
//! assert_eq!(variable.offset_of(4), 240.0);
//! variable.set_extent(3, 40.0);
//! assert_eq!(variable.total_extent(), 4000.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fixed;
mod model;
mod variable;

pub use fixed::FixedExtents;
pub use model::ExtentModel;
pub use variable::VariableExtents;
