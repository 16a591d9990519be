// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Grid: a linear sequence reshaped into rows × columns.
//!
//! A grid list scrolls by *rows*: the scroll axis is virtualized over row
//! indices (each row's extent is the max of its items, or a fixed value)
//! while columns are plain horizontal arithmetic. [`GridLayout`] holds the
//! column count and gap and provides the cell math:
//!
//! - row/column of a data index, and back,
//! - column width for a container width,
//! - the 2D origin of a cell, given its row's scroll-axis offset,
//! - the data range covered by a range of visible rows.
//!
//! [`row_extents`] builds the per-row
//! [`VariableExtents`](hedgerow_extents::VariableExtents) the scroll
//! pipeline runs on, so the viewport calculator and compression mapper see
//! an ordinary 1D strip of rows.
//!
//! Grids are mutually exclusive with horizontal orientation, reverse mode,
//! and grouping; the orchestrator rejects those combinations at
//! configuration time.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_grid::GridLayout;
//!
//! let grid = GridLayout::new(4, 10.0);
//! assert_eq!(grid.column_width(300.0), 67.5);
//! assert_eq!(grid.row_of(5), 1);
//! assert_eq!(grid.column_of(5), 1);
//! let origin = grid.cell_origin(5, 300.0, 80.0);
//! assert_eq!((origin.x, origin.y), (77.5, 80.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::ops::Range;

use hedgerow_extents::VariableExtents;
use kurbo::Point;

/// Column count and gap for a grid list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    columns: usize,
    gap: f64,
}

impl GridLayout {
    /// Creates a grid with `columns` columns and `gap` pixels between
    /// cells.
    ///
    /// Column counts below 1 clamp to 1; negative gaps clamp to zero.
    #[must_use]
    pub fn new(columns: usize, gap: f64) -> Self {
        Self {
            columns: columns.max(1),
            gap: gap.max(0.0),
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Gap between adjacent cells, both axes.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Number of rows needed for `item_count` items, `⌈N / columns⌉`.
    #[must_use]
    pub const fn rows_for(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.columns)
    }

    /// Row of the item at `data_index`.
    #[must_use]
    pub const fn row_of(&self, data_index: usize) -> usize {
        data_index / self.columns
    }

    /// Column of the item at `data_index`.
    #[must_use]
    pub const fn column_of(&self, data_index: usize) -> usize {
        data_index % self.columns
    }

    /// Data index of the first item in `row`.
    #[must_use]
    pub const fn first_in_row(&self, row: usize) -> usize {
        row * self.columns
    }

    /// Width of one column inside `container_width`,
    /// `(w − (columns−1)·gap) / columns`, clamped non-negative.
    #[must_use]
    pub fn column_width(&self, container_width: f64) -> f64 {
        let gaps = (self.columns - 1) as f64 * self.gap;
        ((container_width - gaps) / self.columns as f64).max(0.0)
    }

    /// 2D origin of the cell at `data_index`.
    ///
    /// `row_offset` is the row's position along the scroll axis, as
    /// reported by the row extent model (minus any compression bias).
    #[must_use]
    pub fn cell_origin(&self, data_index: usize, container_width: f64, row_offset: f64) -> Point {
        let column = self.column_of(data_index) as f64;
        let x = column * (self.column_width(container_width) + self.gap);
        Point::new(x, row_offset)
    }

    /// The data indices covered by the rows in `rows`, clamped to
    /// `item_count`.
    ///
    /// This is how a render range over rows widens back into a render
    /// range over items.
    #[must_use]
    pub fn data_range_for_rows(&self, rows: Range<usize>, item_count: usize) -> Range<usize> {
        let start = (rows.start * self.columns).min(item_count);
        let end = (rows.end * self.columns).min(item_count);
        start..end
    }
}

/// Builds per-row extents from per-item extents.
///
/// Each row's extent is the maximum extent among its items (plus the row
/// gap, except after the last row), so the scroll pipeline can treat the
/// grid as a 1D strip of rows.
#[must_use]
pub fn row_extents(
    grid: &GridLayout,
    item_count: usize,
    mut item_extent: impl FnMut(usize) -> f64,
) -> VariableExtents {
    let rows = grid.rows_for(item_count);
    VariableExtents::from_fn(rows, |row| {
        let start = grid.first_in_row(row);
        let end = (start + grid.columns()).min(item_count);
        let tallest = (start..end).map(&mut item_extent).fold(0.0, f64::max);
        if row + 1 < rows {
            tallest + grid.gap()
        } else {
            tallest
        }
    })
}
