// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The active layout strategy: plain strip, grouped strip, or grid.
//!
//! The scroll pipeline (extents → compression → viewport) always runs over
//! one 1D strip. Which strip depends on the active layout plugin:
//!
//! - **Plain**: the strip is the data sequence itself.
//! - **Grouped**: the strip is layout space — items plus header
//!   pseudo-entries — provided by
//!   [`GroupedExtents`](hedgerow_groups::GroupedExtents).
//! - **Grid**: the strip is *rows*; the render range over rows widens into
//!   a range over data indices, and positioning gains a cross-axis
//!   component and an explicit cell width.
//!
//! [`LayoutModel`] is the strategy object: it implements
//! [`ExtentModel`] for the pipeline and carries the three capability
//! overrides a layout can replace — range mapping, entry positioning, and
//! scroll-to-index anchoring.

use alloc::string::String;
use core::ops::Range;

use hedgerow_extents::{ExtentModel, FixedExtents, VariableExtents};
use hedgerow_grid::GridLayout;
use hedgerow_groups::{GroupedExtents, LayoutEntry};

/// Item extents in data space, fixed or per-index.
#[derive(Debug, Clone)]
pub(crate) enum ExtentStore {
    Fixed(FixedExtents),
    Variable(VariableExtents),
}

impl ExtentModel for ExtentStore {
    fn len(&self) -> usize {
        match self {
            Self::Fixed(model) => model.len(),
            Self::Variable(model) => model.len(),
        }
    }

    fn extent_of(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(model) => model.extent_of(index),
            Self::Variable(model) => model.extent_of(index),
        }
    }

    fn offset_of(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(model) => model.offset_of(index),
            Self::Variable(model) => model.offset_of(index),
        }
    }

    fn index_at_offset(&self, offset: f64) -> usize {
        match self {
            Self::Fixed(model) => model.index_at_offset(offset),
            Self::Variable(model) => model.index_at_offset(offset),
        }
    }

    fn total_extent(&self) -> f64 {
        match self {
            Self::Fixed(model) => model.total_extent(),
            Self::Variable(model) => model.total_extent(),
        }
    }
}

/// What a renderable node index stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeEntry {
    /// A caller item at this data index.
    Item { data_index: usize },
    /// A group header.
    Header {
        group_index: usize,
        key: String,
    },
}

/// A resolved node position: cross-axis, scroll-axis, optional width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NodePosition {
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
}

/// The strip the pipeline runs over, plus the per-layout overrides.
#[derive(Debug)]
pub(crate) enum LayoutModel {
    Plain(ExtentStore),
    Grouped(GroupedExtents<ExtentStore, String>),
    Grid {
        grid: GridLayout,
        rows: VariableExtents,
        item_count: usize,
    },
}

impl ExtentModel for LayoutModel {
    fn len(&self) -> usize {
        match self {
            Self::Plain(model) => model.len(),
            Self::Grouped(model) => model.len(),
            Self::Grid { rows, .. } => rows.len(),
        }
    }

    fn extent_of(&self, index: usize) -> f64 {
        match self {
            Self::Plain(model) => model.extent_of(index),
            Self::Grouped(model) => model.extent_of(index),
            Self::Grid { rows, .. } => rows.extent_of(index),
        }
    }

    fn offset_of(&self, index: usize) -> f64 {
        match self {
            Self::Plain(model) => model.offset_of(index),
            Self::Grouped(model) => model.offset_of(index),
            Self::Grid { rows, .. } => rows.offset_of(index),
        }
    }

    fn index_at_offset(&self, offset: f64) -> usize {
        match self {
            Self::Plain(model) => model.index_at_offset(offset),
            Self::Grouped(model) => model.index_at_offset(offset),
            Self::Grid { rows, .. } => rows.index_at_offset(offset),
        }
    }

    fn total_extent(&self) -> f64 {
        match self {
            Self::Plain(model) => model.total_extent(),
            Self::Grouped(model) => model.total_extent(),
            Self::Grid { rows, .. } => rows.total_extent(),
        }
    }
}

impl LayoutModel {
    /// Maps the pipeline's render range onto renderable node indices.
    ///
    /// Identity for plain and grouped strips; a grid widens its row range
    /// into the covered data indices.
    pub(crate) fn node_range(&self, pipeline_range: &Range<usize>) -> Range<usize> {
        match self {
            Self::Plain(_) | Self::Grouped(_) => pipeline_range.clone(),
            Self::Grid {
                grid, item_count, ..
            } => grid.data_range_for_rows(pipeline_range.clone(), *item_count),
        }
    }

    /// Classifies a renderable node index.
    pub(crate) fn node_entry(&self, node_index: usize) -> Option<NodeEntry> {
        match self {
            Self::Plain(model) => (node_index < model.len()).then_some(NodeEntry::Item {
                data_index: node_index,
            }),
            Self::Grouped(model) => match model.layout().entry(node_index)? {
                LayoutEntry::Header { group } => Some(NodeEntry::Header {
                    group_index: group.group_index,
                    key: group.key.clone(),
                }),
                LayoutEntry::Item { data_index, .. } => Some(NodeEntry::Item { data_index }),
            },
            Self::Grid { item_count, .. } => (node_index < *item_count).then_some(NodeEntry::Item {
                data_index: node_index,
            }),
        }
    }

    /// Positions a renderable node index.
    ///
    /// `bias` is the compression position bias from the viewport state;
    /// `cross_extent` is the container width (used by grids for column
    /// placement).
    pub(crate) fn node_position(
        &self,
        node_index: usize,
        cross_extent: f64,
        bias: f64,
    ) -> NodePosition {
        match self {
            Self::Plain(model) => NodePosition {
                x: 0.0,
                y: model.offset_of(node_index) - bias,
                width: None,
            },
            Self::Grouped(model) => NodePosition {
                x: 0.0,
                y: model.offset_of(node_index) - bias,
                width: None,
            },
            Self::Grid { grid, rows, .. } => {
                let row_offset = rows.offset_of(grid.row_of(node_index)) - bias;
                let origin = grid.cell_origin(node_index, cross_extent, row_offset);
                NodePosition {
                    x: origin.x,
                    y: origin.y,
                    width: Some(grid.column_width(cross_extent)),
                }
            }
        }
    }

    /// The strip offset and extent anchoring a data index, for
    /// scroll-to-index.
    pub(crate) fn scroll_anchor(&self, data_index: usize) -> (f64, f64) {
        match self {
            Self::Plain(model) => (model.offset_of(data_index), model.extent_of(data_index)),
            Self::Grouped(model) => {
                let layout_index = model.layout().data_to_layout(data_index);
                (model.offset_of(layout_index), model.extent_of(layout_index))
            }
            Self::Grid { grid, rows, .. } => {
                let row = grid.row_of(data_index);
                (rows.offset_of(row), rows.extent_of(row))
            }
        }
    }

    /// The renderable node index for a data index.
    pub(crate) fn node_of_data(&self, data_index: usize) -> usize {
        match self {
            Self::Plain(_) | Self::Grid { .. } => data_index,
            Self::Grouped(model) => model.layout().data_to_layout(data_index),
        }
    }

    /// The grouped model, when grouping is active.
    pub(crate) fn grouped(&self) -> Option<&GroupedExtents<ExtentStore, String>> {
        match self {
            Self::Grouped(model) => Some(model),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use hedgerow_extents::{ExtentModel, FixedExtents, VariableExtents};
    use hedgerow_grid::{GridLayout, row_extents};
    use hedgerow_groups::{GroupLayout, GroupedExtents};

    use super::{ExtentStore, LayoutModel, NodeEntry};

    fn grid_model() -> LayoutModel {
        let grid = GridLayout::new(4, 10.0);
        let rows = row_extents(&grid, 10, |_| 40.0);
        LayoutModel::Grid {
            grid,
            rows,
            item_count: 10,
        }
    }

    #[test]
    fn plain_layout_is_the_identity() {
        let model = LayoutModel::Plain(ExtentStore::Fixed(FixedExtents::new(10, 40.0)));
        assert_eq!(model.node_range(&(2..5)), 2..5);
        assert_eq!(
            model.node_entry(3),
            Some(NodeEntry::Item { data_index: 3 })
        );
        assert_eq!(model.node_entry(10), None);
        let position = model.node_position(3, 300.0, 0.0);
        assert_eq!((position.x, position.y, position.width), (0.0, 120.0, None));
        assert_eq!(model.scroll_anchor(3), (120.0, 40.0));
    }

    #[test]
    fn grouped_layout_exposes_headers() {
        let keys = ["A", "A", "B"];
        let layout = GroupLayout::scan(keys.len(), |i| keys[i].to_string());
        let grouped = GroupedExtents::with_fixed_header(
            ExtentStore::Fixed(FixedExtents::new(3, 40.0)),
            layout,
            10.0,
        );
        let model = LayoutModel::Grouped(grouped);

        // Layout: [hA, 0, 1, hB, 2]; len 5.
        assert_eq!(model.len(), 5);
        assert_eq!(
            model.node_entry(0),
            Some(NodeEntry::Header {
                group_index: 0,
                key: "A".to_string(),
            })
        );
        assert_eq!(model.node_entry(4), Some(NodeEntry::Item { data_index: 2 }));
        assert_eq!(model.node_of_data(2), 4);
        // Item 2 sits after two headers and two items.
        assert_eq!(model.scroll_anchor(2), (100.0, 40.0));
    }

    #[test]
    fn grid_layout_widens_row_ranges() {
        let model = grid_model();
        // Rows of 4 over 10 items: 3 rows.
        assert_eq!(model.len(), 3);
        assert_eq!(model.node_range(&(0..2)), 0..8);
        assert_eq!(model.node_range(&(2..3)), 8..10);

        let position = model.node_position(5, 300.0, 0.0);
        // Column 1 of a 4-column, 10px-gap grid in 300px: x = 77.5.
        assert_eq!(position.x, 77.5);
        // Row 1 starts after row 0's 40px + 10px gap.
        assert_eq!(position.y, 50.0);
        assert_eq!(position.width, Some(67.5));

        // Scroll anchoring works in row space.
        let (offset, extent) = model.scroll_anchor(9);
        assert_eq!(offset, 100.0);
        assert_eq!(extent, 40.0);
    }

    #[test]
    fn extent_store_variants_agree() {
        let fixed = ExtentStore::Fixed(FixedExtents::new(5, 20.0));
        let variable = ExtentStore::Variable(VariableExtents::from_fn(5, |_| 20.0));
        for index in 0..=5 {
            assert_eq!(fixed.offset_of(index), variable.offset_of(index));
        }
        assert_eq!(fixed.index_at_offset(45.0), variable.index_at_offset(45.0));
        assert_eq!(fixed.total_extent(), variable.total_extent());
    }
}
