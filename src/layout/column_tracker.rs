//! ColumnTracker - per-column accumulated heights and placement target selection
//!
//! Shortest-column search is a linear scan: O(k) per placement for k columns.
//! Realistic galleries use 2 to 6 columns, where a scan beats a heap.

use super::types::ColumnIndex;

/// Accumulated state of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Column {
    /// Sum of placed heights plus inter-item spacing.
    accumulated_height: f64,
    /// Number of items placed in this column.
    item_count: usize,
}

/// Tracks the accumulated height of each column.
///
/// # Invariants
/// - `columns.len() >= 1` once reset with a valid column count
/// - each `accumulated_height` is non-negative and non-decreasing until `reset`
#[derive(Debug, Clone)]
pub struct ColumnTracker {
    columns: Vec<Column>,
}

impl ColumnTracker {
    /// Create a tracker with `column_count` empty columns.
    pub fn new(column_count: usize) -> Self {
        Self {
            columns: vec![Column::default(); column_count],
        }
    }

    /// Column with the minimum accumulated height.
    ///
    /// Ties go to the lowest column index, so equal-height items land
    /// left to right.
    ///
    /// # Panics
    ///
    /// Panics if the tracker has no columns.
    pub fn shortest_column(&self) -> ColumnIndex {
        assert!(!self.columns.is_empty(), "ColumnTracker has no columns");

        let mut shortest = 0;
        for (index, column) in self.columns.iter().enumerate().skip(1) {
            // Strict comparison keeps the leftmost column on ties
            if column.accumulated_height < self.columns[shortest].accumulated_height {
                shortest = index;
            }
        }
        ColumnIndex::new(shortest)
    }

    /// Record an item of `height` placed in `column`; returns the item's y offset.
    ///
    /// The offset is the column's current height, plus `spacing` if the column
    /// already holds an item. The column grows by `height` (first item) or
    /// `height + spacing`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn place(&mut self, column: ColumnIndex, height: f64, spacing: f64) -> f64 {
        let state = &mut self.columns[column.get()];

        let gap = if state.item_count > 0 { spacing } else { 0.0 };
        let y = state.accumulated_height + gap;

        state.accumulated_height = y + height;
        state.item_count += 1;
        y
    }

    /// Reinitialize to `column_count` empty columns.
    pub fn reset(&mut self, column_count: usize) {
        self.columns.clear();
        self.columns.resize(column_count, Column::default());
    }

    /// Accumulated height of `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn height_of(&self, column: ColumnIndex) -> f64 {
        self.columns[column.get()].accumulated_height
    }

    /// Accumulated heights of all columns, left to right.
    pub fn heights(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns.iter().map(|c| c.accumulated_height)
    }

    /// Overall content height: the tallest column.
    pub fn max_height(&self) -> f64 {
        self.heights().fold(0.0, f64::max)
    }
}
