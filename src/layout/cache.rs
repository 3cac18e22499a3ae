//! LayoutCache - append-only store of computed frames
//!
//! # Complexity
//!
//! - `append`: O(1) amortized
//! - `frame_at`: O(1)
//! - `items_in_rect`: O(k log n + m log m) for k columns and m results
//! - `hit_test`: O(k + log n)
//! - `invalidate`: O(k)

use super::hit_test::HitTestResult;
use super::types::{ColumnIndex, Frame, ItemIndex};
use crate::model::error::LayoutError;

/// A laid-out item: its frame and the column it was placed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedItem {
    /// Absolute frame.
    pub frame: Frame,
    /// Column the item occupies.
    pub column: ColumnIndex,
}

/// Ordered store of computed frames keyed by item index.
///
/// # Invariants
/// - `items[i]` is the placement of item `i` (contiguous from 0)
/// - `by_column[c]` lists the items in column `c` in ascending y order
/// - `extent == max(frame.max_y())` over all items, 0 when empty
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    items: Vec<PlacedItem>,
    by_column: Vec<Vec<ItemIndex>>,
    extent: f64,
}

impl LayoutCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the placement of `index`.
    ///
    /// Items within a column must be appended top to bottom, which the
    /// waterfall placement order guarantees.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::OutOfOrderAppend`] if `index != count()`.
    pub fn append(
        &mut self,
        index: ItemIndex,
        column: ColumnIndex,
        frame: Frame,
    ) -> Result<(), LayoutError> {
        let expected = ItemIndex::new(self.items.len());
        if index != expected {
            return Err(LayoutError::OutOfOrderAppend {
                expected,
                got: index,
            });
        }

        if self.by_column.len() <= column.get() {
            self.by_column.resize_with(column.get() + 1, Vec::new);
        }
        self.by_column[column.get()].push(index);
        self.items.push(PlacedItem { frame, column });
        self.extent = self.extent.max(frame.max_y());
        Ok(())
    }

    /// Frame of `index`, or `None` if it has not been laid out.
    pub fn frame_at(&self, index: ItemIndex) -> Option<Frame> {
        self.items.get(index.get()).map(|placed| placed.frame)
    }

    /// Placement of `index`, or `None` if it has not been laid out.
    pub fn placed_at(&self, index: ItemIndex) -> Option<&PlacedItem> {
        self.items.get(index.get())
    }

    /// Overall content height.
    pub fn content_extent(&self) -> f64 {
        self.extent
    }

    /// Number of items laid out.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Drop every stored frame and reset the extent to 0.
    ///
    /// Column heights live in the column tracker and are not touched here.
    pub fn invalidate(&mut self) {
        self.items.clear();
        self.by_column.clear();
        self.extent = 0.0;
    }

    /// Items whose vertical interval intersects `[top, bottom)`, ascending by index.
    pub fn items_in_rect(&self, top: f64, bottom: f64) -> Vec<ItemIndex> {
        if bottom <= top {
            return Vec::new();
        }

        let mut visible = Vec::new();
        for column in &self.by_column {
            // Items in a column are stacked, so max_y is sorted too
            let start = column.partition_point(|&i| self.frame_unchecked(i).max_y() <= top);
            visible.extend(
                column[start..]
                    .iter()
                    .copied()
                    .take_while(|&i| self.frame_unchecked(i).min_y() < bottom),
            );
        }
        visible.sort_unstable();
        visible
    }

    /// Which item (if any) contains the point `(x, y)`.
    pub fn hit_test(&self, x: f64, y: f64) -> HitTestResult {
        for (column, items) in self.by_column.iter().enumerate() {
            let Some(&first) = items.first() else {
                continue;
            };
            let lane = self.frame_unchecked(first);
            if x < lane.x || x >= lane.max_x() {
                continue;
            }

            let candidate = items.partition_point(|&i| self.frame_unchecked(i).max_y() <= y);
            return match items.get(candidate) {
                Some(&item) if self.frame_unchecked(item).contains(x, y) => HitTestResult::Hit {
                    item,
                    column: ColumnIndex::new(column),
                },
                _ => HitTestResult::Miss,
            };
        }
        HitTestResult::Miss
    }

    /// Iterate over all placements in index order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemIndex, &PlacedItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, placed)| (ItemIndex::new(i), placed))
    }

    fn frame_unchecked(&self, index: ItemIndex) -> Frame {
        self.items[index.get()].frame
    }
}
