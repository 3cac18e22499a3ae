//! LayoutEngine - the waterfall layout orchestrator

use super::{
    cache::{LayoutCache, PlacedItem},
    column_tracker::ColumnTracker,
    frame::{checked_height, compute_frame},
    hit_test::HitTestResult,
    oracle::HeightOracle,
    params::LayoutParams,
    types::{ContentSize, Frame, ItemIndex},
};
use crate::model::error::LayoutError;
use tracing::{debug, trace, warn};

/// Waterfall layout engine.
///
/// Places items, in index order, into the currently shortest column and
/// caches the resulting frames. Growth is append-only: extending the layout
/// never moves a frame that was already computed.
///
/// # Lifecycle
/// - [`LayoutEngine::new`] / [`LayoutEngine::configure`]: fix the parameters and
///   start from an empty layout
/// - [`LayoutEngine::ensure_laid_out`]: extend the layout up to an item count
/// - [`LayoutEngine::invalidate_all`]: drop everything; the next
///   `ensure_laid_out` recomputes from item 0
///
/// # Threading
/// Single-threaded by design. Mutations take `&mut self`; there is no
/// internal locking.
///
/// # Examples
///
/// ```
/// use waterfall::layout::{LayoutEngine, LayoutParams, ItemIndex};
///
/// let mut engine = LayoutEngine::new(LayoutParams::new(2, 400.0, 0.0, 0.0)).unwrap();
/// let heights = [300.0, 200.0, 100.0];
/// let extent = engine
///     .ensure_laid_out(3, &mut |i: ItemIndex, _width: f64| heights[i.get()])
///     .unwrap();
///
/// assert_eq!(extent, 300.0);
/// assert_eq!(engine.frame_for_item(ItemIndex::new(2)).unwrap().x, 200.0);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    /// Parameters of the current layout pass.
    params: LayoutParams,
    /// Derived from `params`; cached so every frame uses the identical value.
    column_width: f64,
    /// Per-column accumulated heights.
    columns: ColumnTracker,
    /// Computed frames.
    cache: LayoutCache,
}

impl LayoutEngine {
    /// Create an engine with an empty layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Configuration`] if `params` fail validation.
    pub fn new(params: LayoutParams) -> Result<Self, LayoutError> {
        params.validate()?;
        debug!(?params, column_width = params.column_width(), "Layout engine created");
        Ok(Self {
            params,
            column_width: params.column_width(),
            columns: ColumnTracker::new(params.column_count),
            cache: LayoutCache::new(),
        })
    }

    /// Replace the layout parameters and discard the current layout.
    ///
    /// The layout is invalidated even when `params` equal the current ones.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Configuration`] if `params` fail validation. The
    /// previous parameters and layout are then left untouched.
    pub fn configure(&mut self, params: LayoutParams) -> Result<(), LayoutError> {
        params.validate()?;

        self.params = params;
        self.column_width = params.column_width();
        self.invalidate_all();

        debug!(?params, column_width = self.column_width, "Layout engine configured");
        Ok(())
    }

    /// Extend the layout so that items `0..item_count` are laid out.
    ///
    /// The oracle is asked once for each item in `count()..item_count`, in
    /// index order. Items already laid out are untouched, so calling this
    /// again with the same or a smaller count is a no-op.
    ///
    /// Returns the resulting content extent.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidHeight`] if the oracle yields a
    /// non-positive or non-finite height. Items before the offending one stay
    /// laid out; the offending item and all later ones are not appended.
    pub fn ensure_laid_out<O>(&mut self, item_count: usize, oracle: &mut O) -> Result<f64, LayoutError>
    where
        O: HeightOracle + ?Sized,
    {
        let start = self.cache.count();
        if item_count <= start {
            return Ok(self.cache.content_extent());
        }

        for raw_index in start..item_count {
            let index = ItemIndex::new(raw_index);
            let reported = oracle.height(index, self.column_width);
            let height = checked_height(index, reported).inspect_err(|_| {
                warn!(
                    item = raw_index,
                    height = reported,
                    laid_out = self.cache.count(),
                    "Height oracle returned invalid height; layout stopped"
                );
            })?;

            let column = self.columns.shortest_column();
            let y = self.columns.place(column, height, self.params.vertical_spacing);
            let frame = compute_frame(
                column,
                y,
                height,
                self.column_width,
                self.params.horizontal_spacing,
            );
            trace!(
                item = raw_index,
                column = column.get(),
                column_height = self.columns.height_of(column),
                ?frame,
                "Placed item"
            );

            self.cache.append(index, column, frame)?;
        }

        debug_assert_eq!(self.cache.content_extent(), self.columns.max_height());
        debug!(
            added = item_count - start,
            count = self.cache.count(),
            extent = self.cache.content_extent(),
            "Layout extended"
        );
        Ok(self.cache.content_extent())
    }

    /// Frame of a laid-out item.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NotLaidOut`] if `index >= count()`.
    pub fn frame_for_item(&self, index: ItemIndex) -> Result<Frame, LayoutError> {
        self.cache.frame_at(index).ok_or(LayoutError::NotLaidOut {
            index,
            count: self.cache.count(),
        })
    }

    /// Placement (frame and column) of a laid-out item.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NotLaidOut`] if `index >= count()`.
    pub fn placement_for_item(&self, index: ItemIndex) -> Result<PlacedItem, LayoutError> {
        self.cache
            .placed_at(index)
            .copied()
            .ok_or(LayoutError::NotLaidOut {
                index,
                count: self.cache.count(),
            })
    }

    /// Total height needed to display every laid-out item.
    pub fn content_extent(&self) -> f64 {
        self.cache.content_extent()
    }

    /// Scrollable content size: viewport width by content extent.
    pub fn content_size(&self) -> ContentSize {
        ContentSize::new(self.params.viewport_width, self.cache.content_extent())
    }

    /// Discard every frame and column height.
    ///
    /// The next `ensure_laid_out` recomputes from item 0 and asks the oracle
    /// again for every item.
    pub fn invalidate_all(&mut self) {
        let dropped = self.cache.count();
        self.columns.reset(self.params.column_count);
        self.cache.invalidate();
        debug!(dropped, "Layout invalidated");
    }

    /// Number of items laid out.
    pub fn count(&self) -> usize {
        self.cache.count()
    }

    /// Current layout parameters.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Width shared by every frame of the current layout.
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Laid-out items intersecting the vertical band `[top, bottom)`, ascending.
    pub fn items_in_rect(&self, top: f64, bottom: f64) -> Vec<ItemIndex> {
        self.cache.items_in_rect(top, bottom)
    }

    /// Which laid-out item contains the content point `(x, y)`.
    pub fn hit_test(&self, x: f64, y: f64) -> HitTestResult {
        self.cache.hit_test(x, y)
    }

    /// Iterate over laid-out items in index order.
    pub fn placements(&self) -> impl Iterator<Item = (ItemIndex, &PlacedItem)> {
        self.cache.iter()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
