//! Height oracle: the external source of per-item heights.

use super::types::ItemIndex;
use crate::model::gallery::Photo;

/// Answers "how tall is item `index` when rendered at `column_width`".
///
/// # Contract
/// - Called exactly once per item per layout pass (again after invalidation)
/// - MUST be deterministic for a given `(index, column_width)` within one pass
/// - SHOULD return a finite height `> 0`; anything else is surfaced by the
///   engine as [`LayoutError::InvalidHeight`](crate::model::error::LayoutError::InvalidHeight)
///
/// Any `FnMut(ItemIndex, f64) -> f64` closure is an oracle.
pub trait HeightOracle {
    /// Height for `index` at the given column width.
    fn height(&mut self, index: ItemIndex, column_width: f64) -> f64;
}

impl<F> HeightOracle for F
where
    F: FnMut(ItemIndex, f64) -> f64,
{
    fn height(&mut self, index: ItemIndex, column_width: f64) -> f64 {
        self(index, column_width)
    }
}

/// Oracle that preserves each photo's aspect ratio at the column width.
///
/// `height = (photo.height / photo.width) * column_width`
///
/// Items beyond the end of the photo slice report a height of 0, which the
/// engine rejects.
#[derive(Debug, Clone, Copy)]
pub struct AspectRatioOracle<'a> {
    photos: &'a [Photo],
}

impl<'a> AspectRatioOracle<'a> {
    /// Create an oracle over the given photos.
    pub fn new(photos: &'a [Photo]) -> Self {
        Self { photos }
    }
}

impl HeightOracle for AspectRatioOracle<'_> {
    fn height(&mut self, index: ItemIndex, column_width: f64) -> f64 {
        self.photos
            .get(index.get())
            .map_or(0.0, |photo| photo.aspect_ratio() * column_width)
    }
}
