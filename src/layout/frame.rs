//! FrameComputer - pure geometry from placement to frame

use super::types::{ColumnIndex, Frame, ItemIndex};
use crate::model::error::LayoutError;

/// Derive the absolute frame of an item placed in `column` at `y`.
///
/// - `x = column * (column_width + horizontal_spacing)`
/// - `width = column_width`
///
/// Pure: the same inputs always produce the same frame.
pub fn compute_frame(
    column: ColumnIndex,
    y: f64,
    height: f64,
    column_width: f64,
    horizontal_spacing: f64,
) -> Frame {
    let x = column.get() as f64 * (column_width + horizontal_spacing);
    Frame::new(x, y, column_width, height)
}

/// Validate a height supplied by the oracle.
///
/// Heights are never clamped: a non-positive or non-finite value would corrupt
/// every later placement in its column.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidHeight`] unless `height` is finite and `> 0`.
pub fn checked_height(index: ItemIndex, height: f64) -> Result<f64, LayoutError> {
    if height.is_finite() && height > 0.0 {
        Ok(height)
    } else {
        Err(LayoutError::InvalidHeight { index, height })
    }
}
