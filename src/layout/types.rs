//! Core layout newtypes

use serde::Serialize;

/// Item index within the gallery. 0-based, contiguous, insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Column index in `[0, column_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Create a new ColumnIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based column value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for ColumnIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Rectangle assigned to an item for display.
///
/// # Invariants
/// - all fields are finite and non-negative
/// - `width` is the column width of the layout pass that produced it
/// - `height > 0`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (the column width).
    pub width: f64,
    /// Height (as supplied by the height oracle).
    pub height: f64,
}

impl Frame {
    /// Create a new frame.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Bottom edge. Equal to `y + height`.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge. Equal to `x + width`.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Check whether a point lies inside the frame.
    ///
    /// Left and top edges are inclusive, right and bottom edges exclusive,
    /// so adjacent frames never both claim a point.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.max_x() && y >= self.y && y < self.max_y()
    }

    /// Check whether the frame's vertical interval overlaps `[top, bottom)`.
    pub fn intersects_vertical(&self, top: f64, bottom: f64) -> bool {
        self.y < bottom && self.max_y() > top
    }
}

/// Size of the scrollable content area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ContentSize {
    /// Width (the configured viewport width).
    pub width: f64,
    /// Height (the content extent).
    pub height: f64,
}

impl ContentSize {
    /// Create new content size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
