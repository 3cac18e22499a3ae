//! Point hit-testing results

use super::types::{ColumnIndex, ItemIndex};

/// Result of hit-testing a content coordinate.
///
/// Determines which laid-out item (if any) contains a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestResult {
    /// Point was outside every frame (spacing gap, past the end, or outside the viewport).
    Miss,

    /// Point hit an item.
    Hit {
        /// Index of the hit item.
        item: ItemIndex,
        /// Column the item was placed in.
        column: ColumnIndex,
    },
}

impl HitTestResult {
    /// Get item index if hit.
    pub fn item(&self) -> Option<ItemIndex> {
        match self {
            Self::Hit { item, .. } => Some(*item),
            Self::Miss => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_has_no_item() {
        assert_eq!(HitTestResult::Miss.item(), None);
    }

    #[test]
    fn hit_exposes_item() {
        let result = HitTestResult::Hit {
            item: ItemIndex::new(9),
            column: ColumnIndex::new(1),
        };
        assert_eq!(result.item(), Some(ItemIndex::new(9)));
    }
}
