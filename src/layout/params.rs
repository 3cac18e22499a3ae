//! Layout parameters and validation.

use crate::model::error::LayoutError;

/// Parameters that determine every frame of a layout pass.
///
/// Immutable until the next `configure`. Changing any field invalidates
/// every previously computed frame, since the column width changes.
///
/// # Equality Semantics
/// Two LayoutParams are equal if they would produce identical layouts
/// for the same height oracle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Number of columns (>= 1).
    pub column_count: usize,
    /// Width of the scrollable viewport.
    pub viewport_width: f64,
    /// Gap between adjacent columns.
    pub horizontal_spacing: f64,
    /// Gap between vertically adjacent items in the same column.
    pub vertical_spacing: f64,
}

impl LayoutParams {
    /// Create new layout params. Not validated until [`LayoutParams::validate`].
    pub fn new(
        column_count: usize,
        viewport_width: f64,
        horizontal_spacing: f64,
        vertical_spacing: f64,
    ) -> Self {
        Self {
            column_count,
            viewport_width,
            horizontal_spacing,
            vertical_spacing,
        }
    }

    /// Total horizontal space consumed by inter-column gaps.
    pub fn total_horizontal_spacing(&self) -> f64 {
        self.horizontal_spacing * self.column_count.saturating_sub(1) as f64
    }

    /// Fixed per-column width: `(viewport_width - total_spacing) / column_count`.
    ///
    /// Only meaningful for validated params.
    pub fn column_width(&self) -> f64 {
        (self.viewport_width - self.total_horizontal_spacing()) / self.column_count.max(1) as f64
    }

    /// Check that these params produce a usable layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Configuration`] if:
    /// - `column_count < 1`
    /// - any dimension is non-finite or a spacing is negative
    /// - `viewport_width <= total_horizontal_spacing` (non-positive column width)
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.column_count < 1 {
            return Err(config_error(
                "column_count",
                format!("must be at least 1, got {}", self.column_count),
            ));
        }

        for (parameter, value) in [
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(config_error(
                    parameter,
                    format!("must be finite and non-negative, got {}", value),
                ));
            }
        }

        if !self.viewport_width.is_finite() {
            return Err(config_error(
                "viewport_width",
                format!("must be finite, got {}", self.viewport_width),
            ));
        }

        let total_spacing = self.total_horizontal_spacing();
        if self.viewport_width <= total_spacing {
            return Err(config_error(
                "viewport_width",
                format!(
                    "must exceed total horizontal spacing {}, got {}",
                    total_spacing, self.viewport_width
                ),
            ));
        }

        Ok(())
    }
}

fn config_error(parameter: &'static str, reason: String) -> LayoutError {
    LayoutError::Configuration { parameter, reason }
}
