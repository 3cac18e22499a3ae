//! Error types for the waterfall layout engine and its host binary.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level binary error wrapping all failure modes
//!   - [`LayoutError`] - Engine failures (configuration, oracle data, queries)
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`GalleryError`] - Gallery input read/parse failures
//!   - [`LoggingError`] - Tracing subscriber initialization failures
//!   - `std::io::Error` / `serde_json::Error` - Output failures
//!
//! # Recovery Strategy
//!
//! The engine never recovers silently. Every [`LayoutError`] is returned to the
//! caller synchronously and the layout is left in its last consistent state;
//! the host decides whether to retry with corrected inputs.

use crate::config::ConfigError;
use crate::layout::types::ItemIndex;
use crate::logging::LoggingError;
use crate::model::gallery::GalleryError;
use thiserror::Error;

/// Errors surfaced by the layout engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Invalid layout parameters passed to `configure`.
    ///
    /// Fatal to that configuration attempt. The engine keeps its previous
    /// configuration and layout; reconfigure with valid parameters to recover.
    ///
    /// # Examples
    ///
    /// ```
    /// use waterfall::model::error::LayoutError;
    ///
    /// let err = LayoutError::Configuration {
    ///     parameter: "column_count",
    ///     reason: "must be at least 1, got 0".to_string(),
    /// };
    /// assert!(err.to_string().contains("column_count"));
    /// ```
    #[error("Invalid layout configuration ({parameter}): {reason}")]
    Configuration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable explanation.
        reason: String,
    },

    /// The height oracle returned a non-positive or non-finite height.
    ///
    /// The offending item and every item after it are not laid out. Items
    /// before it remain laid out and queryable.
    #[error("Height oracle returned invalid height {height} for item {index}")]
    InvalidHeight {
        /// Item whose height was rejected.
        index: ItemIndex,
        /// The rejected value.
        height: f64,
    },

    /// A frame was requested for an item that has not been laid out yet.
    ///
    /// Indicates the host queried ahead of `ensure_laid_out`.
    #[error("Item {index} has not been laid out (laid out: {count})")]
    NotLaidOut {
        /// Requested item.
        index: ItemIndex,
        /// Number of items laid out at the time of the query.
        count: usize,
    },

    /// Internal invariant violation: a non-contiguous index was appended to the cache.
    ///
    /// Never produced by correct orchestration; indicates a defect.
    #[error("Out-of-order append: expected item {expected}, got {got}")]
    OutOfOrderAppend {
        /// The next contiguous index the cache expected.
        expected: ItemIndex,
        /// The index actually appended.
        got: ItemIndex,
    },
}

/// Top-level error for the `waterfall` binary.
///
/// All domain-specific errors convert to `AppError` via `From`, so the binary's
/// main logic can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Layout engine failure.
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration loading failure.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Gallery input failure.
    #[error("Failed to load gallery: {0}")]
    Gallery(#[from] GalleryError),

    /// Logging initialization failure.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Failed to serialize JSON output.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write output.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
