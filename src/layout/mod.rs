//! Layout layer - waterfall placement, frame caching, and frame queries
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ItemIndex, ColumnIndex, Frame, ContentSize)
//! - `params`: LayoutParams - column count, viewport width, spacing
//! - `oracle`: HeightOracle - external source of per-item heights
//! - `column_tracker`: ColumnTracker - per-column heights, shortest-column pick
//! - `frame`: FrameComputer - pure placement-to-frame geometry
//! - `cache`: LayoutCache - append-only frame store with range queries
//! - `hit_test`: HitTestResult - result of point hit-testing
//! - `engine`: LayoutEngine - the orchestrator and public surface

pub mod cache;
pub mod column_tracker;
pub mod engine;
pub mod frame;
pub mod hit_test;
pub mod oracle;
pub mod params;
pub mod types;

pub use engine::LayoutEngine;
pub use hit_test::HitTestResult;
pub use oracle::{AspectRatioOracle, HeightOracle};
pub use params::LayoutParams;
pub use types::{ColumnIndex, ContentSize, Frame, ItemIndex};
