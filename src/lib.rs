//! Waterfall layout
//!
//! Masonry-style layout engine for scrollable grids of variably-sized image
//! cells. Items are placed, in order, into the currently shortest of a fixed
//! number of columns so that column heights stay balanced.
//!
//! The engine is pure state and geometry: hosts supply item heights through a
//! [`layout::HeightOracle`] and read back frames, the content extent, and
//! visible-item queries.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod report;
