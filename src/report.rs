//! Text and JSON rendering of a computed layout for the `waterfall` binary.

use crate::layout::{ColumnIndex, ContentSize, Frame, ItemIndex, LayoutEngine};
use serde::Serialize;
use std::fmt::Write;

/// Output format for the layout report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Pretty-printed JSON document.
    Json,
}

/// One laid-out item in a [`LayoutReport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedFrame {
    /// Item index.
    pub index: ItemIndex,
    /// Column the item was placed in.
    pub column: ColumnIndex,
    /// Absolute frame.
    pub frame: Frame,
}

/// Serializable snapshot of an engine's layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Scrollable content size.
    pub content: ContentSize,
    /// Shared frame width.
    pub column_width: f64,
    /// Frames in index order.
    pub frames: Vec<PlacedFrame>,
}

impl LayoutReport {
    /// Capture every laid-out item of `engine`.
    pub fn from_engine(engine: &LayoutEngine) -> Self {
        let frames = engine
            .placements()
            .map(|(index, placed)| PlacedFrame {
                index,
                column: placed.column,
                frame: placed.frame,
            })
            .collect();
        Self {
            content: engine.content_size(),
            column_width: engine.column_width(),
            frames,
        }
    }

    /// Render as an aligned text table followed by the content size.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:>5} {:>6} {:>8} {:>8} {:>8} {:>8}",
            "index", "column", "x", "y", "width", "height"
        );
        for placed in &self.frames {
            let Frame {
                x,
                y,
                width,
                height,
            } = placed.frame;
            let _ = writeln!(
                out,
                "{:>5} {:>6} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
                placed.index.get(),
                placed.column.get(),
                x,
                y,
                width,
                height
            );
        }
        let _ = write!(
            out,
            "content: {:.1} x {:.1}",
            self.content.width, self.content.height
        );
        out
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a value cannot be represented in JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render in the requested format.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for [`OutputFormat::Json`] only.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutParams;

    fn scenario_report() -> LayoutReport {
        let mut engine =
            LayoutEngine::new(LayoutParams::new(2, 400.0, 0.0, 0.0)).expect("valid params");
        let heights = [300.0, 200.0, 100.0];
        engine
            .ensure_laid_out(3, &mut |i: ItemIndex, _: f64| heights[i.get()])
            .expect("valid heights");
        LayoutReport::from_engine(&engine)
    }

    #[test]
    fn table_lists_frames_and_content_size() {
        insta::assert_snapshot!(scenario_report().to_table(), @r"
index column        x        y    width   height
    0      0      0.0      0.0    200.0    300.0
    1      1    200.0      0.0    200.0    200.0
    2      1    200.0    200.0    200.0    100.0
content: 400.0 x 300.0
");
    }

    #[test]
    fn table_for_empty_layout_has_header_and_content_only() {
        let engine =
            LayoutEngine::new(LayoutParams::new(3, 300.0, 0.0, 0.0)).expect("valid params");
        let table = LayoutReport::from_engine(&engine).to_table();

        assert_eq!(table.lines().count(), 2);
        assert!(table.ends_with("content: 300.0 x 0.0"));
    }

    #[test]
    fn json_contains_content_and_frames() {
        let json = scenario_report().to_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["content"]["width"], 400.0);
        assert_eq!(value["content"]["height"], 300.0);
        assert_eq!(value["column_width"], 200.0);
        assert_eq!(value["frames"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["frames"][2]["index"], 2);
        assert_eq!(value["frames"][2]["column"], 1);
        assert_eq!(value["frames"][2]["frame"]["y"], 200.0);
    }

    #[test]
    fn render_dispatches_on_format() {
        let report = scenario_report();
        assert_eq!(
            report.render(OutputFormat::Table).unwrap(),
            report.to_table()
        );
        assert!(report.render(OutputFormat::Json).unwrap().starts_with('{'));
    }
}
