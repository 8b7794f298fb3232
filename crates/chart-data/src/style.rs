// File: crates/chart-data/src/style.rs
// Summary: Chart style configuration (axis titles, label placement) loadable from JSON.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::axis::{XAxisLabelPosition, XAxisLabelSource};
use crate::error::Result;

/// Gap in points between the axis labels and the plotted content.
pub const DEFAULT_LABEL_PADDING: f32 = 2.0;

/// Axis-related chart configuration. Every field has a default, so a partial
/// JSON document (or `{}`) is a valid style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    pub x_axis_label_position: XAxisLabelPosition,
    pub x_axis_labels_from: XAxisLabelSource,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub y_axis_number_of_labels: usize,
    pub label_padding: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            x_axis_label_position: XAxisLabelPosition::Bottom,
            x_axis_labels_from: XAxisLabelSource::DataPoint,
            x_axis_title: None,
            y_axis_title: None,
            y_axis_number_of_labels: 7,
            label_padding: DEFAULT_LABEL_PADDING,
        }
    }
}

impl ChartStyle {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_x_axis_label_position(mut self, position: XAxisLabelPosition) -> Self {
        self.x_axis_label_position = position;
        self
    }

    pub fn with_x_axis_labels_from(mut self, source: XAxisLabelSource) -> Self {
        self.x_axis_labels_from = source;
        self
    }

    pub fn with_x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title = Some(title.into());
        self
    }

    pub fn with_y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title = Some(title.into());
        self
    }
}
