// File: crates/chart-data/src/axis.rs
// Summary: X axis configuration enums and the view-state flags a chart model owns.

use serde::{Deserialize, Serialize};

/// Where the x-axis labels sit relative to the plotted content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisLabelPosition {
    Top,
    #[default]
    Bottom,
}

/// Where the x-axis label text comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum XAxisLabelSource {
    /// Each data point's own `x_axis_label`.
    #[default]
    DataPoint,
    /// The explicit label list held by the chart model.
    ChartData,
}

/// Layout flags consumed by downstream scaling code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XAxisViewData {
    pub has_x_axis_labels: bool,
}
