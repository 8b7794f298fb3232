// File: crates/chart-data/src/chart.rs
// Summary: Chart models and the capability traits the axis label composer consumes.
// Notes:
// - Line and bar family models implement `LineBarChartData`; pie models do
//   not, so axis labels cannot be attached to a chart without an x axis.

use crate::axis::{XAxisLabelPosition, XAxisLabelSource, XAxisViewData};
use crate::dataset::{DataSet, DataSets, SingleDataSet, StackedDataSets};
use crate::layout::{AxisLabelsView, AxisTitleView};
use crate::point::{
    BarDataPoint, DataPoint, LineDataPoint, MultiBarDataPoint, PieDataPoint, RangedBarDataPoint,
    RangedLineDataPoint,
};
use crate::style::ChartStyle;

/// Chart models with configurable axes.
pub trait ChartAxes {
    fn chart_style(&self) -> &ChartStyle;

    fn x_axis_label_position(&self) -> XAxisLabelPosition {
        self.chart_style().x_axis_label_position
    }
}

/// Chart models carrying layout view-state.
pub trait ViewData {
    fn x_axis_view_data(&self) -> &XAxisViewData;
    fn x_axis_view_data_mut(&mut self) -> &mut XAxisViewData;

    /// Mark that x-axis labels are present. Returns `true` when the flag changed.
    fn enable_x_axis_labels(&mut self) -> bool {
        let view_data = self.x_axis_view_data_mut();
        let changed = !view_data.has_x_axis_labels;
        view_data.has_x_axis_labels = true;
        changed
    }
}

/// Capability set of charts with a continuous x axis (line and bar family).
pub trait LineBarChartData: ChartAxes + ViewData {
    /// Label row for the x axis, one entry per column or point.
    fn x_axis_label_view(&self) -> AxisLabelsView;

    /// Title under (or over) the label row; `None` when no title is configured.
    fn x_axis_title_view(&self) -> Option<AxisTitleView> {
        self.chart_style().x_axis_title.clone().map(AxisTitleView::new)
    }
}

/// Data that can name its x-axis columns.
pub trait AxisLabelData {
    fn point_labels(&self) -> Vec<String>;
}

impl<P: DataPoint> AxisLabelData for DataSet<P> {
    fn point_labels(&self) -> Vec<String> {
        self.data_points()
            .iter()
            .map(|p| p.x_axis_label().unwrap_or_default().to_owned())
            .collect()
    }
}

/// Overlaid series share the x axis; the first series names the columns.
impl<P: DataPoint> AxisLabelData for DataSets<P> {
    fn point_labels(&self) -> Vec<String> {
        self.data_sets.first().map(AxisLabelData::point_labels).unwrap_or_default()
    }
}

/// One label per stack, taken from the stack's title.
impl AxisLabelData for StackedDataSets {
    fn point_labels(&self) -> Vec<String> {
        self.data_sets.iter().map(|set| set.set_title.clone()).collect()
    }
}

/// Line/bar chart model: data, style and view-state.
#[derive(Clone, Debug)]
pub struct ChartData<D> {
    pub data: D,
    pub style: ChartStyle,
    /// Explicit labels, used when `style.x_axis_labels_from` is `ChartData`.
    pub x_axis_labels: Option<Vec<String>>,
    view_data: XAxisViewData,
}

pub type LineChartData = ChartData<DataSet<LineDataPoint>>;
pub type MultiLineChartData = ChartData<DataSets<LineDataPoint>>;
pub type RangedLineChartData = ChartData<DataSet<RangedLineDataPoint>>;
pub type BarChartData = ChartData<DataSet<BarDataPoint>>;
pub type GroupedBarChartData = ChartData<DataSets<MultiBarDataPoint>>;
pub type StackedBarChartData = ChartData<StackedDataSets>;
pub type RangedBarChartData = ChartData<DataSet<RangedBarDataPoint>>;

impl<D> ChartData<D> {
    pub fn new(data: D, style: ChartStyle) -> Self {
        Self { data, style, x_axis_labels: None, view_data: XAxisViewData::default() }
    }

    pub fn with_x_axis_labels(mut self, labels: Vec<String>) -> Self {
        self.x_axis_labels = Some(labels);
        self
    }
}

impl<D> ChartAxes for ChartData<D> {
    fn chart_style(&self) -> &ChartStyle { &self.style }
}

impl<D> ViewData for ChartData<D> {
    fn x_axis_view_data(&self) -> &XAxisViewData { &self.view_data }
    fn x_axis_view_data_mut(&mut self) -> &mut XAxisViewData { &mut self.view_data }
}

impl<D: AxisLabelData> LineBarChartData for ChartData<D> {
    fn x_axis_label_view(&self) -> AxisLabelsView {
        let labels = match (self.style.x_axis_labels_from, &self.x_axis_labels) {
            (XAxisLabelSource::ChartData, Some(labels)) => labels.clone(),
            _ => self.data.point_labels(),
        };
        AxisLabelsView::new(labels)
    }
}

/// Pie/doughnut model. Has no x axis and none of the axis capabilities.
#[derive(Clone, Debug)]
pub struct PieChartData {
    pub data: DataSet<PieDataPoint>,
}

impl PieChartData {
    pub fn new(data: DataSet<PieDataPoint>) -> Self {
        Self { data }
    }
}
