// File: crates/chart-data/src/lib.rs
// Summary: Core library entry point; exports data points, data sets, aggregation and axis label layout.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod point;
pub mod stats;
pub mod style;

pub use axis::{XAxisLabelPosition, XAxisLabelSource, XAxisViewData};
pub use chart::{
    AxisLabelData, BarChartData, ChartAxes, ChartData, GroupedBarChartData, LineBarChartData,
    LineChartData, MultiLineChartData, PieChartData, RangedBarChartData, RangedLineChartData,
    StackedBarChartData, ViewData,
};
pub use dataset::{DataSet, DataSets, MultiDataSet, SingleDataSet, StackedDataSet, StackedDataSets};
pub use error::{ChartDataError, Result};
pub use layout::{AxisLabelsView, AxisTitleView, Edge, Padding, Slot, SlotKind, VStack, XAxisLabels, XAxisLabelsExt};
pub use point::{
    BarDataPoint, DataPoint, LineDataPoint, MultiBarDataPoint, PieDataPoint, RangedBarDataPoint,
    RangedDataPoint, RangedLineDataPoint, StandardDataPoint,
};
pub use stats::{MultiSetStatistics, RangedSetStatistics, StandardSetStatistics};
pub use style::ChartStyle;
