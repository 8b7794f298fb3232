// File: crates/chart-data/src/dataset.rs
// Summary: Data set cardinalities: single series, multi series, and stacked bars.

use serde::{Deserialize, Serialize};

use crate::point::{DataPoint, MultiBarDataPoint};

/// One plotted series. Point order is rendering order (left to right).
pub trait SingleDataSet {
    type Point: DataPoint;

    fn data_points(&self) -> &[Self::Point];
}

/// Several series sharing one point shape, rendered grouped or overlaid.
pub trait MultiDataSet {
    type Set: SingleDataSet;

    fn data_sets(&self) -> &[Self::Set];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSet<P> {
    pub data_points: Vec<P>,
    #[serde(default)]
    pub legend_title: Option<String>,
}

impl<P> DataSet<P> {
    pub fn new(data_points: Vec<P>) -> Self {
        Self { data_points, legend_title: None }
    }

    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = Some(title.into());
        self
    }
}

impl<P: DataPoint> SingleDataSet for DataSet<P> {
    type Point = P;

    fn data_points(&self) -> &[P] { &self.data_points }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSets<P> {
    pub data_sets: Vec<DataSet<P>>,
}

impl<P> DataSets<P> {
    pub fn new(data_sets: Vec<DataSet<P>>) -> Self {
        Self { data_sets }
    }
}

impl<P: DataPoint> MultiDataSet for DataSets<P> {
    type Set = DataSet<P>;

    fn data_sets(&self) -> &[DataSet<P>] { &self.data_sets }
}

/// One stacked column; its height is the sum of its segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackedDataSet {
    pub data_points: Vec<MultiBarDataPoint>,
    /// Shown as the column's x-axis label.
    pub set_title: String,
}

impl StackedDataSet {
    pub fn new(data_points: Vec<MultiBarDataPoint>, set_title: impl Into<String>) -> Self {
        Self { data_points, set_title: set_title.into() }
    }
}

impl SingleDataSet for StackedDataSet {
    type Point = MultiBarDataPoint;

    fn data_points(&self) -> &[MultiBarDataPoint] { &self.data_points }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedDataSets {
    pub data_sets: Vec<StackedDataSet>,
}

impl StackedDataSets {
    pub fn new(data_sets: Vec<StackedDataSet>) -> Self {
        Self { data_sets }
    }
}

impl MultiDataSet for StackedDataSets {
    type Set = StackedDataSet;

    fn data_sets(&self) -> &[StackedDataSet] { &self.data_sets }
}
