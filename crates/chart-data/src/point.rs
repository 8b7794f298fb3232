// File: crates/chart-data/src/point.rs
// Summary: Data point shapes (standard single value, ranged lower/upper) and concrete point types.
// Notes:
// - Shape is expressed through traits so the aggregation layer can pick its
//   behaviour at compile time. A point type implements exactly one of
//   `StandardDataPoint` or `RangedDataPoint`.

use serde::{Deserialize, Serialize};

use crate::error::{ChartDataError, Result};

/// Behaviour shared by every plotted observation.
pub trait DataPoint {
    fn description(&self) -> Option<&str>;

    /// Label shown under the point when the chart reads its x-axis labels from data points.
    fn x_axis_label(&self) -> Option<&str>;

    /// Description or empty string; never absent, since it is interpolated into label text.
    fn wrapped_description(&self) -> &str {
        self.description().unwrap_or("")
    }
}

/// A point carrying one numeric value.
pub trait StandardDataPoint: DataPoint {
    fn value(&self) -> f64;
}

/// A point carrying a `[lower, upper]` pair.
/// Contract: `lower_value() <= upper_value()`; not enforced here.
pub trait RangedDataPoint: DataPoint {
    fn lower_value(&self) -> f64;
    fn upper_value(&self) -> f64;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineDataPoint {
    pub value: f64,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl LineDataPoint {
    pub fn new(value: f64) -> Self {
        Self { value, x_axis_label: None, description: None }
    }

    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarDataPoint {
    pub value: f64,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BarDataPoint {
    pub fn new(value: f64) -> Self {
        Self { value, x_axis_label: None, description: None }
    }

    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Bar segment used by grouped and stacked bar charts; `group` names the segment's series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiBarDataPoint {
    pub value: f64,
    pub group: String,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MultiBarDataPoint {
    pub fn new(value: f64, group: impl Into<String>) -> Self {
        Self { value, group: group.into(), x_axis_label: None, description: None }
    }

    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangedBarDataPoint {
    pub lower_value: f64,
    pub upper_value: f64,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RangedBarDataPoint {
    /// Build without checking bounds; an inverted pair yields a negative span downstream.
    pub fn new(lower_value: f64, upper_value: f64) -> Self {
        Self { lower_value, upper_value, x_axis_label: None, description: None }
    }

    /// Build enforcing `lower_value <= upper_value`.
    pub fn try_new(lower_value: f64, upper_value: f64) -> Result<Self> {
        check_range(lower_value, upper_value)?;
        Ok(Self::new(lower_value, upper_value))
    }

    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Line point with an error band around its plotted `value`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangedLineDataPoint {
    pub value: f64,
    pub lower_value: f64,
    pub upper_value: f64,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RangedLineDataPoint {
    pub fn new(value: f64, lower_value: f64, upper_value: f64) -> Self {
        Self { value, lower_value, upper_value, x_axis_label: None, description: None }
    }

    pub fn try_new(value: f64, lower_value: f64, upper_value: f64) -> Result<Self> {
        check_range(lower_value, upper_value)?;
        Ok(Self::new(value, lower_value, upper_value))
    }

    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Pie and doughnut slice. Carries no x-axis label: those charts have no x axis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PieDataPoint {
    pub value: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl PieDataPoint {
    pub fn new(value: f64) -> Self {
        Self { value, description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn check_range(lower: f64, upper: f64) -> Result<()> {
    if lower > upper {
        return Err(ChartDataError::InvertedRange { lower, upper });
    }
    Ok(())
}

macro_rules! impl_data_point {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl DataPoint for $ty {
                fn description(&self) -> Option<&str> { self.description.as_deref() }
                fn x_axis_label(&self) -> Option<&str> { self.x_axis_label.as_deref() }
            }
        )+
    };
}

impl_data_point!(
    LineDataPoint,
    BarDataPoint,
    MultiBarDataPoint,
    RangedBarDataPoint,
    RangedLineDataPoint,
);

impl DataPoint for PieDataPoint {
    fn description(&self) -> Option<&str> { self.description.as_deref() }
    fn x_axis_label(&self) -> Option<&str> { None }
}

impl StandardDataPoint for LineDataPoint {
    fn value(&self) -> f64 { self.value }
}

impl StandardDataPoint for BarDataPoint {
    fn value(&self) -> f64 { self.value }
}

impl StandardDataPoint for MultiBarDataPoint {
    fn value(&self) -> f64 { self.value }
}

impl StandardDataPoint for PieDataPoint {
    fn value(&self) -> f64 { self.value }
}

impl RangedDataPoint for RangedBarDataPoint {
    fn lower_value(&self) -> f64 { self.lower_value }
    fn upper_value(&self) -> f64 { self.upper_value }
}

impl RangedDataPoint for RangedLineDataPoint {
    fn lower_value(&self) -> f64 { self.lower_value }
    fn upper_value(&self) -> f64 { self.upper_value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_inverted_range() {
        let err = RangedBarDataPoint::try_new(5.0, 2.0).unwrap_err();
        assert!(matches!(err, ChartDataError::InvertedRange { lower, upper } if lower == 5.0 && upper == 2.0));
        assert!(RangedLineDataPoint::try_new(3.0, 2.0, 2.0).is_ok());
    }

    #[test]
    fn unchecked_constructor_keeps_inverted_pair() {
        let p = RangedBarDataPoint::new(5.0, 2.0);
        assert_eq!(p.upper_value() - p.lower_value(), -3.0);
    }
}
