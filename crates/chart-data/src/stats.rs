// File: crates/chart-data/src/stats.rs
// Summary: Max/min/average aggregation, specialised by point shape and set cardinality.
// Notes:
// - Each set type implements exactly one statistics trait, picked from its
//   static point shape and cardinality. Stacked sets implement the standard
//   traits with a sum-based `max_value`, so generic callers see stack heights.
// - Empty input never fails: max/min resolve to 0.0, and so does average.

use tracing::trace;

use crate::dataset::{DataSet, DataSets, StackedDataSet, StackedDataSets};
use crate::point::{RangedDataPoint, StandardDataPoint};

/// Statistics for a single series of standard (single value) points.
///
/// NaN values are not filtered: max/min skip them, average propagates them.
pub trait StandardSetStatistics {
    /// Largest point value, or 0.0 for an empty set.
    fn max_value(&self) -> f64;
    /// Smallest point value, or 0.0 for an empty set.
    fn min_value(&self) -> f64;
    /// Mean point value, or 0.0 for an empty set.
    fn average(&self) -> f64;
}

impl<P: StandardDataPoint> StandardSetStatistics for DataSet<P> {
    fn max_value(&self) -> f64 {
        standard_max(&self.data_points).unwrap_or(0.0)
    }

    fn min_value(&self) -> f64 {
        standard_min(&self.data_points).unwrap_or(0.0)
    }

    fn average(&self) -> f64 {
        standard_mean(&self.data_points)
    }
}

/// A stack's `max_value` is its height: the sum of its segment values.
/// `min_value` and `average` describe individual segments.
impl StandardSetStatistics for StackedDataSet {
    fn max_value(&self) -> f64 {
        stack_height(self)
    }

    fn min_value(&self) -> f64 {
        standard_min(&self.data_points).unwrap_or(0.0)
    }

    fn average(&self) -> f64 {
        standard_mean(&self.data_points)
    }
}

/// Statistics for a single series of ranged (`[lower, upper]`) points.
pub trait RangedSetStatistics {
    /// Largest upper bound, or 0.0 for an empty set.
    fn max_value(&self) -> f64;
    /// Smallest lower bound, or 0.0 for an empty set.
    fn min_value(&self) -> f64;
    /// Mean span width `upper - lower`, not the mean midpoint. 0.0 for an empty set.
    fn average(&self) -> f64;
}

impl<P: RangedDataPoint> RangedSetStatistics for DataSet<P> {
    fn max_value(&self) -> f64 {
        max_of(self.data_points.iter().map(RangedDataPoint::upper_value)).unwrap_or(0.0)
    }

    fn min_value(&self) -> f64 {
        min_of(self.data_points.iter().map(RangedDataPoint::lower_value)).unwrap_or(0.0)
    }

    fn average(&self) -> f64 {
        let spans: f64 = self.data_points.iter().map(|p| p.upper_value() - p.lower_value()).sum();
        mean(spans, self.data_points.len())
    }
}

/// Statistics across several series of standard points.
pub trait MultiSetStatistics {
    /// Largest point value over all sets; sets without points contribute nothing.
    fn max_value(&self) -> f64;
    /// Smallest point value over all sets; sets without points contribute nothing.
    fn min_value(&self) -> f64;
    /// Unweighted mean of the per-set means.
    ///
    /// This is an average of averages, not a global average: a set with two
    /// points weighs as much as a set with two hundred. An empty member set
    /// contributes 0.0 and still counts in the divisor.
    fn average(&self) -> f64;
}

impl<P: StandardDataPoint> MultiSetStatistics for DataSets<P> {
    fn max_value(&self) -> f64 {
        max_of(self.data_sets.iter().filter_map(|set| standard_max(&set.data_points))).unwrap_or(0.0)
    }

    fn min_value(&self) -> f64 {
        min_of(self.data_sets.iter().filter_map(|set| standard_min(&set.data_points))).unwrap_or(0.0)
    }

    fn average(&self) -> f64 {
        average_of_averages(self.data_sets.iter().map(|set| set.data_points.as_slice()))
    }
}

/// `max_value` is the tallest stack (maximum of per-set sums).
/// `min_value` and `average` describe individual segments, not stacks.
impl MultiSetStatistics for StackedDataSets {
    fn max_value(&self) -> f64 {
        max_of(self.data_sets.iter().map(stack_height)).unwrap_or(0.0)
    }

    fn min_value(&self) -> f64 {
        min_of(self.data_sets.iter().filter_map(|set| standard_min(&set.data_points))).unwrap_or(0.0)
    }

    fn average(&self) -> f64 {
        average_of_averages(self.data_sets.iter().map(|set| set.data_points.as_slice()))
    }
}

fn stack_height(set: &StackedDataSet) -> f64 {
    set.data_points.iter().map(StandardDataPoint::value).sum()
}

fn standard_max<P: StandardDataPoint>(points: &[P]) -> Option<f64> {
    max_of(points.iter().map(StandardDataPoint::value))
}

fn standard_min<P: StandardDataPoint>(points: &[P]) -> Option<f64> {
    min_of(points.iter().map(StandardDataPoint::value))
}

fn standard_mean<P: StandardDataPoint>(points: &[P]) -> f64 {
    let sum: f64 = points.iter().map(StandardDataPoint::value).sum();
    mean(sum, points.len())
}

fn average_of_averages<'a, P: StandardDataPoint + 'a>(sets: impl ExactSizeIterator<Item = &'a [P]>) -> f64 {
    let count = sets.len();
    let total: f64 = sets.map(standard_mean).sum();
    mean(total, count)
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        trace!("average over empty input, resolving to 0");
        return 0.0;
    }
    sum / count as f64
}

fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.reduce(f64::max)
}

fn min_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(0.0, 0), 0.0);
        assert_eq!(mean(9.0, 3), 3.0);
    }

    #[test]
    fn extremes_of_empty_iterator_are_absent() {
        assert_eq!(max_of(std::iter::empty()), None);
        assert_eq!(min_of([2.0, -1.0, 4.0].into_iter()), Some(-1.0));
    }
}
