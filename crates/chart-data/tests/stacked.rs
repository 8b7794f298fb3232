// File: crates/chart-data/tests/stacked.rs
// Purpose: Validate sum-based maxima for stacked bar sets.

use chart_data::*;

fn stack(title: &str, values: &[f64]) -> StackedDataSet {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| MultiBarDataPoint::new(*v, format!("segment {i}")))
        .collect();
    StackedDataSet::new(points, title)
}

// Scaling code sees the data only through the statistics traits.
fn generic_set_max<S: StandardSetStatistics>(set: &S) -> f64 {
    set.max_value()
}

fn generic_multi_max<M: MultiSetStatistics>(sets: &M) -> f64 {
    sets.max_value()
}

#[test]
fn stacked_set_max_is_stack_height() {
    let set = stack("Q1", &[3.0, 4.0, 5.0]);
    assert_eq!(set.max_value(), 12.0);

    assert_eq!(StandardSetStatistics::max_value(&set), 12.0);
    assert_eq!(generic_set_max(&set), 12.0);

    // same points as a plain series
    let plain = DataSet::new(set.data_points.clone());
    assert_eq!(plain.max_value(), 5.0);
    assert_eq!(generic_set_max(&plain), 5.0);
}

#[test]
fn stacked_set_min_and_average_stay_per_segment() {
    let set = stack("Q1", &[3.0, 4.0, 5.0]);
    assert_eq!(set.min_value(), 3.0);
    assert_eq!(set.average(), 4.0);
}

#[test]
fn stacked_sets_max_is_tallest_stack() {
    let sets = StackedDataSets::new(vec![stack("a", &[3.0, 4.0]), stack("b", &[10.0])]);
    assert_eq!(sets.max_value(), 10.0);

    let sets = StackedDataSets::new(vec![stack("a", &[6.0, 6.0]), stack("b", &[10.0])]);
    assert_eq!(sets.max_value(), 12.0);
    assert_eq!(MultiSetStatistics::max_value(&sets), 12.0);
    assert_eq!(generic_multi_max(&sets), 12.0);

    // same segments as plain grouped series
    let grouped = DataSets::new(sets.data_sets.iter().map(|s| DataSet::new(s.data_points.clone())).collect());
    assert_eq!(generic_multi_max(&grouped), 10.0);
}

#[test]
fn stacked_sets_fall_back_to_segment_statistics() {
    let sets = StackedDataSets::new(vec![stack("a", &[3.0, 4.0]), stack("b", &[10.0])]);
    assert_eq!(sets.min_value(), 3.0);
    assert_eq!(sets.average(), (3.5 + 10.0) / 2.0);
}

#[test]
fn empty_stacks_resolve_to_zero() {
    assert_eq!(StackedDataSets::default().max_value(), 0.0);
    assert_eq!(stack("empty", &[]).max_value(), 0.0);
}
