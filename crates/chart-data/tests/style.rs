// File: crates/chart-data/tests/style.rs
// Purpose: Validate chart style loading from JSON, defaults and error reporting.

use chart_data::{ChartDataError, ChartStyle, XAxisLabelPosition, XAxisLabelSource};

#[test]
fn empty_document_yields_defaults() {
    let style = ChartStyle::from_json_str("{}").expect("parse");
    assert_eq!(style, ChartStyle::default());
    assert_eq!(style.x_axis_label_position, XAxisLabelPosition::Bottom);
    assert_eq!(style.x_axis_labels_from, XAxisLabelSource::DataPoint);
    assert_eq!(style.y_axis_number_of_labels, 7);
    assert_eq!(style.label_padding, 2.0);
}

#[test]
fn partial_document_overrides_fields() {
    let json = r#"{
        "xAxisLabelPosition": "top",
        "xAxisLabelsFrom": "chartData",
        "xAxisTitle": "Month"
    }"#;
    let style = ChartStyle::from_json_reader(json.as_bytes()).expect("parse");
    assert_eq!(style.x_axis_label_position, XAxisLabelPosition::Top);
    assert_eq!(style.x_axis_labels_from, XAxisLabelSource::ChartData);
    assert_eq!(style.x_axis_title.as_deref(), Some("Month"));
    assert_eq!(style.y_axis_title, None);
}

#[test]
fn unknown_position_is_reported() {
    let err = ChartStyle::from_json_str(r#"{ "xAxisLabelPosition": "left" }"#).unwrap_err();
    assert!(matches!(err, ChartDataError::Style(_)));
    assert!(err.to_string().starts_with("invalid chart style"));
}

#[test]
fn y_axis_settings_load_and_build() {
    let style = ChartStyle::from_json_str(r#"{ "yAxisNumberOfLabels": 4, "yAxisTitle": "Sales" }"#).expect("parse");
    assert_eq!(style.y_axis_number_of_labels, 4);
    assert_eq!(style.y_axis_title.as_deref(), Some("Sales"));
    assert_eq!(style.x_axis_title, None);

    let built = ChartStyle::default().with_y_axis_title("Sales");
    assert_eq!(built.y_axis_title, style.y_axis_title);
    assert_eq!(built.y_axis_number_of_labels, 7);
}
