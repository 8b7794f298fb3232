// File: crates/chart-examples/src/bin/axis_labels.rs
// Summary: Minimal example that aggregates a stacked bar chart and prints its x-axis label layout.
// Usage: example-axis-labels [style.json]

use anyhow::{Context, Result};
use chart_data::*;
use tracing::info;

const DEFAULT_STYLE: &str = r#"{ "xAxisLabelPosition": "bottom", "xAxisTitle": "Quarter" }"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let style = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading chart style");
            let file = std::fs::File::open(&path).with_context(|| format!("open style {path}"))?;
            ChartStyle::from_json_reader(std::io::BufReader::new(file))
                .with_context(|| format!("load style {path}"))?
        }
        None => ChartStyle::from_json_str(DEFAULT_STYLE)?,
    };
    info!(position = ?style.x_axis_label_position, "chart style ready");

    let quarter = |title: &str, values: [f64; 3]| {
        let points = values
            .iter()
            .zip(["North", "South", "West"])
            .map(|(v, group)| MultiBarDataPoint::new(*v, group))
            .collect();
        StackedDataSet::new(points, title)
    };
    let data = StackedDataSets::new(vec![
        quarter("Q1", [3.0, 4.0, 5.0]),
        quarter("Q2", [6.0, 2.0, 1.0]),
        quarter("Q3", [8.0, 7.0, 2.0]),
    ]);

    let mut chart: StackedBarChartData = ChartData::new(data, style);
    info!(stacks = chart.data.data_sets.len(), "stacked bar chart built");
    println!("tallest stack: {}", chart.data.max_value());
    println!("smallest segment: {}", chart.data.min_value());
    println!("mean of stack means: {:.3}", chart.data.average());

    let stack = "<plot>".x_axis_labels(&mut chart);
    println!("has x-axis labels: {}", chart.x_axis_view_data().has_x_axis_labels);
    for slot in &stack.children {
        match slot {
            Slot::Content(content) => println!("  {content}"),
            Slot::Labels { view, padding } => {
                println!("  labels {:?} (pad {:?} {})", view.labels, padding.edge, padding.amount)
            }
            Slot::Title(title) => {
                println!("  title {}", title.as_ref().map(|t| t.text.as_str()).unwrap_or(""))
            }
        }
    }
    Ok(())
}
