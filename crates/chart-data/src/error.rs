// File: crates/chart-data/src/error.rs
// Summary: Error type for checked constructors and style loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartDataError>;

#[derive(Debug, Error)]
pub enum ChartDataError {
    /// A ranged point whose lower bound sits above its upper bound.
    #[error("lower value {lower} is above upper value {upper}")]
    InvertedRange { lower: f64, upper: f64 },

    #[error("invalid chart style: {0}")]
    Style(#[from] serde_json::Error),
}
