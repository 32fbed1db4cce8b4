//! Descriptive summary report

use crate::aggregate::{count_by, CategoryCount};
use crate::store::Dataset;
use bakegraph_common::{BakegraphError, Dimension, Result};
use serde::Serialize;
use tracing::debug;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct NumericSummary {
    pub column: &'static str,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; NaN for a single-row dataset.
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Value-count table for one categorical dimension.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionCounts {
    pub dimension: Dimension,
    pub counts: Vec<CategoryCount>,
}

/// The full summary report: numeric statistics plus a value-count table for
/// each recognized categorical dimension.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub numeric: Vec<NumericSummary>,
    pub categorical: Vec<DimensionCounts>,
}

/// Linear-interpolated quantile of an already sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (rank - lower as f64) * (sorted[upper] - sorted[lower])
    }
}

fn summarize(column: &'static str, values: &[f64]) -> NumericSummary {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std_dev = if count > 1 {
        (sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count as f64 - 1.0)).sqrt()
    } else {
        f64::NAN
    };

    NumericSummary {
        column,
        count,
        mean,
        std_dev,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.50),
        q3: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Build the summary report for the dataset.
pub fn describe(dataset: &Dataset) -> Result<SummaryReport> {
    if dataset.is_empty() {
        return Err(BakegraphError::EmptyDataset);
    }

    let records = dataset.records();
    let numeric = vec![
        summarize("Year", &records.iter().map(|r| r.year as f64).collect::<Vec<_>>()),
        summarize("Month", &records.iter().map(|r| r.month as f64).collect::<Vec<_>>()),
        summarize("Day", &records.iter().map(|r| r.day as f64).collect::<Vec<_>>()),
        summarize("Hour", &records.iter().map(|r| r.hour as f64).collect::<Vec<_>>()),
        summarize(
            "DayOfWeek",
            &records.iter().map(|r| r.day_of_week as f64).collect::<Vec<_>>(),
        ),
    ];

    let categorical = Dimension::ALL
        .iter()
        .map(|&dimension| {
            Ok(DimensionCounts {
                dimension,
                counts: count_by(dataset, dimension)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Built summary report: {} numeric columns, {} categorical tables",
        numeric.len(),
        categorical.len()
    );
    Ok(SummaryReport { numeric, categorical })
}
