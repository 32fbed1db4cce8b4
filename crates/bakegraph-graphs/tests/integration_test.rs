//! Render each chart type from tables produced by the aggregation layer

use bakegraph_common::Dimension;
use bakegraph_data::{count_by, derive_features, hourly_daily_transactions, Dataset, SaleRecord};
use bakegraph_graphs::{ChartRenderer, CountPlot, HourlyScatter, PieChart};
use tempfile::tempdir;

fn raw(transaction_no: &str, items: &str, date_time: &str) -> SaleRecord {
    SaleRecord {
        transaction_no: transaction_no.to_string(),
        items: items.to_string(),
        date_time: date_time.to_string(),
        daypart: "Morning".to_string(),
        day_type: "Weekday".to_string(),
    }
}

fn sample_dataset() -> Dataset {
    let records = vec![
        raw("1", "Bread", "2023-01-02 08:15:00"),
        raw("1", "Coffee", "2023-01-02 08:20:00"),
        raw("2", "Bread", "2023-01-03 09:00:00"),
        raw("3", "Scone", "2023-01-07 14:30:00"),
    ];
    Dataset::new(derive_features(records).unwrap())
}

#[test]
fn test_count_plot_from_aggregation() {
    let dataset = sample_dataset();
    let counts = count_by(&dataset, Dimension::Items).unwrap();

    let (plot, config) =
        CountPlot::with_config(counts, "Counts by Items", Some("Items"), Some("Purchases"));

    let temp_dir = tempdir().unwrap();
    let file_path = temp_dir.path().join("items.png");
    plot.render_to_file(&config, &file_path).unwrap();
    assert!(file_path.metadata().unwrap().len() > 0);
}

#[test]
fn test_pie_chart_from_aggregation() {
    let dataset = sample_dataset();
    let counts = count_by(&dataset, Dimension::Daypart).unwrap();

    let (chart, config) = PieChart::with_config(counts, "Distribution by Daypart");

    let temp_dir = tempdir().unwrap();
    let file_path = temp_dir.path().join("daypart.png");
    chart.render_to_file(&config, &file_path).unwrap();
    assert!(file_path.metadata().unwrap().len() > 0);
}

#[test]
fn test_scatter_from_aggregation() {
    let dataset = sample_dataset();
    let matrix = hourly_daily_transactions(&dataset).unwrap();

    let (chart, config) =
        HourlyScatter::with_config(matrix, "Unique Transactions by Hour and Day of Week");

    let temp_dir = tempdir().unwrap();
    let file_path = temp_dir.path().join("scatter.png");
    chart.render_to_file(&config, &file_path).unwrap();
    assert!(file_path.metadata().unwrap().len() > 0);
}
