//! Plain-text rendering of the summary report

use bakegraph_data::SummaryReport;

pub fn print_summary(report: &SummaryReport) {
    println!("Descriptive Statistics");
    println!(
        "{:<10} {:>8} {:>10} {:>10} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for summary in &report.numeric {
        println!(
            "{:<10} {:>8} {:>10.3} {:>10.3} {:>8.1} {:>8.2} {:>8.2} {:>8.2} {:>8.1}",
            summary.column,
            summary.count,
            summary.mean,
            summary.std_dev,
            summary.min,
            summary.q1,
            summary.median,
            summary.q3,
            summary.max
        );
    }

    for table in &report.categorical {
        println!();
        println!("Value Counts for {}", table.dimension);
        for row in &table.counts {
            println!("{:<28} {:>8}", row.category, row.count);
        }
    }
}
