//! Bakery analytics dashboard - Main Entry Point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

use bakegraph_common::{init_logging, BakegraphError, Dimension, LoggingConfig};
use bakegraph_config::ConfigLoader;
use bakegraph_data::{
    count_by, describe, hourly_daily_transactions, top_n_items, CategoryCount, Dataset,
};
use bakegraph_graphs::{ChartRenderer, ColorScheme, CountPlot, FontConfig, HourlyScatter, PieChart};

mod report;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a bar chart of value counts for a categorical column
    CountPlot {
        /// Categorical column (Items, Daypart, DayType, DayName, Hour)
        #[arg(long)]
        column: String,

        /// Number of top items to keep (required when --column is Items)
        #[arg(long)]
        top_n: Option<usize>,

        /// Output image path
        #[arg(long, default_value = "count_plot.png")]
        out: PathBuf,
    },

    /// Render a pie chart of value counts for a categorical column
    PieChart {
        /// Categorical column (Items, Daypart, DayType, DayName, Hour)
        #[arg(long)]
        column: String,

        /// Number of top items to keep (required when --column is Items)
        #[arg(long)]
        top_n: Option<usize>,

        /// Output image path
        #[arg(long, default_value = "pie_chart.png")]
        out: PathBuf,
    },

    /// Render the hour-by-weekday unique transaction scatter
    Scatter {
        /// Output image path
        #[arg(long, default_value = "hourly_scatter.png")]
        out: PathBuf,
    },

    /// Print the descriptive summary report
    Summary,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    init_logging(LoggingConfig {
        level: args
            .log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.clone()),
        pretty_format: config.logging.pretty,
        file_path: config.logging.file.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    info!("Loading dataset from {}", config.data.csv_path);
    let dataset = bakegraph_data::dataset(&config.data.csv_path)?;
    info!("Dataset ready: {} rows", dataset.len());

    match args.command {
        Command::CountPlot { column, top_n, out } => {
            let counts = select_counts(&dataset, &column, top_n)?;
            let title = match top_n {
                Some(n) if column == "Items" => format!("Top {} Most Popular Items", n),
                _ => format!("Counts by {}", column),
            };
            let (plot, mut graph_config) =
                CountPlot::with_config(counts, &title, Some(&column), Some("Count"));
            apply_graph_settings(&mut graph_config, &config.graph);
            plot.render_to_file(&graph_config, &out)?;
            println!("Wrote {}", out.display());
        }

        Command::PieChart { column, top_n, out } => {
            let counts = select_counts(&dataset, &column, top_n)?;
            let title = match top_n {
                Some(n) if column == "Items" => format!("Distribution of Top {} Items", n),
                _ => format!("Distribution by {}", column),
            };
            let (chart, mut graph_config) = PieChart::with_config(counts, &title);
            apply_graph_settings(&mut graph_config, &config.graph);
            // The pie stays square regardless of the configured canvas
            graph_config.height = graph_config.width;
            chart.render_to_file(&graph_config, &out)?;
            println!("Wrote {}", out.display());
        }

        Command::Scatter { out } => {
            let matrix = hourly_daily_transactions(&dataset)?;
            let (chart, mut graph_config) =
                HourlyScatter::with_config(matrix, "Unique Transactions by Hour and Day of Week");
            apply_graph_settings(&mut graph_config, &config.graph);
            graph_config.style.color_scheme = ColorScheme::Custom(vec![
                config.graph.primary_color.clone(),
                config.graph.secondary_color.clone(),
            ]);
            chart.render_to_file(&graph_config, &out)?;
            println!("Wrote {}", out.display());
        }

        Command::Summary => {
            let report = describe(&dataset)?;
            report::print_summary(&report);
        }
    }

    Ok(())
}

/// Resolve the requested column to the right value-count table.
///
/// `top_n` is mandatory for the Items dimension and unused for the others.
fn select_counts(
    dataset: &Dataset,
    column: &str,
    top_n: Option<usize>,
) -> bakegraph_common::Result<Vec<CategoryCount>> {
    let dimension = Dimension::from_str(column)?;
    match dimension {
        Dimension::Items => {
            let n = top_n.ok_or_else(|| {
                BakegraphError::config("--top-n is required when --column is Items")
            })?;
            top_n_items(dataset, n)
        }
        other => {
            if top_n.is_some() {
                warn!("--top-n is ignored for column {}", other);
            }
            count_by(dataset, other)
        }
    }
}

/// Carry the configured canvas and styling into a chart configuration.
fn apply_graph_settings(
    graph: &mut bakegraph_graphs::GraphConfig,
    settings: &bakegraph_config::GraphConfig,
) {
    graph.width = settings.width;
    graph.height = settings.height;
    graph.style.background_color = Some(settings.background_color.clone());
    graph.style.title_font.family = settings.font_family.clone();
    graph.style.axis_font = FontConfig {
        family: settings.font_family.clone(),
        size: settings.font_size,
    };
}
