//! Hour-by-weekday transaction scatter implementation

use crate::{ChartRenderer, GraphConfig};
use bakegraph_common::{BakegraphError, Result, WEEKDAY_NAMES};
use bakegraph_data::HourlyDailyPoint;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Bubble scatter of unique transactions per `(day_of_week, hour)` bucket.
///
/// Hours run along x, weekdays along y (labeled from the fixed name table),
/// and the bubble area scales with the unique-transaction count.
#[derive(Debug)]
pub struct HourlyScatter {
    pub data: Vec<HourlyDailyPoint>,
}

impl HourlyScatter {
    pub fn new(data: Vec<HourlyDailyPoint>) -> Self {
        Self { data }
    }

    /// Create a scatter with a configuration tuned for a 24x7 grid
    pub fn with_config(data: Vec<HourlyDailyPoint>, title: &str) -> (Self, GraphConfig) {
        let chart = Self::new(data);
        let mut config = GraphConfig {
            title: title.to_string(),
            x_label: Some("Hour of Day".to_string()),
            y_label: Some("Day of Week".to_string()),
            ..Default::default()
        };
        config.width = 1400;
        config.height = 700;
        // Weekday names need room on the left
        config.style.margins.left = 100;
        (chart, config)
    }

    fn max_transactions(&self) -> u64 {
        self.data
            .iter()
            .map(|point| point.transactions)
            .max()
            .unwrap_or(1)
            .max(1)
    }
}

impl ChartRenderer for HourlyScatter {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(BakegraphError::graph("No data available for hourly scatter"));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(config.style.margins.top as i32)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(-1i32..24i32, -1i32..7i32)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Hour of Day"))
            .y_desc(config.y_label.as_deref().unwrap_or("Day of Week"))
            .y_labels(7)
            .y_label_formatter(&|day| {
                if (0..7).contains(day) {
                    WEEKDAY_NAMES[*day as usize].to_string()
                } else {
                    String::new()
                }
            })
            .draw()?;

        let colors = self.get_colors(&config.style.color_scheme);
        let color = colors[0];
        let max = self.max_transactions() as f64;
        chart.draw_series(self.data.iter().map(|point| {
            let radius = 4.0 + 18.0 * (point.transactions as f64 / max);
            Circle::new(
                (point.hour as i32, point.day_of_week as i32),
                radius as i32,
                color.mix(0.6).filled(),
            )
        }))?;

        root.present()?;
        info!("Rendered hourly scatter to {}", path.display());
        Ok(())
    }
}
