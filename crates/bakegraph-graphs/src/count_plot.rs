//! Category count bar chart implementation

use crate::{ChartRenderer, GraphConfig};
use bakegraph_common::{BakegraphError, Result};
use bakegraph_data::CategoryCount;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Vertical bar chart over a value-count table.
#[derive(Debug)]
pub struct CountPlot {
    /// Rows in display order (already sorted by the aggregation layer)
    pub data: Vec<CategoryCount>,
}

impl CountPlot {
    pub fn new(data: Vec<CategoryCount>) -> Self {
        Self { data }
    }

    /// Create a plot with a configuration tuned for categorical bars
    pub fn with_config(
        data: Vec<CategoryCount>,
        title: &str,
        x_label: Option<&str>,
        y_label: Option<&str>,
    ) -> (Self, GraphConfig) {
        let plot = Self::new(data);
        let mut config = GraphConfig {
            title: title.to_string(),
            x_label: x_label.map(|s| s.to_string()),
            y_label: y_label.map(|s| s.to_string()),
            ..Default::default()
        };

        // More space for rotated-looking category labels
        config.style.margins.bottom = 80;

        (plot, config)
    }

    /// Get max count for y-axis scaling
    fn max_count(&self) -> f64 {
        if self.data.is_empty() {
            return 10.0;
        }
        self.data
            .iter()
            .map(|row| row.count as f64)
            .fold(0.0, f64::max)
            * 1.1
    }
}

impl ChartRenderer for CountPlot {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(BakegraphError::graph("No data available for count plot"));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        let max_count = self.max_count();
        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(config.style.margins.top as i32)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(0usize..self.data.len(), 0.0..max_count)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Category"))
            .y_desc(config.y_label.as_deref().unwrap_or("Count"))
            .x_labels(self.data.len())
            .x_label_formatter(&|index| {
                self.data
                    .get(*index)
                    .map(|row| row.category.clone())
                    .unwrap_or_default()
            })
            .draw()?;

        let colors = self.get_colors(&config.style.color_scheme);
        for (index, row) in self.data.iter().enumerate() {
            let color = &colors[index % colors.len()];
            chart.draw_series(std::iter::once(Rectangle::new(
                [(index, 0.0), (index + 1, row.count as f64)],
                color.filled(),
            )))?;
        }

        root.present()?;
        info!("Rendered count plot to {}", path.display());
        Ok(())
    }
}
