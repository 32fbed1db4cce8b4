//! Category share pie chart implementation

use crate::{ChartRenderer, GraphConfig};
use bakegraph_common::{BakegraphError, Result};
use bakegraph_data::CategoryCount;
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Pie chart over a value-count table.
#[derive(Debug)]
pub struct PieChart {
    pub data: Vec<CategoryCount>,
}

impl PieChart {
    pub fn new(data: Vec<CategoryCount>) -> Self {
        Self { data }
    }

    /// Create a chart with a configuration tuned for a square pie
    pub fn with_config(data: Vec<CategoryCount>, title: &str) -> (Self, GraphConfig) {
        let chart = Self::new(data);
        let mut config = GraphConfig {
            title: title.to_string(),
            ..Default::default()
        };
        config.width = 800;
        config.height = 800;
        (chart, config)
    }
}

impl ChartRenderer for PieChart {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(BakegraphError::graph("No data available for pie chart"));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let root = root.titled(&config.title, title_font)?;

        let sizes: Vec<f64> = self.data.iter().map(|row| row.count as f64).collect();
        let labels: Vec<String> = self.data.iter().map(|row| row.category.clone()).collect();
        let palette = self.get_colors(&config.style.color_scheme);
        let colors: Vec<RGBColor> = (0..self.data.len())
            .map(|index| palette[index % palette.len()])
            .collect();

        let (area_width, area_height) = root.dim_in_pixel();
        let center = ((area_width / 2) as i32, (area_height / 2) as i32);
        let radius = (area_width.min(area_height) as f64) * 0.35;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(
            (
                config.style.axis_font.family.as_str(),
                config.style.axis_font.size,
            )
                .into_font(),
        );
        pie.percentages(
            (
                config.style.axis_font.family.as_str(),
                config.style.axis_font.size,
            )
                .into_font(),
        );

        root.draw(&pie)?;
        root.present()?;
        info!("Rendered pie chart to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_data() -> Vec<CategoryCount> {
        vec![
            CategoryCount { category: "Morning".to_string(), count: 30 },
            CategoryCount { category: "Afternoon".to_string(), count: 18 },
            CategoryCount { category: "Evening".to_string(), count: 5 },
        ]
    }

    #[test]
    fn test_with_config_is_square() {
        let (chart, config) = PieChart::with_config(sample_data(), "Distribution by Daypart");
        assert_eq!(chart.data.len(), 3);
        assert_eq!(config.width, config.height);
        assert_eq!(config.title, "Distribution by Daypart");
    }

    #[test]
    fn test_render_to_file() {
        let (chart, config) = PieChart::with_config(sample_data(), "Distribution");

        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("pie_chart_test.png");

        chart.render_to_file(&config, &file_path).unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn test_render_empty_data_error() {
        let chart = PieChart::new(Vec::new());
        let config = GraphConfig::default();
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("empty_test.png");

        assert!(chart.render_to_file(&config, &file_path).is_err());
    }
}
