//! Chart rendering trait and shared styling helpers

use crate::{ColorScheme, GraphConfig, StyleConfig};
use bakegraph_common::Result;
use plotters::prelude::*;
use std::path::Path;

/// Trait for rendering charts from already-aggregated tables.
///
/// Rendering is synchronous: every chart is a pure function of its data and
/// configuration, drawn in the caller's thread.
pub trait ChartRenderer {
    /// Render the chart to an image file
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()>;

    /// Get the default style configuration for this renderer
    fn default_style(&self) -> StyleConfig {
        StyleConfig::default()
    }

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            // matplotlib tab10, the palette the dashboard charts are styled after
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),
                RGBColor(255, 127, 14),
                RGBColor(44, 160, 44),
                RGBColor(214, 39, 40),
                RGBColor(148, 103, 189),
                RGBColor(140, 86, 75),
                RGBColor(227, 119, 194),
                RGBColor(127, 127, 127),
                RGBColor(188, 189, 34),
                RGBColor(23, 190, 207),
            ],
            ColorScheme::Vibrant => vec![
                RGBColor(230, 25, 75),
                RGBColor(60, 180, 75),
                RGBColor(255, 225, 25),
                RGBColor(0, 130, 200),
                RGBColor(245, 130, 48),
                RGBColor(145, 30, 180),
                RGBColor(70, 240, 240),
                RGBColor(240, 50, 230),
            ],
            ColorScheme::Custom(colors) => colors
                .iter()
                .map(|color_str| self.parse_color(color_str))
                .collect(),
        }
    }

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(255, 255, 255))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count_plot::CountPlot;

    #[test]
    fn test_parse_color() {
        let chart = CountPlot::new(Vec::new());
        assert_eq!(chart.parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(chart.parse_color("#4a90e2"), RGBColor(74, 144, 226));
        assert_eq!(chart.parse_color("bogus"), RGBColor(0, 0, 0));
        assert_eq!(chart.parse_color("#FFF"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_custom_scheme_parses_all_entries() {
        let chart = CountPlot::new(Vec::new());
        let colors = chart.get_colors(&ColorScheme::Custom(vec![
            "#FF0000".to_string(),
            "#00FF00".to_string(),
        ]));
        assert_eq!(colors, vec![RGBColor(255, 0, 0), RGBColor(0, 255, 0)]);
    }

    #[test]
    fn test_background_defaults_to_white() {
        let chart = CountPlot::new(Vec::new());
        let mut config = GraphConfig::default();
        config.style.background_color = None;
        assert_eq!(chart.get_background_color(&config), RGBColor(255, 255, 255));
    }
}
