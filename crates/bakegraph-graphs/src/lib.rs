//! Chart generation for bakegraph aggregation tables

pub mod count_plot;
pub mod hourly_scatter;
pub mod pie_chart;
pub mod renderer;
pub mod types;

pub use count_plot::CountPlot;
pub use hourly_scatter::HourlyScatter;
pub use pie_chart::PieChart;
pub use renderer::ChartRenderer;
pub use types::*;
