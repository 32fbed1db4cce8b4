//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Input dataset configuration
    #[validate]
    pub data: DataConfig,

    /// Chart rendering settings
    #[validate]
    pub graph: GraphConfig,

    /// Logging configuration
    #[validate]
    pub logging: LoggingConfig,
}

/// Input dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DataConfig {
    /// Path to the point-of-sale CSV export
    #[validate(length(min = 1, message = "CSV path cannot be empty"))]
    pub csv_path: String,
}

/// Chart rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GraphConfig {
    /// Chart width in pixels
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Chart height in pixels
    #[validate(range(min = 100, max = 4000, message = "Height must be between 100 and 4000 pixels"))]
    pub height: u32,

    /// Background color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Background color must be a valid hex color"))]
    pub background_color: String,

    /// Primary color for chart elements (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Primary color must be a valid hex color"))]
    pub primary_color: String,

    /// Secondary color for chart elements (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Secondary color must be a valid hex color"))]
    pub secondary_color: String,

    /// Font family for text rendering
    pub font_family: String,

    /// Font size for labels
    #[validate(range(min = 8, max = 72, message = "Font size must be between 8 and 72"))]
    pub font_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(function = "crate::validation::validate_log_level", message = "Log level must be one of: trace, debug, info, warn, error"))]
    pub level: String,

    /// Whether to use pretty, colored console output
    pub pretty: bool,

    /// Optional log file path
    pub file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            graph: GraphConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: "Bakery.csv".to_string(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            background_color: "#FFFFFF".to_string(),
            primary_color: "#4A90E2".to_string(),
            secondary_color: "#FF6B6B".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 14,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            pretty: true,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let mut config = Config::default();
        config.graph.background_color = "white".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_out_of_range_dimensions_are_rejected() {
        let mut config = Config::default();
        config.graph.width = 10;
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_empty_csv_path_is_rejected() {
        let mut config = Config::default();
        config.data.csv_path = String::new();
        assert!(config.validate_all().is_err());
    }
}
