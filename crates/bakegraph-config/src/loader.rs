//! Configuration loading utilities

use crate::Config;
use bakegraph_common::Result as BakegraphResult;
use std::env;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for bakegraph_common::BakegraphError {
    fn from(err: ConfigError) -> Self {
        bakegraph_common::BakegraphError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all().map_err(ConfigError::ValidationError)?;

        Ok(config)
    }

    /// Load configuration from environment variables and files
    pub fn load() -> BakegraphResult<Config> {
        let config = if let Ok(config_path) = env::var("BAKEGRAPH_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("config.yaml").exists() {
            Self::load_config("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::load_config("config.yml")?
        } else {
            // No config file found, use defaults with env overrides
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BakegraphResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(csv_path) = env::var("BAKEGRAPH_CSV_PATH") {
            config.data.csv_path = csv_path;
        }

        if let Ok(level) = env::var("BAKEGRAPH_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(width) = env::var("BAKEGRAPH_GRAPH_WIDTH") {
            config.graph.width = width.parse().map_err(|e| ConfigError::EnvParseError {
                var: "BAKEGRAPH_GRAPH_WIDTH".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(height) = env::var("BAKEGRAPH_GRAPH_HEIGHT") {
            config.graph.height = height.parse().map_err(|e| ConfigError::EnvParseError {
                var: "BAKEGRAPH_GRAPH_HEIGHT".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}
