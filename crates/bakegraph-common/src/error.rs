//! Error types and utilities for bakegraph

use thiserror::Error;

/// Result type alias for bakegraph operations
pub type Result<T> = std::result::Result<T, BakegraphError>;

/// Main error type for bakegraph operations
#[derive(Error, Debug)]
pub enum BakegraphError {
    /// Bad or missing data encountered while loading/deriving the dataset
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An aggregation was requested against a dataset with zero rows
    #[error("Dataset contains no rows")]
    EmptyDataset,

    /// A categorical dimension outside the recognized set was requested
    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    /// A top-N request outside `1..=distinct` item count
    #[error("Top-N value {requested} out of range (1..={distinct})")]
    TopNOutOfRange { requested: usize, distinct: usize },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BakegraphError {
    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new parse error with source
    pub fn parse_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Parse {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new unknown-column error
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    /// Create a new top-N range error
    pub fn top_n_out_of_range(requested: usize, distinct: usize) -> Self {
        Self::TopNOutOfRange { requested, distinct }
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to BakegraphError
impl From<csv::Error> for BakegraphError {
    fn from(err: csv::Error) -> Self {
        Self::parse_with_source("CSV read failed", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to BakegraphError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for BakegraphError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Chart rendering failed", err)
    }
}
