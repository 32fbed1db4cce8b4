//! Common utilities and types for the bakegraph workspace

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{BakegraphError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use types::{weekday_name, Dimension, WEEKDAY_NAMES};
