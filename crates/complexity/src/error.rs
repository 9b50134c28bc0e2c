//! Complexity Measure Error Types

use data_validator::ValidationError;
use thiserror::Error;

/// Errors returned by the complexity measures
#[derive(Debug, Error)]
pub enum ComplexityError {
    /// Input rejected by the validator
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No feature carries any class separation signal
    #[error("All the instances are equal except for the class")]
    DegenerateData,

    /// Aggregator name outside mean/sum/max
    #[error("Unknown aggregator '{0}', expected one of: mean, sum, max")]
    UnknownAggregator(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Log level string not recognized
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Global subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ComplexityError {
    /// True when the data itself is unusable, as opposed to configuration or setup
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ComplexityError::Validation(_) | ComplexityError::DegenerateData
        )
    }
}
