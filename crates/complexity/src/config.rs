//! Measure configuration

use crate::aggregation::Aggregator;
use crate::error::ComplexityError;
use crate::overlap::{OverlapOptions, ZeroRangePolicy};
use ::config::{Config, Environment, File, FileFormat};
use data_validator::{ValidationConfig, MIN_CLASSES};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, Level};

/// Prefix of environment overrides, e.g. `COMPLEXITY_AGGREGATOR=max`
pub const ENV_PREFIX: &str = "COMPLEXITY";

/// Complexity measure configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityConfig {
    /// F2 aggregator name: mean, sum or max
    pub aggregator: String,

    /// F2 handling of features where both classes hold one identical value
    pub zero_range: ZeroRangePolicy,

    /// Minimum number of distinct classes
    pub min_classes: usize,

    /// Log level for `init_logging_from_config`
    pub log_level: String,

    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            aggregator: Aggregator::Mean.name().to_string(),
            zero_range: ZeroRangePolicy::FullOverlap,
            min_classes: MIN_CLASSES,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl ComplexityConfig {
    /// Pessimistic config: worst class pair, zero-length ranges count as separated
    pub fn strict() -> Self {
        Self {
            aggregator: Aggregator::Max.name().to_string(),
            zero_range: ZeroRangePolicy::NoOverlap,
            ..Default::default()
        }
    }

    /// Load from an optional file, then `COMPLEXITY_*` environment variables
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ComplexityError> {
        let path = path.as_ref();
        info!("Loading complexity config from {}", path.display());

        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Self::from_settings(settings)
    }

    /// Parse an inline TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ComplexityError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ComplexityError> {
        let config: Self = settings.try_deserialize()?;
        // Names are checked at load time, not when the first measure runs.
        config.aggregator()?;
        config.log_level()?;
        Ok(config)
    }

    /// Parsed aggregator
    pub fn aggregator(&self) -> Result<Aggregator, ComplexityError> {
        self.aggregator.parse()
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<Level, ComplexityError> {
        self.log_level
            .parse()
            .map_err(|_| ComplexityError::InvalidLogLevel(self.log_level.clone()))
    }

    /// F2 options
    pub fn overlap_options(&self) -> Result<OverlapOptions, ComplexityError> {
        Ok(OverlapOptions {
            aggregator: self.aggregator()?,
            zero_range: self.zero_range,
        })
    }

    /// Validator settings
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            min_classes: self.min_classes,
        }
    }
}
