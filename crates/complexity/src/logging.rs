//! Logging setup

use crate::config::ComplexityConfig;
use crate::error::ComplexityError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a global `tracing` subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_logging(level: Level, json: bool) -> Result<(), ComplexityError> {
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let result = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| ComplexityError::Logging(e.to_string()))
}

/// Install a global subscriber using the configured level and format
pub fn init_logging_from_config(config: &ComplexityConfig) -> Result<(), ComplexityError> {
    init_logging(config.log_level()?, config.log_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_fails() {
        let config = ComplexityConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        // Only the second install is guaranteed to fail.
        let _ = init_logging_from_config(&config);
        let err = init_logging(Level::INFO, true).unwrap_err();
        assert!(matches!(err, ComplexityError::Logging(_)));
    }

    #[test]
    fn test_bad_level_rejected() {
        let config = ComplexityConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            init_logging_from_config(&config),
            Err(ComplexityError::InvalidLogLevel(_))
        ));
    }
}
