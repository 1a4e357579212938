//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let quality = self.conversion.quality;
        if !(quality > 0.0 && quality <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "conversion.quality must be in (0.0, 1.0], got {quality}"
            )));
        }
        if self.conversion.width == 0 {
            return Err(ConfigError::ValidationError(
                "conversion.width must be > 0".into(),
            ));
        }
        if self.conversion.height == 0 {
            return Err(ConfigError::ValidationError(
                "conversion.height must be > 0".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(
                "logging.format must be \"pretty\" or \"json\"".into(),
            ));
        }
        Ok(())
    }
}
