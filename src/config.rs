//! Configuration management for bestbikeday
//!
//! Handles loading configuration from a TOML file and environment variables,
//! and validates all configuration settings.

use crate::BikeDayError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum number of days Open-Meteo can forecast
pub const MAX_FORECAST_DAYS: u32 = 16;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BikeDayConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Output settings for the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (table or json)
    #[serde(default = "default_output_format")]
    pub format: String,
    /// Maximum number of forecast days to show
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_output_format() -> String {
    "table".to_string()
}

fn default_forecast_days() -> u32 {
    7
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl BikeDayConfig {
    /// Load configuration from a file (or the default location when `None`)
    /// and environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.or_else(Self::get_config_path);

        if let Some(config_file) = config_file.filter(|path| path.exists()) {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. BESTBIKEDAY_LOGGING__LEVEL=debug
        builder = builder.add_source(
            Environment::with_prefix("BESTBIKEDAY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: BikeDayConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bestbikeday").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.output.format.is_empty() {
            self.output.format = default_output_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.output.forecast_days == 0 {
            return Err(BikeDayError::config("Forecast days must be at least 1").into());
        }

        if self.output.forecast_days > MAX_FORECAST_DAYS {
            return Err(BikeDayError::config(format!(
                "Forecast days cannot exceed {MAX_FORECAST_DAYS}"
            ))
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(BikeDayError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(BikeDayError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let valid_output_formats = ["table", "json"];
        if !valid_output_formats.contains(&self.output.format.as_str()) {
            return Err(BikeDayError::config(format!(
                "Invalid output format '{}'. Must be one of: {}",
                self.output.format,
                valid_output_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
