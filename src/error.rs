//! Error types for the bestbikeday crate
//!
//! Scoring itself never fails; these cover loading forecasts and configuration.

use thiserror::Error;

/// Main error type for the bestbikeday crate
#[derive(Error, Debug)]
pub enum BikeDayError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Malformed forecast data
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// JSON decoding errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl BikeDayError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BikeDayError::Config { message } => {
                format!("Please check your config file and BESTBIKEDAY_ environment: {message}")
            }
            BikeDayError::Parse { message } => {
                format!("The forecast data could not be read: {message}")
            }
            BikeDayError::Json { .. } => {
                "The forecast is not a valid Open-Meteo daily response.".to_string()
            }
            BikeDayError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
        }
    }
}
