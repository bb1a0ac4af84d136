//! `bestbikeday` - rates how ride-friendly a day's weather is
//!
//! This library scores a day's forecast on a 0-100 scale for cycling, describes
//! WMO weather codes, and turns Open-Meteo daily forecasts into scored days.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod weather;

// Re-export core types for public API
pub use config::BikeDayConfig;
pub use error::BikeDayError;
pub use models::{DailyForecast, WeatherObservation, best_day};
pub use scoring::{ConditionDescriber, RideScoreEngine, ScoreBreakdown, ScoreRating};
pub use weather::DailyWeatherResponse;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BikeDayError>;
