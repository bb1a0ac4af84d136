//! Data models for the bestbikeday crate
//!
//! - Weather: the daily observation fed to the ride score engine
//! - Forecast: scored per-day records and best-day selection

pub mod forecast;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{DailyForecast, best_day};
pub use weather::WeatherObservation;
