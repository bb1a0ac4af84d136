//! Open-Meteo daily forecast documents and conversion to scored days
//!
//! The document is fetched elsewhere; this module only decodes it and attaches a
//! ride score and condition description to every day.

use std::{fs::File, io::Read, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::Result;
use crate::error::BikeDayError;
use crate::models::{DailyForecast, WeatherObservation};

/// Daily forecast response from `OpenMeteo`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    #[serde(rename = "daily")]
    pub daily_data: DailyData,
    #[serde(default)]
    pub daily_units: Option<DailyUnits>,
}

/// Column-oriented daily values; missing columns decode as empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max", default)]
    pub max_temperature: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min", default)]
    pub min_temperature: Vec<Option<f64>>,
    #[serde(rename = "precipitation_probability_mean", default)]
    pub precipitation_chance: Vec<Option<i32>>,
    #[serde(rename = "windspeed_10m_max", default)]
    pub max_wind_speed: Vec<Option<f64>>,
    #[serde(rename = "weathercode", default)]
    pub weather_code: Vec<Option<i32>>,
}

/// Units reported for each daily column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyUnits {
    pub time: String,
    #[serde(rename = "temperature_2m_max")]
    pub max_temperature: String,
    #[serde(rename = "temperature_2m_min")]
    pub min_temperature: String,
    #[serde(rename = "precipitation_probability_mean")]
    pub precipitation_chance: String,
    #[serde(rename = "windspeed_10m_max")]
    pub max_wind_speed: String,
    #[serde(rename = "weathercode")]
    pub weather_code: String,
}

impl DailyWeatherResponse {
    /// Decode a response from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a response from any reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Decode a response stored in a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Convert the columns into one scored record per day.
    ///
    /// Short columns and `null` entries are treated as missing: temperatures and
    /// wind become NaN, precipitation chance and weather code become 0.
    #[instrument(level = "debug", skip(self), fields(days = self.daily_data.time.len()))]
    pub fn to_daily_forecasts(&self) -> Result<Vec<DailyForecast>> {
        let daily = &self.daily_data;
        self.warn_on_unexpected_units();

        daily
            .time
            .iter()
            .enumerate()
            .map(|(index, time)| {
                let date = NaiveDate::parse_from_str(time, "%Y-%m-%d").map_err(|e| {
                    BikeDayError::parse(format!("invalid date '{time}' at index {index}: {e}"))
                })?;

                let observation = WeatherObservation {
                    max_temp_c: value_at(&daily.max_temperature, index).unwrap_or(f64::NAN),
                    min_temp_c: value_at(&daily.min_temperature, index).unwrap_or(f64::NAN),
                    precipitation_chance: value_at(&daily.precipitation_chance, index)
                        .unwrap_or(0),
                    max_wind_speed_kph: value_at(&daily.max_wind_speed, index)
                        .unwrap_or(f64::NAN),
                    weather_code: value_at(&daily.weather_code, index).unwrap_or(0),
                };

                let forecast = DailyForecast::new(date, observation);
                debug!(
                    %date,
                    score = forecast.ride_score,
                    conditions = %forecast.condition_description,
                    "Scored forecast day"
                );
                Ok(forecast)
            })
            .collect()
    }

    fn warn_on_unexpected_units(&self) {
        let Some(units) = &self.daily_units else {
            return;
        };
        if units.max_temperature != "°C" || units.min_temperature != "°C" {
            warn!(
                max = %units.max_temperature,
                min = %units.min_temperature,
                "Temperatures are not in Celsius; scores assume °C"
            );
        }
        if units.max_wind_speed != "km/h" {
            warn!(unit = %units.max_wind_speed, "Wind speed is not in km/h; scores assume km/h");
        }
    }
}

fn value_at<T: Copy>(column: &[Option<T>], index: usize) -> Option<T> {
    column.get(index).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.41,
        "timezone": "Europe/Berlin",
        "daily_units": {
            "time": "iso8601",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C",
            "precipitation_probability_mean": "%",
            "windspeed_10m_max": "km/h",
            "weathercode": "wmo code"
        },
        "daily": {
            "time": ["2024-06-01", "2024-06-02", "2024-06-03"],
            "temperature_2m_max": [25.0, 19.5, null],
            "temperature_2m_min": [25.0, 11.0],
            "precipitation_probability_mean": [0, 65, null],
            "windspeed_10m_max": [0.0, 28.4, 12.0],
            "weathercode": [0, 63, 96]
        }
    }"#;

    #[test]
    fn test_parses_response() {
        let response = DailyWeatherResponse::from_json(RESPONSE).unwrap();

        assert_eq!(response.timezone, "Europe/Berlin");
        assert_eq!(response.daily_data.time.len(), 3);
        assert_eq!(response.daily_data.max_temperature[2], None);
        assert!(response.daily_units.is_some());
    }

    #[test]
    fn test_to_daily_forecasts() {
        let response = DailyWeatherResponse::from_json(RESPONSE).unwrap();
        let days = response.to_daily_forecasts().unwrap();

        assert_eq!(days.len(), 3);

        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(days[0].condition_description, "Clear sky");
        assert_eq!(days[0].ride_score, 100);

        assert_eq!(days[1].condition_description, "Moderate rain");
        assert!(days[1].ride_score < days[0].ride_score);
    }

    #[test]
    fn test_missing_entries_use_defaults() {
        let response = DailyWeatherResponse::from_json(RESPONSE).unwrap();
        let days = response.to_daily_forecasts().unwrap();
        let third = &days[2].observation;

        assert!(third.max_temp_c.is_nan());
        assert!(third.min_temp_c.is_nan());
        assert_eq!(third.precipitation_chance, 0);
        assert_eq!(third.weather_code, 96);
        assert_eq!(
            days[2].ride_score,
            crate::RideScoreEngine::evaluate(f64::NAN, f64::NAN, 0, 12.0, 96)
        );
    }

    #[test]
    fn test_missing_columns_decode_as_empty() {
        let json = r#"{
            "latitude": 0.0,
            "longitude": 0.0,
            "daily": { "time": ["2024-01-15"] }
        }"#;
        let days = DailyWeatherResponse::from_json(json)
            .unwrap()
            .to_daily_forecasts()
            .unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].observation.weather_code, 0);
        assert!(days[0].observation.max_wind_speed_kph.is_nan());
    }

    #[test]
    fn test_invalid_date_is_parse_error() {
        let json = r#"{
            "latitude": 0.0,
            "longitude": 0.0,
            "daily": { "time": ["2024-13-45"] }
        }"#;
        let result = DailyWeatherResponse::from_json(json)
            .unwrap()
            .to_daily_forecasts();

        let err = result.unwrap_err();
        assert!(matches!(err, BikeDayError::Parse { .. }));
        assert!(err.to_string().contains("2024-13-45"));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let err = DailyWeatherResponse::from_json("{\"daily\": 3}").unwrap_err();
        assert!(matches!(err, BikeDayError::Json { .. }));
    }

    #[test]
    fn test_from_reader() {
        let response = DailyWeatherResponse::from_reader(RESPONSE.as_bytes()).unwrap();
        assert_eq!(response.latitude, 52.52);
    }

    #[test]
    fn test_read_failures_are_io_errors() {
        let err = DailyWeatherResponse::from_reader(&[0xff, 0xfe, 0x00][..]).unwrap_err();
        assert!(matches!(err, BikeDayError::Io { .. }));

        let err = DailyWeatherResponse::from_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, BikeDayError::Io { .. }));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, RESPONSE.as_bytes()).unwrap();

        let response = DailyWeatherResponse::from_path(file.path()).unwrap();
        assert_eq!(response.timezone, "Europe/Berlin");
    }
}
