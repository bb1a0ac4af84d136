//! Daily weather observation model and display methods

use serde::{Deserialize, Deserializer, Serialize};

/// Weather inputs for scoring a single day
///
/// Missing measurements are carried as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Maximum temperature in Celsius
    #[serde(deserialize_with = "nan_if_null")]
    pub max_temp_c: f64,
    /// Minimum temperature in Celsius
    #[serde(deserialize_with = "nan_if_null")]
    pub min_temp_c: f64,
    /// Precipitation probability in percent (clamped to 0-100 when scored)
    pub precipitation_chance: i32,
    /// Maximum wind speed in km/h
    #[serde(deserialize_with = "nan_if_null")]
    pub max_wind_speed_kph: f64,
    /// WMO weather code
    pub weather_code: i32,
}

/// JSON has no NaN; serde_json writes it as `null`, so read `null` back as NaN
fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl WeatherObservation {
    /// Observation with every measurement missing and a clear-sky code
    #[must_use]
    pub fn missing() -> Self {
        Self {
            max_temp_c: f64::NAN,
            min_temp_c: f64::NAN,
            precipitation_chance: 0,
            max_wind_speed_kph: f64::NAN,
            weather_code: 0,
        }
    }

    /// Format a temperature with unit, `--°C` when missing
    #[must_use]
    pub fn format_temperature(temp_c: f64) -> String {
        if temp_c.is_nan() {
            return "--°C".to_string();
        }
        format!("{temp_c:.1}°C")
    }

    /// Format the temperature range as `min / max`
    #[must_use]
    pub fn format_temperature_range(&self) -> String {
        format!(
            "{} / {}",
            Self::format_temperature(self.min_temp_c),
            Self::format_temperature(self.max_temp_c)
        )
    }

    /// Format wind speed with unit, `-- km/h` when missing
    #[must_use]
    pub fn format_wind(&self) -> String {
        if self.max_wind_speed_kph.is_nan() {
            return "-- km/h".to_string();
        }
        format!("{:.1} km/h", self.max_wind_speed_kph)
    }

    /// Format precipitation probability
    #[must_use]
    pub fn format_precipitation(&self) -> String {
        format!("{}%", self.precipitation_chance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_temperature() {
        assert_eq!(WeatherObservation::format_temperature(21.46), "21.5°C");
        assert_eq!(WeatherObservation::format_temperature(-3.0), "-3.0°C");
        assert_eq!(WeatherObservation::format_temperature(f64::NAN), "--°C");
    }

    #[test]
    fn test_format_wind() {
        let mut observation = WeatherObservation::missing();
        assert_eq!(observation.format_wind(), "-- km/h");

        observation.max_wind_speed_kph = 12.34;
        assert_eq!(observation.format_wind(), "12.3 km/h");
    }

    #[test]
    fn test_format_temperature_range() {
        let observation = WeatherObservation {
            max_temp_c: 24.0,
            min_temp_c: f64::NAN,
            precipitation_chance: 10,
            max_wind_speed_kph: 8.0,
            weather_code: 1,
        };
        assert_eq!(observation.format_temperature_range(), "--°C / 24.0°C");
        assert_eq!(observation.format_precipitation(), "10%");
    }

    #[test]
    fn test_null_measurements_read_as_nan() {
        let json = r#"{
            "max_temp_c": null,
            "min_temp_c": 12.0,
            "precipitation_chance": 30,
            "max_wind_speed_kph": null,
            "weather_code": 61
        }"#;
        let observation: WeatherObservation = serde_json::from_str(json).unwrap();

        assert!(observation.max_temp_c.is_nan());
        assert!(observation.max_wind_speed_kph.is_nan());
        assert_eq!(observation.min_temp_c, 12.0);
        assert_eq!(observation.weather_code, 61);
    }
}
