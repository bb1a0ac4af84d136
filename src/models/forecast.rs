//! Daily forecast model carrying the ride score and condition description

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WeatherObservation;
use crate::scoring::{ConditionDescriber, RideScoreEngine, ScoreRating};

/// Conditions for a single day in the forecast, with its ride score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar day
    pub date: NaiveDate,
    /// Weather inputs for the day
    #[serde(flatten)]
    pub observation: WeatherObservation,
    /// Human-readable description of the weather code
    pub condition_description: String,
    /// Ride score (0-100)
    pub ride_score: u8,
}

impl DailyForecast {
    /// Score and describe an observation for `date`
    #[must_use]
    pub fn new(date: NaiveDate, observation: WeatherObservation) -> Self {
        Self {
            date,
            condition_description: ConditionDescriber::describe(observation.weather_code)
                .to_string(),
            ride_score: RideScoreEngine::evaluate_observation(&observation),
            observation,
        }
    }

    /// Rating band of the ride score
    #[must_use]
    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.ride_score)
    }

    /// Day name, e.g. "Saturday"
    #[must_use]
    pub fn day_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

/// Pick the day with the highest ride score; ties keep the earliest day
#[must_use]
pub fn best_day(forecasts: &[DailyForecast]) -> Option<&DailyForecast> {
    forecasts.iter().fold(None, |best, day| match best {
        Some(current) if current.ride_score > day.ride_score => Some(current),
        Some(current) if current.ride_score == day.ride_score && current.date <= day.date => {
            Some(current)
        }
        _ => Some(day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(
        max_temp_c: f64,
        precipitation_chance: i32,
        weather_code: i32,
    ) -> WeatherObservation {
        WeatherObservation {
            max_temp_c,
            min_temp_c: max_temp_c - 6.0,
            precipitation_chance,
            max_wind_speed_kph: 10.0,
            weather_code,
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_new_scores_and_describes() {
        let day = DailyForecast::new(date(1), observation(24.0, 70, 63));

        assert_eq!(day.condition_description, "Moderate rain");
        assert_eq!(
            day.ride_score,
            RideScoreEngine::evaluate(24.0, 18.0, 70, 10.0, 63)
        );
        assert_eq!(day.day_name(), "Saturday");
    }

    #[test]
    fn test_best_day_picks_highest_score() {
        let days = vec![
            DailyForecast::new(date(1), observation(24.0, 80, 63)),
            DailyForecast::new(date(2), observation(28.0, 0, 0)),
            DailyForecast::new(date(3), observation(8.0, 40, 71)),
        ];

        let best = best_day(&days).unwrap();
        assert_eq!(best.date, date(2));
    }

    #[test]
    fn test_best_day_ties_keep_earliest() {
        let days = vec![
            DailyForecast::new(date(3), observation(28.0, 0, 0)),
            DailyForecast::new(date(1), observation(28.0, 0, 0)),
            DailyForecast::new(date(2), observation(28.0, 0, 0)),
        ];

        let best = best_day(&days).unwrap();
        assert_eq!(best.date, date(1));
    }

    #[test]
    fn test_best_day_empty() {
        assert!(best_day(&[]).is_none());
    }

    #[test]
    fn test_serializes_flat_record() {
        let day = DailyForecast::new(date(1), observation(24.0, 10, 1));
        let value = serde_json::to_value(&day).unwrap();

        assert_eq!(value["date"], "2024-06-01");
        assert_eq!(value["weather_code"], 1);
        assert_eq!(value["condition_description"], "Mainly clear");
        assert!(value["ride_score"].is_u64());
    }
}
