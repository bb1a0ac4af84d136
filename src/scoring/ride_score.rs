//! Ride Score Engine
//!
//! Rates how ride-friendly a day is on a 0-100 scale. Temperature comfort is read
//! from a piecewise-linear curve, then scaled by a modifier built from rain and wind
//! comfort, and finally discounted by a severity penalty driven by the weather code,
//! the rain probability and strong wind.

use serde::{Deserialize, Serialize};

use crate::models::WeatherObservation;

/// Temperature used when neither the max nor the min temperature is known
pub const OPTIMAL_TEMP_C: f64 = 26.0;

/// Comfort curve anchors as (temperature °C, comfort 0-1), sorted by temperature
pub static COMFORT_CURVE: [(f64, f64); 13] = [
    (-10.0, 0.0),
    (0.0, 0.05),
    (5.0, 0.1),
    (10.0, 0.15),
    (15.0, 0.55),
    (20.0, 0.82),
    (22.0, 0.9),
    (25.0, 1.0),
    (27.0, 1.0),
    (30.0, 0.90),
    (32.0, 0.75),
    (35.0, 0.35),
    (40.0, 0.05),
];

/// Precipitation chance (%) below which rain is ignored entirely
pub const RAIN_PROBABILITY_THRESHOLD: i32 = 25;
const RAIN_LOG_STEEPNESS: f64 = 400.0;

/// Wind speed (km/h) at which wind comfort reaches zero
pub const MAX_REASONABLE_WIND_KPH: f64 = 45.0;
const WIND_COMFORT_EXPONENT: f64 = 1.4;
const UNKNOWN_WIND_COMFORT: f64 = 0.8;

const RAIN_WEIGHT: f64 = 0.7;
const WIND_WEIGHT: f64 = 0.3;

const MODIFIER_FLOOR: f64 = 0.4;
const MODIFIER_CEILING: f64 = 1.0;

const RAIN_PENALTY_WEIGHT: f64 = 0.25;
const WIND_PENALTY_START_KPH: f64 = 20.0;
const WIND_PENALTY_RANGE_KPH: f64 = 60.0;
const WIND_PENALTY_WEIGHT: f64 = 0.2;
const UNKNOWN_CODE_PENALTY: f64 = 0.2;

/// Upper bound of the combined severity penalty
pub const MAX_SEVERITY_PENALTY: f64 = 0.8;

/// Every intermediate value of a single ride score evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Comfort read from the temperature curve (0-1)
    pub temperature_comfort: f64,
    /// Log-scaled rain severity (0-1)
    pub rain_severity: f64,
    /// `1 - rain_severity`
    pub rain_comfort: f64,
    /// Wind comfort (0-1)
    pub wind_comfort: f64,
    /// Weighted rain and wind comfort (0-1)
    pub condition_suitability: f64,
    /// Multiplier applied to the temperature comfort (0.4-1.0)
    pub modifier: f64,
    /// `temperature_comfort * modifier`
    pub blended: f64,
    /// Fixed penalty for the weather code
    pub code_penalty: f64,
    /// Penalty contributed by rain severity
    pub rain_penalty: f64,
    /// Penalty contributed by strong wind
    pub wind_penalty: f64,
    /// Sum of the three penalties, clamped to 0-0.8
    pub severity_penalty: f64,
    /// `blended * (1 - severity_penalty)`
    pub adjusted: f64,
    /// Final score (0-100)
    pub score: u8,
}

/// Stateless ride score calculator
pub struct RideScoreEngine;

impl RideScoreEngine {
    /// Compute the 0-100 ride score for a day.
    ///
    /// NaN temperatures or wind speed are treated as missing and replaced by neutral
    /// defaults. Out-of-range precipitation chances are clamped and unknown weather
    /// codes receive a default penalty, so this never fails.
    #[must_use]
    pub fn evaluate(
        max_temp_c: f64,
        min_temp_c: f64,
        precipitation_chance: i32,
        max_wind_speed_kph: f64,
        weather_code: i32,
    ) -> u8 {
        Self::evaluate_observation(&WeatherObservation {
            max_temp_c,
            min_temp_c,
            precipitation_chance,
            max_wind_speed_kph,
            weather_code,
        })
    }

    /// Compute the ride score for an observation
    #[must_use]
    pub fn evaluate_observation(observation: &WeatherObservation) -> u8 {
        Self::breakdown(observation).score
    }

    /// Compute the ride score and keep every intermediate value
    #[must_use]
    pub fn breakdown(observation: &WeatherObservation) -> ScoreBreakdown {
        let temperature_comfort =
            temperature_comfort(observation.max_temp_c, observation.min_temp_c);
        let rain_severity = rain_severity(observation.precipitation_chance);
        let rain_comfort = (1.0 - rain_severity).clamp(0.0, 1.0);
        let wind_comfort = wind_comfort(observation.max_wind_speed_kph);

        let condition_suitability =
            (rain_comfort * RAIN_WEIGHT + wind_comfort * WIND_WEIGHT).clamp(0.0, 1.0);
        let modifier = lerp(MODIFIER_FLOOR, MODIFIER_CEILING, condition_suitability);
        let blended = temperature_comfort * modifier;

        let code_penalty = code_penalty(observation.weather_code);
        let rain_penalty = rain_severity * RAIN_PENALTY_WEIGHT;
        let wind_penalty = wind_penalty(observation.max_wind_speed_kph);
        let severity_penalty =
            (code_penalty + rain_penalty + wind_penalty).clamp(0.0, MAX_SEVERITY_PENALTY);

        let adjusted = blended * (1.0 - severity_penalty);
        let score = to_score(adjusted);

        tracing::debug!(
            temperature_comfort,
            rain_severity,
            wind_comfort,
            modifier,
            severity_penalty,
            score,
            "Evaluated ride score"
        );

        ScoreBreakdown {
            temperature_comfort,
            rain_severity,
            rain_comfort,
            wind_comfort,
            condition_suitability,
            modifier,
            blended,
            code_penalty,
            rain_penalty,
            wind_penalty,
            severity_penalty,
            adjusted,
            score,
        }
    }
}

/// Temperature comfort (0-1) for the day's max and min temperature
#[must_use]
pub fn temperature_comfort(max_temp_c: f64, min_temp_c: f64) -> f64 {
    let known: Vec<f64> = [max_temp_c, min_temp_c]
        .into_iter()
        .filter(|t| !t.is_nan())
        .collect();

    let average = if known.is_empty() {
        OPTIMAL_TEMP_C
    } else {
        known.iter().sum::<f64>() / known.len() as f64
    };

    // +inf and -inf average to NaN
    let average = if average.is_nan() {
        OPTIMAL_TEMP_C
    } else {
        average
    };

    comfort_at(average)
}

/// Read the comfort curve at `temp_c`, clamping to the curve's domain
#[must_use]
pub fn comfort_at(temp_c: f64) -> f64 {
    let (min_temp, min_comfort) = COMFORT_CURVE[0];
    let (max_temp, max_comfort) = COMFORT_CURVE[COMFORT_CURVE.len() - 1];

    let temp = temp_c.clamp(min_temp, max_temp);
    if temp <= min_temp {
        return min_comfort;
    }
    if temp >= max_temp {
        return max_comfort;
    }

    for window in COMFORT_CURVE.windows(2) {
        let (x0, y0) = window[0];
        let (x1, y1) = window[1];
        if temp <= x1 {
            let fraction = (temp - x0) / (x1 - x0);
            return lerp(y0, y1, fraction);
        }
    }

    max_comfort
}

/// Log-scaled rain severity (0-1) for a precipitation chance in percent
#[must_use]
pub fn rain_severity(precipitation_chance: i32) -> f64 {
    let clamped = precipitation_chance.clamp(0, 100);
    if clamped < RAIN_PROBABILITY_THRESHOLD {
        return 0.0;
    }
    let normalized = f64::from(clamped - RAIN_PROBABILITY_THRESHOLD)
        / f64::from(100 - RAIN_PROBABILITY_THRESHOLD);
    log_scaled_growth(normalized.clamp(0.0, 1.0))
}

// Rises steeply just past the threshold: 50% is already severe, 90% nearly maxed out.
fn log_scaled_growth(normalized: f64) -> f64 {
    if normalized <= 0.0 {
        return 0.0;
    }
    let numerator = (1.0 + RAIN_LOG_STEEPNESS * normalized).ln();
    let denominator = (1.0 + RAIN_LOG_STEEPNESS).ln();
    (numerator / denominator).clamp(0.0, 1.0)
}

/// Wind comfort (0-1); unknown wind gets a neutral 0.8
#[must_use]
pub fn wind_comfort(max_wind_speed_kph: f64) -> f64 {
    if max_wind_speed_kph.is_nan() {
        return UNKNOWN_WIND_COMFORT;
    }
    let clamped = max_wind_speed_kph.clamp(0.0, MAX_REASONABLE_WIND_KPH);
    let normalized = 1.0 - clamped / MAX_REASONABLE_WIND_KPH;
    normalized.clamp(0.0, 1.0).powf(WIND_COMFORT_EXPONENT)
}

/// Fixed severity penalty for a WMO weather code
#[must_use]
pub fn code_penalty(weather_code: i32) -> f64 {
    match weather_code {
        0 => 0.0,
        1 => 0.02,
        2 | 3 => 0.05,
        45 | 48 => 0.08,
        51..=55 => 0.15,
        56 | 57 => 0.2,
        61 | 62 => 0.25,
        63 => 0.4,
        65 => 0.5,
        66 | 67 => 0.45,
        71 | 73 | 75 => 0.25,
        77 => 0.2,
        80 => 0.45,
        81 => 0.55,
        82 => 0.65,
        85 | 86 => 0.35,
        95 => 0.65,
        96 | 99 => 0.75,
        _ => UNKNOWN_CODE_PENALTY,
    }
}

fn wind_penalty(max_wind_speed_kph: f64) -> f64 {
    if max_wind_speed_kph.is_nan() {
        return 0.0;
    }
    ((max_wind_speed_kph - WIND_PENALTY_START_KPH) / WIND_PENALTY_RANGE_KPH).clamp(0.0, 1.0)
        * WIND_PENALTY_WEIGHT
}

/// Combined severity penalty (0-0.8) for a day
#[must_use]
pub fn severity_penalty(
    weather_code: i32,
    precipitation_chance: i32,
    max_wind_speed_kph: f64,
) -> f64 {
    let total = code_penalty(weather_code)
        + rain_severity(precipitation_chance) * RAIN_PENALTY_WEIGHT
        + wind_penalty(max_wind_speed_kph);
    total.clamp(0.0, MAX_SEVERITY_PENALTY)
}

fn lerp(start: f64, end: f64, fraction: f64) -> f64 {
    start + (end - start) * fraction
}

/// Scale to a percentage, rounding half away from zero
fn to_score(adjusted: f64) -> u8 {
    let percent = (adjusted * 100.0).round();
    if percent.is_nan() {
        return 0;
    }
    percent.clamp(0.0, 100.0) as u8
}
