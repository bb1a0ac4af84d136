//! Human-readable descriptions for Open-Meteo (WMO) weather codes

/// Description returned for codes outside the WMO table
pub const UNKNOWN_CONDITIONS: &str = "Unknown conditions";

/// Maps weather codes to short phrases
pub struct ConditionDescriber;

impl ConditionDescriber {
    /// Describe a weather code. Unknown codes map to [`UNKNOWN_CONDITIONS`].
    #[must_use]
    pub fn describe(code: i32) -> &'static str {
        Self::lookup(code).unwrap_or(UNKNOWN_CONDITIONS)
    }

    /// Whether the code has a dedicated description
    #[must_use]
    pub fn is_known(code: i32) -> bool {
        Self::lookup(code).is_some()
    }

    fn lookup(code: i32) -> Option<&'static str> {
        let description = match code {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Foggy",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            56 => "Freezing drizzle",
            57 => "Heavy freezing drizzle",
            61 => "Light rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            66 => "Freezing rain",
            67 => "Heavy freezing rain",
            71 => "Light snow",
            73 => "Moderate snow",
            75 => "Heavy snow",
            77 => "Snow grains",
            80 => "Rain showers",
            81 => "Heavy rain showers",
            82 => "Violent rain showers",
            85 => "Snow showers",
            86 => "Heavy snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with hail",
            99 => "Severe thunderstorm",
            _ => return None,
        };
        Some(description)
    }
}
