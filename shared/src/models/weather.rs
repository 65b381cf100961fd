//! Weather data models

use serde::{Deserialize, Serialize};

use crate::text::round_to;
use crate::types::Language;

/// Current conditions plus today's daily extremes for a coordinate
///
/// Always present in a report. When the provider fails the record is
/// [`WeatherRecord::unavailable`], never a missing value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeatherRecord {
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub humidity: i32,
    pub wind_speed: f64,
    pub wind_direction: i32,
    pub precipitation: f64,
    pub pressure: i32,
    pub cloud_cover: i32,
    pub weather_description: String,
    pub temp_max: f64,
    pub temp_min: f64,
    pub sunrise: String,
    pub sunset: String,
}

/// Raw provider readings before rounding
#[derive(Debug, Clone, Default)]
pub struct WeatherReadings {
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub precipitation: f64,
    pub pressure: f64,
    pub cloud_cover: f64,
    pub weather_code: i32,
    pub temp_max: f64,
    pub temp_min: f64,
    pub sunrise: String,
    pub sunset: String,
}

impl WeatherRecord {
    /// Build a record from raw readings, applying the fixed rounding rules:
    /// temperatures, speeds and precipitation to one decimal; percentages,
    /// pressure and direction to integers.
    pub fn from_readings(readings: WeatherReadings, language: Language) -> Self {
        Self {
            temperature: round_to(readings.temperature, 1),
            apparent_temperature: round_to(readings.apparent_temperature, 1),
            humidity: readings.humidity.round() as i32,
            wind_speed: round_to(readings.wind_speed, 1),
            wind_direction: readings.wind_direction.round() as i32,
            precipitation: round_to(readings.precipitation, 1),
            pressure: readings.pressure.round() as i32,
            cloud_cover: readings.cloud_cover.round() as i32,
            weather_description: describe_weather_code(readings.weather_code, language)
                .to_string(),
            temp_max: round_to(readings.temp_max, 1),
            temp_min: round_to(readings.temp_min, 1),
            sunrise: readings.sunrise,
            sunset: readings.sunset,
        }
    }

    /// All-zero record used when the weather provider cannot be reached
    pub fn unavailable(language: Language) -> Self {
        Self {
            weather_description: language.unknown_label().to_string(),
            ..Default::default()
        }
    }

    /// Today's temperature span, derived rather than provider-supplied
    pub fn daily_range(&self) -> f64 {
        round_to(self.temp_max - self.temp_min, 1)
    }
}

/// WMO weather interpretation codes with Korean and English descriptions
const WEATHER_CODES: &[(i32, &str, &str)] = &[
    (0, "맑음", "Clear sky"),
    (1, "대체로 맑음", "Mainly clear"),
    (2, "부분 흐림", "Partly cloudy"),
    (3, "흐림", "Overcast"),
    (45, "안개", "Fog"),
    (48, "서리 안개", "Depositing rime fog"),
    (51, "가랑비", "Light drizzle"),
    (53, "보통 이슬비", "Moderate drizzle"),
    (55, "강한 이슬비", "Dense drizzle"),
    (61, "약한 비", "Slight rain"),
    (63, "보통 비", "Moderate rain"),
    (65, "강한 비", "Heavy rain"),
    (71, "약한 눈", "Slight snowfall"),
    (73, "보통 눈", "Moderate snowfall"),
    (75, "강한 눈", "Heavy snowfall"),
    (80, "약한 소나기", "Slight rain showers"),
    (81, "보통 소나기", "Moderate rain showers"),
    (82, "강한 소나기", "Violent rain showers"),
    (95, "뇌우", "Thunderstorm"),
    (96, "우박을 동반한 뇌우", "Thunderstorm with hail"),
];

/// Human-readable description for a WMO weather code
///
/// Codes outside the table map to the language's "unknown" label.
pub fn describe_weather_code(code: i32, language: Language) -> &'static str {
    WEATHER_CODES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, ko, en)| match language {
            Language::Ko => *ko,
            Language::En => *en,
        })
        .unwrap_or_else(|| language.unknown_label())
}
