//! Weather API client for fetching current conditions
//!
//! Integrates with the Open-Meteo forecast API (current + daily fields)

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::WeatherReadings;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Current-condition variables requested from the provider
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation,\
apparent_temperature,pressure_msl,weather_code,cloud_cover,wind_direction_10m";

/// Daily variables requested from the provider
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,sunrise,sunset";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo forecast response
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    #[serde(default)]
    current: OpenMeteoCurrent,
    #[serde(default)]
    daily: OpenMeteoDaily,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OpenMeteoCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    wind_speed_10m: Option<f64>,
    wind_direction_10m: Option<f64>,
    precipitation: Option<f64>,
    apparent_temperature: Option<f64>,
    pressure_msl: Option<f64>,
    cloud_cover: Option<f64>,
    weather_code: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OpenMeteoDaily {
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    sunrise: Vec<String>,
    sunset: Vec<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient from the service configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.weather.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.weather.api_endpoint.clone(),
        })
    }

    /// Fetch current conditions and today's extremes by coordinates
    pub async fn get_current_weather(&self, latitude: f64, longitude: f64) -> AppResult<WeatherReadings> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherProvider(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherProvider(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let data: OpenMeteoResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherProvider(format!("Failed to parse response: {}", e)))?;

        Ok(Self::convert_response(data))
    }

    /// Convert the Open-Meteo response to raw readings; absent fields read as zero
    fn convert_response(data: OpenMeteoResponse) -> WeatherReadings {
        let current = data.current;
        let daily = data.daily;
        let first = |values: &[Option<f64>]| values.first().copied().flatten().unwrap_or(0.0);

        WeatherReadings {
            temperature: current.temperature_2m.unwrap_or(0.0),
            apparent_temperature: current.apparent_temperature.unwrap_or(0.0),
            humidity: current.relative_humidity_2m.unwrap_or(0.0),
            wind_speed: current.wind_speed_10m.unwrap_or(0.0),
            wind_direction: current.wind_direction_10m.unwrap_or(0.0),
            precipitation: current.precipitation.unwrap_or(0.0),
            pressure: current.pressure_msl.unwrap_or(0.0),
            cloud_cover: current.cloud_cover.unwrap_or(0.0),
            weather_code: current.weather_code.unwrap_or(0),
            temp_max: first(&daily.temperature_2m_max),
            temp_min: first(&daily.temperature_2m_min),
            sunrise: daily.sunrise.into_iter().next().unwrap_or_default(),
            sunset: daily.sunset.into_iter().next().unwrap_or_default(),
        }
    }
}
