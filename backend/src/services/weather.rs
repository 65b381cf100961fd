//! Weather resolution stage

use shared::{Language, WeatherRecord};

use super::Resolution;
use crate::external::WeatherClient;

/// Resolves current weather for a coordinate pair
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Query the provider; any failure yields `Failed` and discards
    /// whatever was partially read
    pub async fn resolve(&self, lat: f64, lng: f64, language: Language) -> Resolution<WeatherRecord> {
        match self.client.get_current_weather(lat, lng).await {
            Ok(readings) => {
                let record = WeatherRecord::from_readings(readings, language);
                tracing::info!(
                    temperature = record.temperature,
                    humidity = record.humidity,
                    "Weather resolved"
                );
                Resolution::Resolved(record)
            }
            Err(e) => {
                tracing::warn!(lat, lng, error = %e, "Weather lookup failed, using zeroed record");
                Resolution::Failed
            }
        }
    }
}

impl Resolution<WeatherRecord> {
    /// Total fallback: the zeroed record with a localized "unknown" label
    pub fn or_unavailable(self, language: Language) -> WeatherRecord {
        match self {
            Resolution::Resolved(record) => record,
            Resolution::Failed => WeatherRecord::unavailable(language),
        }
    }
}
