//! Shared fixtures for the integration tests

#![allow(dead_code)]

use region_insight::config::Config;
use serde_json::{json, Value};

pub const GENERATION_PATH: &str = "/models/test-model";
pub const WEATHER_PATH: &str = "/v1/forecast";
pub const CATALOG_PATH: &str = "/catalog/api.php";
pub const API_KEY: &str = "test-key";

/// Config with every provider pointed at the mock server
pub fn test_config(server_uri: &str) -> Config {
    let mut config = Config::default();
    config.weather.api_endpoint = format!("{}{}", server_uri, WEATHER_PATH);
    config.encyclopedia.base_url = server_uri.to_string();
    config.image_catalog.api_endpoint = format!("{}{}", server_uri, CATALOG_PATH);
    config.generation.api_endpoint = format!("{}{}", server_uri, GENERATION_PATH);
    config.generation.api_key = Some(API_KEY.to_string());
    config.generation.warmup_delay_secs = 0;
    config
}

/// Open-Meteo style payload for Kyoto in late spring
pub fn kyoto_forecast() -> Value {
    json!({
        "latitude": 35.0,
        "longitude": 135.75,
        "current": {
            "temperature_2m": 22.34,
            "relative_humidity_2m": 55,
            "wind_speed_10m": 8.36,
            "wind_direction_10m": 212,
            "precipitation": 0.0,
            "apparent_temperature": 21.78,
            "pressure_msl": 1013.2,
            "weather_code": 1,
            "cloud_cover": 20
        },
        "daily": {
            "time": ["2026-05-01"],
            "temperature_2m_max": [25.0],
            "temperature_2m_min": [18.0],
            "precipitation_sum": [0.0],
            "sunrise": ["2026-05-01T05:02"],
            "sunset": ["2026-05-01T18:41"]
        }
    })
}

pub fn kyoto_summary() -> Value {
    json!({
        "title": "Kyoto",
        "extract": "Kyoto is the capital city of Kyoto Prefecture in Japan.",
        "description": "City in Japan"
    })
}

pub fn kyoto_extract() -> Value {
    json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "17696": {
                    "pageid": 17696,
                    "title": "Kyoto",
                    "extract": "Kyoto served as Japan's capital for more than a thousand years.",
                    "categories": [
                        { "ns": 14, "title": "Category:Cities in Kyoto Prefecture" },
                        { "ns": 14, "title": "Category:Former capitals of Japan" }
                    ]
                }
            }
        }
    })
}

pub fn search_hits(titles: &[&str]) -> Value {
    let hits: Vec<Value> = titles
        .iter()
        .map(|title| json!({ "ns": 6, "title": title }))
        .collect();
    json!({ "query": { "search": hits } })
}

pub fn image_info(title: &str, url: &str) -> Value {
    json!({
        "query": {
            "pages": {
                "-1": {
                    "title": title,
                    "imageinfo": [{ "url": url }]
                }
            }
        }
    })
}

/// Generated text with all five sections and a numbered building list
pub fn generated_report() -> String {
    let body = |topic: &str| -> String {
        (0..4)
            .map(|i| {
                format!(
                    "Paragraph {i} on {topic}: the basin setting traps summer heat and winter cold alike across the city.\n"
                )
            })
            .collect()
    };
    format!(
        "1. Climate Characteristics\n{}\n\
         2. Natural Environment\n{}\n\
         3. Traditional Architecture\n{}\n\
         4. Adaptation Principles\n{}\n\
         5. Simple Explanation\n{}\n\
         Building examples:\n\
         1. Kinkaku-ji - a Zen temple covered in gold leaf beside a pond\n\
         2. Nijo Castle - palace halls with nightingale floors\n\
         3. Kiyomizu-dera - wooden temple stage built without nails\n",
        body("the seasons"),
        body("the hills"),
        body("timber halls"),
        body("the eaves"),
        body("key ideas"),
    )
}
