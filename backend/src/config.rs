//! Configuration management for the Region Insight service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with REGION_ prefix
//!
//! The generative-text API key is additionally read from `HF_API_KEY`.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// User-Agent sent to every provider (Wikimedia rejects anonymous clients)
    pub user_agent: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Encyclopedia provider configuration
    pub encyclopedia: EncyclopediaConfig,

    /// Image catalog configuration
    pub image_catalog: ImageCatalogConfig,

    /// Generative text provider configuration
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Forecast endpoint (Open-Meteo compatible)
    pub api_endpoint: String,

    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EncyclopediaConfig {
    /// Site base URL; `{lang}` is replaced by the edition code
    pub base_url: String,

    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageCatalogConfig {
    /// MediaWiki action API endpoint of the media catalog
    pub api_endpoint: String,

    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Inference endpoint of the text generation model
    pub api_endpoint: String,

    /// Bearer token; requests are skipped when absent
    pub api_key: Option<String>,

    /// Per-call timeout in seconds
    pub timeout_secs: u64,

    /// Wait before the single retry after a warm-up response
    pub warmup_delay_secs: u64,

    /// Upper bound on generated tokens
    pub max_new_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling threshold
    pub top_p: f32,
}

impl GenerationConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("REGION_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let weather = WeatherConfig::default();
        let encyclopedia = EncyclopediaConfig::default();
        let image_catalog = ImageCatalogConfig::default();
        let generation = GenerationConfig::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("user_agent", default_user_agent())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", weather.api_endpoint)?
            .set_default("weather.timeout_secs", weather.timeout_secs as i64)?
            .set_default("encyclopedia.base_url", encyclopedia.base_url)?
            .set_default("encyclopedia.timeout_secs", encyclopedia.timeout_secs as i64)?
            .set_default("image_catalog.api_endpoint", image_catalog.api_endpoint)?
            .set_default("image_catalog.timeout_secs", image_catalog.timeout_secs as i64)?
            .set_default("generation.api_endpoint", generation.api_endpoint)?
            .set_default("generation.timeout_secs", generation.timeout_secs as i64)?
            .set_default("generation.warmup_delay_secs", generation.warmup_delay_secs as i64)?
            .set_default("generation.max_new_tokens", generation.max_new_tokens as i64)?
            .set_default("generation.temperature", f64::from(generation.temperature))?
            .set_default("generation.top_p", f64::from(generation.top_p))?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (REGION_ prefix)
            .add_source(
                Environment::with_prefix("REGION")
                    .separator("__")
                    .try_parsing(true),
            )
            // Conventional variable name for the inference token
            .set_override_option("generation.api_key", std::env::var("HF_API_KEY").ok())?
            .build()?;

        config.try_deserialize()
    }
}

fn default_user_agent() -> String {
    format!(
        "region-insight/{} (https://github.com/your-org/region-insight)",
        env!("CARGO_PKG_VERSION")
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            user_agent: default_user_agent(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            encyclopedia: EncyclopediaConfig::default(),
            image_catalog: ImageCatalogConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for EncyclopediaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://{lang}.wikipedia.org".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for ImageCatalogConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://commons.wikimedia.org/w/api.php".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_endpoint:
                "https://api-inference.huggingface.co/models/mistralai/Mixtral-8x7B-Instruct-v0.1"
                    .to_string(),
            api_key: None,
            timeout_secs: 150,
            warmup_delay_secs: 25,
            max_new_tokens: 4000,
            temperature: 0.75,
            top_p: 0.95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_provider_contracts() {
        let config = Config::default();
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.encyclopedia.timeout_secs, 10);
        assert_eq!(config.image_catalog.timeout_secs, 10);
        assert_eq!(config.generation.timeout_secs, 150);
        assert_eq!(config.generation.warmup_delay_secs, 25);
        assert_eq!(config.generation.max_new_tokens, 4000);
        assert!(config.encyclopedia.base_url.contains("{lang}"));
    }

    #[test]
    fn test_api_key_presence() {
        let mut generation = GenerationConfig::default();
        assert!(!generation.has_api_key());
        generation.api_key = Some(String::new());
        assert!(!generation.has_api_key());
        generation.api_key = Some("hf_test".to_string());
        assert!(generation.has_api_key());
    }
}
