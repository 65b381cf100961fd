//! Text generation client
//!
//! Client for the Hugging Face Inference API text-generation task. A 503
//! answer means the model is still loading; it is surfaced as
//! [`AppError::ModelWarmingUp`] so the caller can wait and retry.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::config::{Config, GenerationConfig};
use crate::error::{AppError, AppResult};

/// Client for the text generation model
#[derive(Clone)]
pub struct TextGenerationClient {
    api_endpoint: String,
    api_key: Option<String>,
    parameters: GenerationParameters,
    http_client: Client,
}

/// Sampling configuration sent with every prompt
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub do_sample: bool,
    pub return_full_text: bool,
}

impl From<&GenerationConfig> for GenerationParameters {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// Request body for the inference endpoint
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub inputs: &'a str,
    pub parameters: &'a GenerationParameters,
}

impl TextGenerationClient {
    /// Create a new text generation client
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.generation.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Configuration(format!("Generation HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint: config.generation.api_endpoint.clone(),
            api_key: config
                .generation
                .api_key
                .clone()
                .filter(|key| !key.is_empty()),
            parameters: GenerationParameters::from(&config.generation),
            http_client,
        })
    }

    /// Send a prompt and return the generated text
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Generation API key is not set".into()))?;

        let request = GenerateRequest {
            inputs: prompt,
            parameters: &self.parameters,
        };

        let response = self
            .http_client
            .post(&self.api_endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("Request failed: {}", e)))?;

        if response.status() == StatusCode::SERVICE_UNAVAILABLE {
            return Err(AppError::ModelWarmingUp);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Generation(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to parse response: {}", e)))?;

        Ok(Self::extract_generated_text(&result))
    }

    /// Pull `generated_text` from the first element of an array response;
    /// any other shape is returned in its compact JSON form
    pub fn extract_generated_text(result: &serde_json::Value) -> String {
        match result.as_array().and_then(|items| items.first()) {
            Some(first) => first
                .get("generated_text")
                .and_then(|text| text.as_str())
                .unwrap_or_default()
                .to_string(),
            None => result.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_array_response() {
        let value = serde_json::json!([{ "generated_text": "Climate of Kyoto" }]);
        assert_eq!(
            TextGenerationClient::extract_generated_text(&value),
            "Climate of Kyoto"
        );
    }

    #[test]
    fn test_extract_from_array_without_text() {
        let value = serde_json::json!([{ "score": 0.5 }]);
        assert_eq!(TextGenerationClient::extract_generated_text(&value), "");
    }

    #[test]
    fn test_extract_from_other_shapes() {
        let value = serde_json::json!({ "warning": "truncated" });
        assert_eq!(
            TextGenerationClient::extract_generated_text(&value),
            r#"{"warning":"truncated"}"#
        );
        assert_eq!(
            TextGenerationClient::extract_generated_text(&serde_json::json!([])),
            "[]"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let parameters = GenerationParameters::from(&GenerationConfig::default());
        let body = serde_json::to_value(GenerateRequest {
            inputs: "prompt",
            parameters: &parameters,
        })
        .unwrap();

        assert_eq!(body["inputs"], "prompt");
        assert_eq!(body["parameters"]["max_new_tokens"], 4000);
        assert_eq!(body["parameters"]["do_sample"], true);
        assert_eq!(body["parameters"]["return_full_text"], false);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let client = TextGenerationClient::new(&Config::default()).unwrap();
        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
