//! Error handling for the Region Insight service
//!
//! Provider errors never reach the HTTP layer: each pipeline stage converts
//! them into its own fallback value. Only request-level faults are rendered
//! as responses, in Korean and English.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// User-facing message for a failed region request
pub const REQUEST_FAILED_MESSAGE: &str = "정보를 가져오는 중 오류가 발생했습니다.";

/// English counterpart of [`REQUEST_FAILED_MESSAGE`]
pub const REQUEST_FAILED_MESSAGE_EN: &str =
    "An error occurred while fetching region information.";

/// Region name echoed when a request carries none
pub const UNKNOWN_REGION: &str = "Unknown";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // External service errors
    #[error("Weather provider error: {0}")]
    WeatherProvider(String),

    #[error("Encyclopedia provider error: {0}")]
    Encyclopedia(String),

    #[error("Image catalog error: {0}")]
    ImageCatalog(String),

    #[error("Text generation error: {0}")]
    Generation(String),

    #[error("Text generation model is warming up")]
    ModelWarmingUp,

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Request errors
    #[error("{message}")]
    InvalidRequest { region: String, message: String },

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the error came from a network-level provider failure
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            AppError::WeatherProvider(_)
                | AppError::Encyclopedia(_)
                | AppError::ImageCatalog(_)
                | AppError::Generation(_)
                | AppError::ModelWarmingUp
        )
    }
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub message_en: String,
    pub region: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Provider errors are absorbed by the pipeline stages; anything that
        // reaches the HTTP layer is a request-level fault
        let region = match &self {
            AppError::InvalidRequest { region, .. } => region.clone(),
            _ => UNKNOWN_REGION.to_string(),
        };
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let body = ErrorResponse {
            error: self.to_string(),
            message: REQUEST_FAILED_MESSAGE.to_string(),
            message_en: REQUEST_FAILED_MESSAGE_EN.to_string(),
            region,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
