//! Region Insight - Backend Library
//!
//! Builds a composite report for a named region: current weather,
//! encyclopedia background, a generated climate and architecture narrative,
//! and categorized catalog images.

use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use error::AppResult;
use external::{EncyclopediaClient, ImageCatalogClient, TextGenerationClient, WeatherClient};
use services::{
    BackgroundService, ImageService, NarrativeService, RegionReportService, WeatherService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub reports: Arc<RegionReportService>,
}

impl AppState {
    /// Build every provider client once; they are reused for all requests
    pub fn new(config: Config) -> AppResult<Self> {
        let reports = RegionReportService::new(
            WeatherService::new(WeatherClient::new(&config)?),
            BackgroundService::new(EncyclopediaClient::new(&config)?),
            ImageService::new(ImageCatalogClient::new(&config)?),
            NarrativeService::new(
                TextGenerationClient::new(&config)?,
                Duration::from_secs(config.generation.warmup_delay_secs),
            ),
        );

        Ok(Self {
            config: Arc::new(config),
            reports: Arc::new(reports),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Region Insight API - POST /api/region-info"
}
