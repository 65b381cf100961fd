//! Route definitions for the Region Insight service

use axum::{routing::post, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/region-info", post(handlers::get_region_info))
}
