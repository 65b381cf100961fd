//! Media catalog client
//!
//! Full-text search over the file namespace of Wikimedia Commons, plus the
//! per-file lookup that resolves a catalog title to its direct media URL.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// MediaWiki namespace holding media files
const FILE_NAMESPACE: &str = "6";

/// Media catalog client
#[derive(Clone)]
pub struct ImageCatalogClient {
    client: Client,
    api_endpoint: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct ImageInfoResponse {
    #[serde(default)]
    query: Option<ImageInfoQuery>,
}

#[derive(Debug, Deserialize)]
struct ImageInfoQuery {
    #[serde(default)]
    pages: HashMap<String, ImageInfoPage>,
}

#[derive(Debug, Deserialize)]
struct ImageInfoPage {
    #[serde(default)]
    imageinfo: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    url: Option<String>,
}

impl ImageCatalogClient {
    /// Create a new ImageCatalogClient from the service configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.image_catalog.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Configuration(format!("Image catalog HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_endpoint: config.image_catalog.api_endpoint.clone(),
        })
    }

    /// Search file titles matching `query`, at most `limit` hits
    pub async fn search_files(&self, query: &str, limit: usize) -> AppResult<Vec<String>> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(&self.api_endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", query),
                ("srnamespace", FILE_NAMESPACE),
                ("srlimit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ImageCatalog(format!("Search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ImageCatalog(format!(
                "Search API returned {} for {}",
                status, query
            )));
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::ImageCatalog(format!("Failed to parse search: {}", e)))?;

        Ok(data
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default())
    }

    /// Resolve a catalog file title to its direct media URL
    ///
    /// Returns `Ok(None)` when the catalog has no media URL for the title.
    pub async fn resolve_file_url(&self, file_title: &str) -> AppResult<Option<String>> {
        let response = self
            .client
            .get(&self.api_endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("titles", file_title),
                ("prop", "imageinfo"),
                ("iiprop", "url"),
            ])
            .send()
            .await
            .map_err(|e| AppError::ImageCatalog(format!("Image info request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ImageCatalog(format!(
                "Image info API returned {} for {}",
                status, file_title
            )));
        }

        let data: ImageInfoResponse = response
            .json()
            .await
            .map_err(|e| AppError::ImageCatalog(format!("Failed to parse image info: {}", e)))?;

        Ok(data.query.and_then(|q| {
            q.pages
                .into_values()
                .find_map(|page| page.imageinfo.into_iter().next().and_then(|info| info.url))
        }))
    }
}
