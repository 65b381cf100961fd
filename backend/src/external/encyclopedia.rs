//! Encyclopedia API client
//!
//! Reads page summaries from the Wikipedia REST API and full plain-text
//! extracts with categories from the MediaWiki action API.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use shared::Language;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Encyclopedia API client
#[derive(Clone)]
pub struct EncyclopediaClient {
    client: Client,
    base_url_template: String,
}

/// REST page summary
#[derive(Debug, Clone, Deserialize)]
pub struct PageSummary {
    pub title: Option<String>,
    #[serde(default)]
    pub extract: String,
    #[serde(default)]
    pub description: String,
}

/// Full page extract with categories
#[derive(Debug, Clone)]
pub struct PageExtract {
    pub extract: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: QueryPages,
}

#[derive(Debug, Deserialize)]
struct QueryPages {
    pages: HashMap<String, QueryPage>,
}

#[derive(Debug, Deserialize)]
struct QueryPage {
    #[serde(default)]
    extract: String,
    #[serde(default)]
    categories: Vec<QueryCategory>,
}

#[derive(Debug, Deserialize)]
struct QueryCategory {
    #[serde(default)]
    title: String,
}

impl EncyclopediaClient {
    /// Create a new EncyclopediaClient from the service configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.encyclopedia.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Configuration(format!("Encyclopedia HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url_template: config.encyclopedia.base_url.clone(),
        })
    }

    /// Site base URL for the language edition
    fn base_url(&self, language: Language) -> AppResult<Url> {
        let raw = self.base_url_template.replace("{lang}", language.code());
        Url::parse(&raw).map_err(|e| AppError::Configuration(format!("Encyclopedia URL: {}", e)))
    }

    /// Fetch the page summary for `title`
    pub async fn get_summary(&self, title: &str, language: Language) -> AppResult<PageSummary> {
        let mut url = self.base_url(language)?;
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("Encyclopedia URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["api", "rest_v1", "page", "summary", title]);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Encyclopedia(format!("Summary request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Encyclopedia(format!(
                "Summary API returned {} for {}",
                status, title
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Encyclopedia(format!("Failed to parse summary: {}", e)))
    }

    /// Fetch the full plain-text extract and categories for `title`
    pub async fn get_extract(&self, title: &str, language: Language) -> AppResult<PageExtract> {
        let mut url = self.base_url(language)?;
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("Encyclopedia URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["w", "api.php"]);

        let response = self
            .client
            .get(url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("titles", title),
                ("prop", "extracts|categories"),
                ("explaintext", "1"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Encyclopedia(format!("Extract request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Encyclopedia(format!(
                "Extract API returned {} for {}",
                status, title
            )));
        }

        let data: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::Encyclopedia(format!("Failed to parse extract: {}", e)))?;

        let page = data
            .query
            .pages
            .into_values()
            .next()
            .ok_or_else(|| AppError::Encyclopedia(format!("No page returned for {}", title)))?;

        Ok(PageExtract {
            extract: page.extract,
            categories: page.categories.into_iter().map(|c| c.title).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_edition_substitution() {
        let client = EncyclopediaClient::new(&Config::default()).unwrap();
        assert_eq!(
            client.base_url(Language::Ko).unwrap().as_str(),
            "https://ko.wikipedia.org/"
        );
        assert_eq!(
            client.base_url(Language::En).unwrap().as_str(),
            "https://en.wikipedia.org/"
        );
    }

    #[test]
    fn test_query_page_parsing() {
        let data: QueryResponse = serde_json::from_value(serde_json::json!({
            "query": {
                "pages": {
                    "12345": {
                        "title": "Kyoto",
                        "extract": "Kyoto is a city.",
                        "categories": [{ "ns": 14, "title": "Category:Cities in Japan" }]
                    }
                }
            }
        }))
        .unwrap();

        let page = data.query.pages.into_values().next().unwrap();
        assert_eq!(page.extract, "Kyoto is a city.");
        assert_eq!(page.categories[0].title, "Category:Cities in Japan");
    }
}
