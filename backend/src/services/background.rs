//! Encyclopedia background stage

use shared::{BackgroundInfo, Language};

use super::Resolution;
use crate::error::AppResult;
use crate::external::EncyclopediaClient;

/// Resolves encyclopedia background for a region title
pub struct BackgroundService {
    client: EncyclopediaClient,
}

impl BackgroundService {
    pub fn new(client: EncyclopediaClient) -> Self {
        Self { client }
    }

    /// Summary then full extract for the same title. A failure in either
    /// call abandons the whole lookup; no partial record is produced.
    pub async fn resolve(&self, region: &str, language: Language) -> Resolution<BackgroundInfo> {
        match self.fetch(region, language).await {
            Ok(info) => {
                tracing::info!(
                    title = %info.title,
                    chars = info.full_text.chars().count(),
                    "Background resolved"
                );
                Resolution::Resolved(info)
            }
            Err(e) => {
                tracing::warn!(region, error = %e, "Background lookup failed");
                Resolution::Failed
            }
        }
    }

    async fn fetch(&self, region: &str, language: Language) -> AppResult<BackgroundInfo> {
        let summary = self.client.get_summary(region, language).await?;
        let extract = self.client.get_extract(region, language).await?;

        Ok(BackgroundInfo::new(
            summary.extract,
            &extract.extract,
            extract.categories,
            summary.title.unwrap_or_else(|| region.to_string()),
            summary.description,
        ))
    }
}

impl Resolution<BackgroundInfo> {
    /// Failure becomes absence, which downstream prompting treats as its own case
    pub fn into_option(self) -> Option<BackgroundInfo> {
        match self {
            Resolution::Resolved(info) => Some(info),
            Resolution::Failed => None,
        }
    }
}
