//! Region report, the composite response returned for one request

use serde::{Deserialize, Serialize};

use super::{ImageCategory, ImageItem, NarrativeSections, WeatherRecord};
use crate::types::Coordinates;

/// Image list plus its category subsets
///
/// The subsets are filtered copies of `all`, never stored independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageCollections {
    pub all: Vec<ImageItem>,
    pub architecture: Vec<ImageItem>,
    pub environment: Vec<ImageItem>,
}

impl ImageCollections {
    pub fn from_images(all: Vec<ImageItem>) -> Self {
        let subset = |category: ImageCategory| -> Vec<ImageItem> {
            all.iter()
                .filter(|img| img.category == category)
                .cloned()
                .collect()
        };
        let architecture = subset(ImageCategory::Architecture);
        let environment = subset(ImageCategory::Environment);
        Self {
            all,
            architecture,
            environment,
        }
    }

    pub fn counts(&self) -> ImageCounts {
        let general = self
            .all
            .iter()
            .filter(|img| img.category == ImageCategory::General)
            .count();
        ImageCounts {
            total: self.all.len(),
            architecture: self.architecture.len(),
            environment: self.environment.len(),
            general,
        }
    }
}

/// Per-category image counts; `total` is the sum of the three categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageCounts {
    pub total: usize,
    pub architecture: usize,
    pub environment: usize,
    pub general: usize,
}

/// Provenance flags for each sub-resolution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataSources {
    /// Encyclopedia background was found
    pub wikipedia: bool,
    /// Weather came from the provider rather than the zeroed record
    pub weather_api: bool,
    /// A narrative is present (always true)
    pub ai_analysis: bool,
    /// The narrative came from the generative provider, not the templates
    pub ai_generated: bool,
    pub image_sources: Vec<String>,
}

/// Top-level composite result for one region request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionReport {
    pub region: String,
    pub coordinates: Coordinates,
    pub current_weather: WeatherRecord,
    pub information: NarrativeSections,
    pub images: ImageCollections,
    pub has_images: bool,
    pub image_count: ImageCounts,
    pub data_sources: DataSources,
    pub generated_at: String,
    pub wiki_summary: Option<String>,
    pub language: String,
}
