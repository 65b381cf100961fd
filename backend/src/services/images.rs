//! Representative image stage

use shared::{
    classify_image_title, dedupe_images, display_title, is_valid_image_url, ImageItem, Language,
    IMAGE_SOURCE, MAX_IMAGES,
};

use crate::external::ImageCatalogClient;

/// Queries issued per request
pub const QUERIES_ISSUED: usize = 5;

/// Search hits considered per query
pub const HITS_PER_QUERY: usize = 4;

const KO_QUERY_SUFFIXES: [&str; 7] = [
    "건축",
    "전통 건축물",
    "경관",
    "풍경",
    "자연환경",
    "도시",
    "랜드마크",
];

const EN_QUERY_SUFFIXES: [&str; 7] = [
    "architecture",
    "traditional building",
    "landscape",
    "scenery",
    "nature",
    "cityscape",
    "landmark",
];

/// Catalog search queries for a region, in issue order
pub fn search_queries(region: &str, language: Language) -> Vec<String> {
    let suffixes = match language {
        Language::Ko => &KO_QUERY_SUFFIXES,
        Language::En => &EN_QUERY_SUFFIXES,
    };
    suffixes
        .iter()
        .map(|suffix| format!("{} {}", region, suffix))
        .collect()
}

/// Collects categorized images from the media catalog
pub struct ImageService {
    client: ImageCatalogClient,
}

impl ImageService {
    pub fn new(client: ImageCatalogClient) -> Self {
        Self { client }
    }

    /// Unique images for a region, at most `MAX_IMAGES`
    ///
    /// A failed query or lookup only loses its own contribution.
    pub async fn collect(&self, region: &str, language: Language) -> Vec<ImageItem> {
        let mut images = Vec::new();

        'queries: for query in search_queries(region, language)
            .iter()
            .take(QUERIES_ISSUED)
        {
            let titles = match self.client.search_files(query, HITS_PER_QUERY * 2).await {
                Ok(titles) => titles,
                Err(e) => {
                    tracing::warn!(query = %query, error = %e, "Image search failed");
                    continue;
                }
            };

            for title in titles.iter().take(HITS_PER_QUERY) {
                if images.len() >= MAX_IMAGES {
                    break 'queries;
                }
                match self.client.resolve_file_url(title).await {
                    Ok(Some(url)) if is_valid_image_url(&url) => images.push(ImageItem {
                        url,
                        title: display_title(title),
                        source: IMAGE_SOURCE.to_string(),
                        category: classify_image_title(title),
                    }),
                    Ok(_) => tracing::debug!(title = %title, "Skipping non-image file"),
                    Err(e) => tracing::debug!(title = %title, error = %e, "Image lookup failed"),
                }
            }

            if images.len() >= MAX_IMAGES {
                break;
            }
        }

        let images = dedupe_images(images);
        tracing::info!(count = images.len(), "Images collected");
        images
    }
}
