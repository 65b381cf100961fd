//! Catalog image models

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::truncate_chars;

/// Maximum images in one report
pub const MAX_IMAGES: usize = 15;

/// Maximum characters in an image display title
pub const MAX_TITLE_CHARS: usize = 80;

/// Extensions accepted as directly displayable images
pub const VALID_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

/// Source label attached to every catalog image
pub const IMAGE_SOURCE: &str = "Wikimedia Commons";

/// Image category, derived from the catalog title
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Architecture,
    Environment,
    General,
}

/// A representative image for the region, unique by `url`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageItem {
    pub url: String,
    pub title: String,
    pub source: String,
    #[serde(rename = "type")]
    pub category: ImageCategory,
}

/// Whether `url` ends in an accepted image extension (case-insensitive)
pub fn is_valid_image_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let lowered = url.to_lowercase();
    VALID_IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
}

/// Display title from a catalog title: `File:` prefix and image extension
/// removed, capped at [`MAX_TITLE_CHARS`]
pub fn display_title(catalog_title: &str) -> String {
    let name = catalog_title.strip_prefix("File:").unwrap_or(catalog_title);
    let lowered = name.to_lowercase();
    let stem = VALID_IMAGE_EXTENSIONS
        .iter()
        .find(|ext| lowered.ends_with(*ext))
        .map(|ext| &name[..name.len() - ext.len()])
        .unwrap_or(name);
    truncate_chars(stem, MAX_TITLE_CHARS).to_string()
}

/// Drop repeated URLs (first occurrence wins) and cap at [`MAX_IMAGES`]
pub fn dedupe_images(images: Vec<ImageItem>) -> Vec<ImageItem> {
    let mut seen = HashSet::new();
    images
        .into_iter()
        .filter(|img| seen.insert(img.url.clone()))
        .take(MAX_IMAGES)
        .collect()
}
