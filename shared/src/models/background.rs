//! Encyclopedia background models

use serde::{Deserialize, Serialize};

use crate::text::truncate_chars;

/// Maximum characters kept from the full-page extract
pub const MAX_FULL_TEXT_CHARS: usize = 5000;

/// Maximum category labels kept
pub const MAX_CATEGORIES: usize = 15;

/// Encyclopedia background for a region
///
/// Carried as `Option<BackgroundInfo>`: absence means the lookup failed,
/// which is a distinct outcome from a page with empty text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackgroundInfo {
    pub summary: String,
    pub full_text: String,
    pub categories: Vec<String>,
    pub title: String,
    pub description: String,
}

impl BackgroundInfo {
    /// Build a record, enforcing the excerpt and category bounds
    pub fn new(
        summary: String,
        full_text: &str,
        categories: impl IntoIterator<Item = String>,
        title: String,
        description: String,
    ) -> Self {
        Self {
            summary,
            full_text: truncate_chars(full_text, MAX_FULL_TEXT_CHARS).to_string(),
            categories: categories.into_iter().take(MAX_CATEGORIES).collect(),
            title,
            description,
        }
    }

    /// Leading excerpt of the full text
    pub fn excerpt(&self, max_chars: usize) -> &str {
        truncate_chars(&self.full_text, max_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::char_len;

    #[test]
    fn test_bounds_applied() {
        let text = "가".repeat(6000);
        let categories = (0..40).map(|i| format!("Category:{}", i));
        let info = BackgroundInfo::new(
            "summary".to_string(),
            &text,
            categories,
            "Seoul".to_string(),
            String::new(),
        );

        assert_eq!(char_len(&info.full_text), MAX_FULL_TEXT_CHARS);
        assert_eq!(info.categories.len(), MAX_CATEGORIES);
        assert_eq!(info.categories[0], "Category:0");
        assert_eq!(char_len(info.excerpt(2000)), 2000);
    }

    #[test]
    fn test_short_text_kept_whole() {
        let info = BackgroundInfo::new(
            String::new(),
            "short",
            Vec::new(),
            "t".to_string(),
            String::new(),
        );
        assert_eq!(info.full_text, "short");
        assert!(info.categories.is_empty());
    }
}
