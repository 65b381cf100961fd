//! Keyword rule tables
//!
//! Classification of free text (generated narrative lines, catalog image
//! titles) is driven by ordered `(category, keywords)` tables. Rules are
//! evaluated in order and the first rule with a matching keyword wins.
//! Matching is a case-insensitive substring test.

use crate::models::{ImageCategory, NarrativeSection};

/// A single `(category, keywords)` entry
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<C: 'static> {
    pub category: C,
    pub keywords: &'static [&'static str],
}

impl<C: Copy> KeywordRule<C> {
    /// Whether `lowered` (already lowercased) contains any keyword
    pub fn matches_lowered(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|kw| lowered.contains(&kw.to_lowercase()))
    }
}

/// Ordered rule table; first matching rule wins
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<C: 'static> {
    pub rules: &'static [KeywordRule<C>],
}

impl<C: Copy> RuleTable<C> {
    pub const fn new(rules: &'static [KeywordRule<C>]) -> Self {
        Self { rules }
    }

    /// Category of the first rule matching `text`, if any
    pub fn classify(&self, text: &str) -> Option<C> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches_lowered(&lowered))
            .map(|rule| rule.category)
    }

    /// Like [`classify`](Self::classify) with a fallback category
    pub fn classify_or(&self, text: &str, default: C) -> C {
        self.classify(text).unwrap_or(default)
    }
}

/// Section header keywords for generated narrative text (Korean and English)
pub const SECTION_RULES: RuleTable<NarrativeSection> = RuleTable::new(&[
    KeywordRule {
        category: NarrativeSection::Climate,
        keywords: &[
            "기후", "Climate", "쾨펜", "Köppen", "기온", "Temperature", "강수",
            "Precipitation", "기단",
        ],
    },
    KeywordRule {
        category: NarrativeSection::NaturalEnvironment,
        keywords: &[
            "환경", "Environment", "지형", "Topography", "토양", "Soil", "식생",
            "Vegetation", "지질",
        ],
    },
    KeywordRule {
        category: NarrativeSection::TraditionalArchitecture,
        keywords: &[
            "건축", "Architecture", "양식", "Style", "구조", "Structure", "재료",
            "Material", "목재", "석재",
        ],
    },
    KeywordRule {
        category: NarrativeSection::ClimateAdaptation,
        keywords: &[
            "적응", "Adaptation", "조절", "Control", "원리", "Principle", "환기",
            "Ventilation", "단열",
        ],
    },
    KeywordRule {
        category: NarrativeSection::SimpleExplanation,
        keywords: &["설명", "Explanation", "쉽게", "Simple", "이해", "Understand"],
    },
]);

/// Image categories by catalog title; anything unmatched is general
pub const IMAGE_RULES: RuleTable<ImageCategory> = RuleTable::new(&[
    KeywordRule {
        category: ImageCategory::Architecture,
        keywords: &[
            "building", "architecture", "temple", "palace", "건축", "궁", "사원",
        ],
    },
    KeywordRule {
        category: ImageCategory::Environment,
        keywords: &["landscape", "scenery", "nature", "경관", "풍경", "자연"],
    },
]);

/// Keywords marking a line as a concrete building example
pub const BUILDING_KEYWORDS: &[&str] = &[
    "palace", "temple", "house", "building", "궁", "사원", "집", "건물", "전각",
];

/// List markers that introduce an example line
pub const LIST_MARKERS: &[&str] = &["1.", "2.", "3.", "4.", "5.", "6.", "7.", "-", "•"];

/// Classify an image by its catalog title
pub fn classify_image_title(title: &str) -> ImageCategory {
    IMAGE_RULES.classify_or(title, ImageCategory::General)
}

/// Whether a line of text mentions a building keyword
pub fn mentions_building(line: &str) -> bool {
    let lowered = line.to_lowercase();
    BUILDING_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Whether a line of text carries a list marker anywhere
pub fn has_list_marker(line: &str) -> bool {
    LIST_MARKERS.iter().any(|marker| line.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_rules_first_match_wins() {
        // "기후" (climate) and "건축" (architecture) both appear; climate is earlier
        assert_eq!(
            SECTION_RULES.classify("기후와 건축의 관계"),
            Some(NarrativeSection::Climate)
        );
        assert_eq!(
            SECTION_RULES.classify("3. Traditional Architecture"),
            Some(NarrativeSection::TraditionalArchitecture)
        );
    }

    #[test]
    fn test_section_rules_case_insensitive() {
        assert_eq!(
            SECTION_RULES.classify("**1. CLIMATE ANALYSIS**"),
            Some(NarrativeSection::Climate)
        );
        assert_eq!(
            SECTION_RULES.classify("köppen zones"),
            Some(NarrativeSection::Climate)
        );
        assert_eq!(
            SECTION_RULES.classify("5. simple explanation"),
            Some(NarrativeSection::SimpleExplanation)
        );
    }

    #[test]
    fn test_section_rules_no_match() {
        assert_eq!(SECTION_RULES.classify("Lorem ipsum dolor sit amet"), None);
    }

    #[test]
    fn test_image_classification_priority() {
        assert_eq!(
            classify_image_title("File:Temple landscape at dusk.jpg"),
            ImageCategory::Architecture
        );
        assert_eq!(
            classify_image_title("File:Mountain Scenery.png"),
            ImageCategory::Environment
        );
        assert_eq!(
            classify_image_title("File:경복궁 근정전.jpg"),
            ImageCategory::Architecture
        );
        assert_eq!(
            classify_image_title("File:Street market 2019.jpg"),
            ImageCategory::General
        );
    }

    #[test]
    fn test_building_example_markers() {
        assert!(has_list_marker("1. Kinkaku-ji temple"));
        assert!(has_list_marker("• 경복궁"));
        assert!(!has_list_marker("Kinkaku-ji temple"));
        assert!(mentions_building("Traditional HOUSE forms"));
        assert!(mentions_building("조선 시대 건물"));
        assert!(!mentions_building("Rainfall averages"));
    }
}
