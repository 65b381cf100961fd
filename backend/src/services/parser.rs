//! Generated text to structured sections

use shared::text::{char_len, truncate_chars};
use shared::{
    has_list_marker, mentions_building, BackgroundInfo, Language, NarrativeSection,
    NarrativeSections, WeatherRecord, MAX_BUILDING_EXAMPLES, MIN_SECTION_CHARS,
    SECTION_RULES,
};

use super::fallback::fallback_section;

const MIN_LINE_CHARS: usize = 10;
const MAX_HEADER_CHARS: usize = 150;
const MIN_CONTENT_CHARS: usize = 30;
const MIN_EXAMPLE_CHARS: usize = 15;
const MAX_EXAMPLE_CHARS: usize = 250;
const BACKFILL_CHARS: usize = 1200;

/// Split generated text into the five sections plus building examples.
///
/// Every returned section holds at least `MIN_SECTION_CHARS` characters and
/// there is always at least one building example.
pub fn parse_narrative(
    text: &str,
    region: &str,
    weather: &WeatherRecord,
    background: Option<&BackgroundInfo>,
    language: Language,
) -> NarrativeSections {
    let mut sections = NarrativeSections::default();
    let mut cursor: Option<NarrativeSection> = None;

    for line in text.split('\n').map(str::trim) {
        let len = char_len(line);
        if len < MIN_LINE_CHARS {
            continue;
        }

        if len < MAX_HEADER_CHARS {
            if let Some(section) = SECTION_RULES.classify(line) {
                cursor = Some(section);
                continue;
            }
        }

        if len > MIN_CONTENT_CHARS {
            if let Some(section) = cursor {
                let body = sections.section_mut(section);
                body.push_str(line);
                body.push('\n');
            }
        }
    }

    sections.building_examples = extract_examples(text);
    if sections.building_examples.is_empty() {
        sections.building_examples = generic_examples(region, language);
    }

    let backfill = truncate_chars(text, BACKFILL_CHARS);
    for section in NarrativeSection::ALL {
        if char_len(sections.section(section)) >= MIN_SECTION_CHARS {
            continue;
        }
        let replacement = if char_len(backfill) >= MIN_SECTION_CHARS {
            backfill.to_string()
        } else {
            fallback_section(section, region, weather, background, language)
        };
        *sections.section_mut(section) = replacement;
    }

    sections
}

fn extract_examples(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| has_list_marker(line) && mentions_building(line))
        .map(strip_markers)
        .filter(|line| (MIN_EXAMPLE_CHARS..MAX_EXAMPLE_CHARS).contains(&char_len(line)))
        .take(MAX_BUILDING_EXAMPLES)
        .map(str::to_string)
        .collect()
}

/// Drop list bullets around an example: any run of digits, `.`, `)`, `-`,
/// `•` and whitespace at the start, and `.`, `-`, `•` and whitespace at the end.
/// Trailing digits are kept so years and counts survive.
fn strip_markers(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        c.is_ascii_digit() || matches!(c, '.' | ')' | '-' | '•') || c.is_whitespace()
    })
    .trim_end_matches(|c: char| matches!(c, '.' | '-' | '•') || c.is_whitespace())
}

fn generic_examples(region: &str, language: Language) -> Vec<String> {
    match language {
        Language::Ko => vec![
            format!("{region}의 전통 궁궐 건축 - 지역 기후에 맞춘 목조 구조"),
            format!("{region}의 전통 사원 건축 - 석조 기단과 목조 상부 구조"),
            format!("{region}의 전통 민가 - 지역 재료를 활용한 주거 건축"),
        ],
        Language::En => vec![
            format!("Traditional palace architecture of {region} - timber framing suited to the local climate"),
            format!("Traditional temple buildings of {region} - masonry bases with timber superstructures"),
            format!("Traditional houses of {region} - dwellings built from local materials"),
        ],
    }
}
