//! Narrative analysis models

use serde::{Deserialize, Serialize};

/// Minimum characters every narrative section must hold
pub const MIN_SECTION_CHARS: usize = 200;

/// Maximum building examples kept
pub const MAX_BUILDING_EXAMPLES: usize = 10;

/// The five fixed narrative topics, in document order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSection {
    Climate,
    NaturalEnvironment,
    TraditionalArchitecture,
    ClimateAdaptation,
    SimpleExplanation,
}

impl NarrativeSection {
    pub const ALL: [NarrativeSection; 5] = [
        NarrativeSection::Climate,
        NarrativeSection::NaturalEnvironment,
        NarrativeSection::TraditionalArchitecture,
        NarrativeSection::ClimateAdaptation,
        NarrativeSection::SimpleExplanation,
    ];

    /// Key used by the web front end
    pub fn key(&self) -> &'static str {
        match self {
            NarrativeSection::Climate => "climate",
            NarrativeSection::NaturalEnvironment => "environment",
            NarrativeSection::TraditionalArchitecture => "architecture",
            NarrativeSection::ClimateAdaptation => "adaptation",
            NarrativeSection::SimpleExplanation => "simple_explanation",
        }
    }
}

/// Structured narrative for a region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NarrativeSections {
    pub climate: String,
    #[serde(rename = "environment")]
    pub natural_environment: String,
    #[serde(rename = "architecture")]
    pub traditional_architecture: String,
    #[serde(rename = "adaptation")]
    pub climate_adaptation: String,
    pub simple_explanation: String,
    pub building_examples: Vec<String>,
}

impl NarrativeSections {
    pub fn section(&self, section: NarrativeSection) -> &str {
        match section {
            NarrativeSection::Climate => &self.climate,
            NarrativeSection::NaturalEnvironment => &self.natural_environment,
            NarrativeSection::TraditionalArchitecture => &self.traditional_architecture,
            NarrativeSection::ClimateAdaptation => &self.climate_adaptation,
            NarrativeSection::SimpleExplanation => &self.simple_explanation,
        }
    }

    pub fn section_mut(&mut self, section: NarrativeSection) -> &mut String {
        match section {
            NarrativeSection::Climate => &mut self.climate,
            NarrativeSection::NaturalEnvironment => &mut self.natural_environment,
            NarrativeSection::TraditionalArchitecture => &mut self.traditional_architecture,
            NarrativeSection::ClimateAdaptation => &mut self.climate_adaptation,
            NarrativeSection::SimpleExplanation => &mut self.simple_explanation,
        }
    }
}
