//! Common types used across the service

use serde::{Deserialize, Serialize};

/// Geographic coordinates as supplied by the client
///
/// No range validation is applied; values are forwarded to providers as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Supported content languages
///
/// Korean is selected only by the exact code `ko`; every other code
/// resolves to English.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// Default language code when a request omits one
    pub const DEFAULT_CODE: &'static str = "ko";

    pub fn from_code(code: &str) -> Self {
        match code {
            "ko" => Language::Ko,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// Label used wherever a value could not be determined
    pub fn unknown_label(&self) -> &'static str {
        match self {
            Language::Ko => "알 수 없음",
            Language::En => "Unknown",
        }
    }
}
