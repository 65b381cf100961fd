//! Region report pipeline services
//!
//! Each stage resolves one part of the report against its provider and
//! owns its recovery policy:
//! - weather: zeroed record
//! - background: absent
//! - narrative: deterministic templates
//! - images: whatever subset of queries succeeded

pub mod background;
pub mod fallback;
pub mod images;
pub mod narrative;
pub mod parser;
pub mod report;
pub mod weather;

pub use background::BackgroundService;
pub use images::ImageService;
pub use narrative::{NarrativeOutcome, NarrativeService};
pub use report::{RegionReportService, RegionRequest};
pub use weather::WeatherService;

/// Outcome of a stage against its primary source
///
/// Recovery from `Failed` is stage-specific and lives next to each stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Resolved(T),
    Failed,
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}
