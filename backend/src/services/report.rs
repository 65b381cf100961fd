//! Region report orchestration
//!
//! Weather, background and images are independent and resolve concurrently.
//! The narrative needs the first two, so it runs after them. Assembly is a
//! pure function of the stage results and a timestamp.

use chrono::NaiveDateTime;
use shared::{
    BackgroundInfo, Coordinates, DataSources, ImageCollections, ImageItem, Language,
    RegionReport, WeatherRecord, IMAGE_SOURCE,
};

use super::{
    BackgroundService, ImageService, NarrativeOutcome, NarrativeService, WeatherService,
};

/// Timestamp layout used in reports
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A validated region request
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRequest {
    pub region: String,
    pub coordinates: Coordinates,
    /// Raw language code as sent; echoed back unchanged
    pub language_code: String,
}

impl RegionRequest {
    pub fn language(&self) -> Language {
        Language::from_code(&self.language_code)
    }
}

/// Everything the pipeline stages produced for one request
#[derive(Debug, Clone)]
pub struct StageResults {
    pub weather: WeatherRecord,
    pub weather_resolved: bool,
    pub background: Option<BackgroundInfo>,
    pub narrative: NarrativeOutcome,
    pub images: Vec<ImageItem>,
}

/// Runs every stage for a region and assembles the report
pub struct RegionReportService {
    weather: WeatherService,
    background: BackgroundService,
    images: ImageService,
    narrative: NarrativeService,
}

impl RegionReportService {
    pub fn new(
        weather: WeatherService,
        background: BackgroundService,
        images: ImageService,
        narrative: NarrativeService,
    ) -> Self {
        Self {
            weather,
            background,
            images,
            narrative,
        }
    }

    /// Produce a report; every stage failure is absorbed by its fallback
    pub async fn generate(&self, request: &RegionRequest) -> RegionReport {
        let results = self.run_stages(request).await;
        let generated_at = chrono::Local::now().naive_local();
        assemble_report(request, results, generated_at)
    }

    async fn run_stages(&self, request: &RegionRequest) -> StageResults {
        let language = request.language();
        let Coordinates { lat, lng } = request.coordinates;

        let (weather, background, images) = tokio::join!(
            self.weather.resolve(lat, lng, language),
            self.background.resolve(&request.region, language),
            self.images.collect(&request.region, language),
        );

        let weather_resolved = weather.is_resolved();
        let weather = weather.or_unavailable(language);
        let background = background.into_option();

        let narrative = self
            .narrative
            .analyze(&request.region, &weather, background.as_ref(), language)
            .await;

        StageResults {
            weather,
            weather_resolved,
            background,
            narrative,
            images,
        }
    }
}

/// Combine stage results into the final report
pub fn assemble_report(
    request: &RegionRequest,
    results: StageResults,
    generated_at: NaiveDateTime,
) -> RegionReport {
    let data_sources = DataSources {
        wikipedia: results.background.is_some(),
        weather_api: results.weather_resolved,
        ai_analysis: true,
        ai_generated: results.narrative.is_generated(),
        image_sources: vec![IMAGE_SOURCE.to_string()],
    };

    let images = ImageCollections::from_images(results.images);
    let image_count = images.counts();

    RegionReport {
        region: request.region.clone(),
        coordinates: request.coordinates,
        current_weather: results.weather,
        information: results.narrative.into_sections(),
        has_images: image_count.total > 0,
        image_count,
        images,
        data_sources,
        generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
        wiki_summary: results.background.map(|info| info.summary),
        language: request.language_code.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{ImageCategory, NarrativeSections};

    fn request() -> RegionRequest {
        RegionRequest {
            region: "Kyoto".to_string(),
            coordinates: Coordinates::new(35.0116, 135.7681),
            language_code: "fr".to_string(),
        }
    }

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn image(url: &str, category: ImageCategory) -> ImageItem {
        ImageItem {
            url: url.to_string(),
            title: url.to_string(),
            source: IMAGE_SOURCE.to_string(),
            category,
        }
    }

    fn results() -> StageResults {
        StageResults {
            weather: WeatherRecord::unavailable(Language::En),
            weather_resolved: false,
            background: None,
            narrative: NarrativeOutcome::Fallback(NarrativeSections::default()),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(request().language(), Language::En);
    }

    #[test]
    fn test_assembly_without_sources() {
        let report = assemble_report(&request(), results(), timestamp());

        assert_eq!(report.region, "Kyoto");
        assert_eq!(report.language, "fr");
        assert_eq!(report.generated_at, "2026-05-01 09:30:00");
        assert!(!report.has_images);
        assert_eq!(report.image_count.total, 0);
        assert!(report.wiki_summary.is_none());
        assert!(!report.data_sources.wikipedia);
        assert!(!report.data_sources.weather_api);
        assert!(report.data_sources.ai_analysis);
        assert!(!report.data_sources.ai_generated);
        assert_eq!(report.data_sources.image_sources, vec!["Wikimedia Commons"]);
    }

    #[test]
    fn test_assembly_with_sources() {
        let background = BackgroundInfo::new(
            "Kyoto is a city in Japan.".to_string(),
            "Kyoto was the imperial capital.",
            vec!["Cities in Japan".to_string()],
            "Kyoto".to_string(),
            "City in Japan".to_string(),
        );
        let stage = StageResults {
            weather_resolved: true,
            background: Some(background),
            narrative: NarrativeOutcome::Generated(NarrativeSections::default()),
            images: vec![
                image("a.jpg", ImageCategory::Architecture),
                image("b.jpg", ImageCategory::General),
            ],
            ..results()
        };

        let report = assemble_report(&request(), stage, timestamp());

        assert!(report.has_images);
        assert_eq!(report.image_count.total, 2);
        assert_eq!(report.image_count.architecture, 1);
        assert_eq!(report.image_count.general, 1);
        assert_eq!(report.images.architecture.len(), 1);
        assert_eq!(report.wiki_summary.as_deref(), Some("Kyoto is a city in Japan."));
        assert!(report.data_sources.wikipedia);
        assert!(report.data_sources.weather_api);
        assert!(report.data_sources.ai_generated);
    }
}
