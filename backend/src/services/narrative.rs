//! Narrative analysis stage
//!
//! Prompts the text generation model with the weather snapshot and the
//! encyclopedia background, then structures the answer into sections.
//! Any failure falls through to the deterministic templates.

use std::time::Duration;

use shared::{BackgroundInfo, Language, NarrativeSections, WeatherRecord};

use super::fallback::fallback_narrative;
use super::parser::parse_narrative;
use crate::error::{AppError, AppResult};
use crate::external::TextGenerationClient;

/// Characters of background text embedded in the prompt
pub const PROMPT_BACKGROUND_CHARS: usize = 2000;

/// Where the narrative came from
#[derive(Debug, Clone, PartialEq)]
pub enum NarrativeOutcome {
    Generated(NarrativeSections),
    Fallback(NarrativeSections),
}

impl NarrativeOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, NarrativeOutcome::Generated(_))
    }

    pub fn into_sections(self) -> NarrativeSections {
        match self {
            NarrativeOutcome::Generated(sections) | NarrativeOutcome::Fallback(sections) => {
                sections
            }
        }
    }
}

/// Produces the structured narrative for a region
pub struct NarrativeService {
    client: TextGenerationClient,
    warmup_delay: Duration,
}

impl NarrativeService {
    pub fn new(client: TextGenerationClient, warmup_delay: Duration) -> Self {
        Self {
            client,
            warmup_delay,
        }
    }

    pub async fn analyze(
        &self,
        region: &str,
        weather: &WeatherRecord,
        background: Option<&BackgroundInfo>,
        language: Language,
    ) -> NarrativeOutcome {
        let prompt = build_prompt(region, weather, background, language);

        match self.generate_with_warmup(&prompt).await {
            Ok(text) => {
                tracing::info!(chars = text.chars().count(), "Narrative generated");
                NarrativeOutcome::Generated(parse_narrative(
                    &text, region, weather, background, language,
                ))
            }
            Err(e) => {
                if e.is_provider_error() {
                    tracing::warn!(error = %e, "Text generation failed, using fallback narrative");
                } else {
                    tracing::info!(reason = %e, "Text generation skipped, using fallback narrative");
                }
                NarrativeOutcome::Fallback(fallback_narrative(
                    region, weather, background, language,
                ))
            }
        }
    }

    /// One retry, only after a warm-up answer
    async fn generate_with_warmup(&self, prompt: &str) -> AppResult<String> {
        match self.client.generate(prompt).await {
            Err(AppError::ModelWarmingUp) => {
                tracing::info!(
                    delay_secs = self.warmup_delay.as_secs(),
                    "Model is loading, retrying after delay"
                );
                tokio::time::sleep(self.warmup_delay).await;
                self.client.generate(prompt).await
            }
            other => other,
        }
    }
}

/// Analysis prompt for one region
pub fn build_prompt(
    region: &str,
    weather: &WeatherRecord,
    background: Option<&BackgroundInfo>,
    language: Language,
) -> String {
    let excerpt = background
        .map(|info| info.excerpt(PROMPT_BACKGROUND_CHARS))
        .unwrap_or(match language {
            Language::Ko => "정보 없음",
            Language::En => "No information",
        });

    match language {
        Language::Ko => korean_prompt(region, weather, excerpt),
        Language::En => english_prompt(region, weather, excerpt),
    }
}

fn korean_prompt(region: &str, w: &WeatherRecord, excerpt: &str) -> String {
    format!(
        "당신은 기후학, 지리학, 건축학을 아우르는 전문 연구자입니다. 아래 자료를 바탕으로 {region}에 대한 심층 분석 보고서를 한국어로 작성하세요.\n\n\
[현재 기상 데이터]\n\
- 기온: {temp:.1}°C (체감 {feels:.1}°C)\n\
- 최고/최저 기온: {max:.1}°C / {min:.1}°C (일교차 {range:.1}°C)\n\
- 습도: {humidity}%\n\
- 기압: {pressure} hPa\n\
- 풍속: {wind:.1} km/h, 풍향: {direction}°\n\
- 강수량: {precip:.1} mm\n\
- 구름량: {cloud}%\n\
- 날씨: {description}\n\
- 일출: {sunrise}, 일몰: {sunset}\n\n\
[지역 배경 정보]\n{excerpt}\n\n\
[작성 지침]\n\
다음 다섯 섹션을 각각 400자 이상으로 작성하고, 각 섹션은 제목 줄로 시작하세요.\n\
1. 기후 특성: 쾨펜 기후 구분, 기온과 강수의 계절 변화, 영향을 주는 기단을 수치와 함께 설명\n\
2. 자연 환경: 지형, 토양, 식생, 지질이 기후와 맺는 관계\n\
3. 전통 건축 양식: 주요 재료(목재, 석재 등)와 구조 체계, 그 물리적 성질\n\
4. 기후 적응 원리: 환기, 단열, 습도 조절의 과학적 원리를 공식이나 수치로 설명\n\
5. 쉽게 이해하기: 앞에서 쓴 전문 용어를 일반인이 이해할 수 있게 풀어 설명\n\n\
마지막으로 이 지역의 실제 건축물 사례를 7개 이상, 번호 목록(1. 2. ...)으로 건물 이름과 특징을 함께 적으세요.\n",
        temp = w.temperature,
        feels = w.apparent_temperature,
        max = w.temp_max,
        min = w.temp_min,
        range = w.daily_range(),
        humidity = w.humidity,
        pressure = w.pressure,
        wind = w.wind_speed,
        direction = w.wind_direction,
        precip = w.precipitation,
        cloud = w.cloud_cover,
        description = w.weather_description,
        sunrise = w.sunrise,
        sunset = w.sunset,
    )
}

fn english_prompt(region: &str, w: &WeatherRecord, excerpt: &str) -> String {
    format!(
        "You are a researcher in climatology, geography and architecture. Using the data below, write an in-depth analytical report about {region} in English.\n\n\
[Current weather]\n\
- Temperature: {temp:.1}°C (feels like {feels:.1}°C)\n\
- High/Low: {max:.1}°C / {min:.1}°C (daily range {range:.1}°C)\n\
- Humidity: {humidity}%\n\
- Pressure: {pressure} hPa\n\
- Wind: {wind:.1} km/h from {direction}°\n\
- Precipitation: {precip:.1} mm\n\
- Cloud cover: {cloud}%\n\
- Conditions: {description}\n\
- Sunrise: {sunrise}, Sunset: {sunset}\n\n\
[Regional background]\n{excerpt}\n\n\
[Instructions]\n\
Write the following five sections, each at least 400 characters long and each starting with a title line.\n\
1. Climate characteristics: Köppen classification, seasonal temperature and precipitation, dominant air masses, with figures\n\
2. Natural environment: how topography, soil, vegetation and geology relate to the climate\n\
3. Traditional architecture: main materials (timber, stone, etc.), structural systems and their physical properties\n\
4. Climate adaptation principles: the science of ventilation, insulation and humidity control, with formulas or figures\n\
5. Simple explanation: restate the technical terms above so a general reader can follow\n\n\
Finally list at least 7 real buildings from this region as a numbered list (1. 2. ...), giving each building's name and features.\n",
        temp = w.temperature,
        feels = w.apparent_temperature,
        max = w.temp_max,
        min = w.temp_min,
        range = w.daily_range(),
        humidity = w.humidity,
        pressure = w.pressure,
        wind = w.wind_speed,
        direction = w.wind_direction,
        precip = w.precipitation,
        cloud = w.cloud_cover,
        description = w.weather_description,
        sunrise = w.sunrise,
        sunset = w.sunset,
    )
}
