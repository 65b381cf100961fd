//! HTTP handler for region reports

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use shared::{Coordinates, Language, RegionReport};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{AppError, AppResult, UNKNOWN_REGION};
use crate::services::RegionRequest;
use crate::AppState;

/// Build a full report for one region
pub async fn get_region_info(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<RegionReport>> {
    let Json(body) = payload.map_err(|e| AppError::InvalidRequest {
        region: UNKNOWN_REGION.to_string(),
        message: e.body_text(),
    })?;
    let request = parse_region_request(&body)?;

    let span = tracing::info_span!(
        "region_info",
        request_id = %Uuid::new_v4(),
        region = %request.region,
        language = %request.language_code,
    );

    let report = async {
        tracing::info!(
            lat = request.coordinates.lat,
            lng = request.coordinates.lng,
            "Region report requested"
        );
        let report = state.reports.generate(&request).await;
        tracing::info!(
            images = report.image_count.total,
            ai_generated = report.data_sources.ai_generated,
            "Region report ready"
        );
        report
    }
    .instrument(span)
    .await;

    Ok(Json(report))
}

/// Read a request body leniently: every field is optional, coordinates may
/// be numbers or numeric strings
pub fn parse_region_request(body: &Value) -> AppResult<RegionRequest> {
    let region = match body.get("region") {
        None | Some(Value::Null) => UNKNOWN_REGION.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(AppError::InvalidRequest {
                region: UNKNOWN_REGION.to_string(),
                message: format!("region must be a string, got {}", other),
            })
        }
    };

    if !body.is_object() {
        return Err(AppError::InvalidRequest {
            region,
            message: "request body must be a JSON object".to_string(),
        });
    }

    let invalid = |message: String| AppError::InvalidRequest {
        region: region.clone(),
        message,
    };

    let lat = coordinate(body, "lat").map_err(&invalid)?;
    let lng = coordinate(body, "lng").map_err(&invalid)?;

    let language_code = match body.get("language") {
        None | Some(Value::Null) => Language::DEFAULT_CODE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(invalid(format!("language must be a string, got {}", other))),
    };

    Ok(RegionRequest {
        region,
        coordinates: Coordinates::new(lat, lng),
        language_code,
    })
}

fn coordinate(body: &Value, field: &str) -> Result<f64, String> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| format!("{} is out of range", field)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("could not convert {} to float: '{}'", field, s)),
        Some(other) => Err(format!("{} must be a number, got {}", field, other)),
    }
}
