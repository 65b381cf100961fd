//! End-to-end API tests
//!
//! Drives the full router with `tower::ServiceExt::oneshot`; every provider
//! is served by one mock server.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use region_insight::{create_app, AppState};
use serde_json::{json, Value};
use shared::text::char_len;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{
    generated_report, image_info, kyoto_extract, kyoto_forecast, kyoto_summary, search_hits,
    test_config, CATALOG_PATH, GENERATION_PATH, WEATHER_PATH,
};

fn app(server: &MockServer) -> Router {
    create_app(AppState::new(test_config(&server.uri())).unwrap())
}

async fn post_region(app: Router, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/region-info")
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn mount_kyoto(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(kyoto_forecast()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Kyoto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kyoto_summary()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kyoto_extract()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hits(&[
            "File:Kinkaku-ji temple.jpg",
            "File:Arashiyama scenery.jpg",
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("titles", "File:Kinkaku-ji temple.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_info(
            "File:Kinkaku-ji temple.jpg",
            "https://upload.example/kinkakuji.jpg",
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("titles", "File:Arashiyama scenery.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_info(
            "File:Arashiyama scenery.jpg",
            "https://upload.example/arashiyama.jpg",
        )))
        .mount(server)
        .await;
}

async fn mount_generation(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(GENERATION_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "generated_text": generated_report() }])),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_health_reports_generation_key() {
    let server = MockServer::start().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = app(&server).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["generation_configured"], true);
}

#[tokio::test]
async fn test_kyoto_report() {
    let server = MockServer::start().await;
    mount_kyoto(&server).await;
    mount_generation(&server).await;

    let body = json!({ "region": "Kyoto", "lat": 35.0116, "lng": 135.7681, "language": "en" });
    let (status, report) = post_region(app(&server), Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["region"], "Kyoto");
    assert_eq!(report["coordinates"]["lat"], 35.0116);
    assert_eq!(report["current_weather"]["temperature"], 22.3);
    assert_eq!(report["current_weather"]["weather_description"], "Mainly clear");
    assert_eq!(report["wiki_summary"], kyoto_summary()["extract"]);
    assert_eq!(report["language"], "en");

    assert_eq!(report["data_sources"]["wikipedia"], true);
    assert_eq!(report["data_sources"]["weather_api"], true);
    assert_eq!(report["data_sources"]["ai_analysis"], true);
    assert_eq!(report["data_sources"]["ai_generated"], true);
    assert_eq!(report["data_sources"]["image_sources"], json!(["Wikimedia Commons"]));

    assert_eq!(report["has_images"], true);
    assert_eq!(report["image_count"]["total"], 2);
    assert_eq!(report["image_count"]["architecture"], 1);
    assert_eq!(report["image_count"]["environment"], 1);
    assert_eq!(report["images"]["architecture"][0]["type"], "architecture");

    for key in ["climate", "environment", "architecture", "adaptation", "simple_explanation"] {
        let text = report["information"][key].as_str().unwrap();
        assert!(char_len(text) >= 200, "{} too short", key);
    }
    assert_eq!(report["information"]["building_examples"].as_array().unwrap().len(), 3);

    let generated_at = report["generated_at"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(generated_at, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[tokio::test]
async fn test_kyoto_report_without_generation() {
    let server = MockServer::start().await;
    mount_kyoto(&server).await;

    let body = json!({ "region": "Kyoto", "lat": 35.0116, "lng": 135.7681, "language": "en" });
    let (status, report) = post_region(app(&server), Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["data_sources"]["ai_analysis"], true);
    assert_eq!(report["data_sources"]["ai_generated"], false);
    assert_eq!(report["data_sources"]["weather_api"], true);

    let information = &report["information"];
    assert!(information["climate"].as_str().unwrap().contains("Kyoto"));
    assert!(information["climate"].as_str().unwrap().contains("7.0°C"));
    assert!(information["environment"].as_str().unwrap().contains("City in Japan"));
    assert_eq!(information["building_examples"].as_array().unwrap().len(), 5);

    let images = report["images"]["all"].as_array().unwrap();
    assert!(images.len() <= 15);
    assert_eq!(images.len(), 2);
}

#[tokio::test]
async fn test_all_providers_down_still_succeeds() {
    let server = MockServer::start().await;

    let body = json!({ "region": "Atlantis", "lat": "12.5", "lng": -40 });
    let (status, report) = post_region(app(&server), Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["language"], "ko");
    assert_eq!(report["coordinates"]["lat"], 12.5);
    assert_eq!(report["current_weather"]["temperature"], 0.0);
    assert_eq!(report["current_weather"]["weather_description"], "알 수 없음");
    assert_eq!(report["wiki_summary"], Value::Null);
    assert_eq!(report["has_images"], false);
    assert_eq!(report["image_count"]["total"], 0);
    assert_eq!(report["data_sources"]["wikipedia"], false);
    assert_eq!(report["data_sources"]["weather_api"], false);
    assert_eq!(report["data_sources"]["ai_generated"], false);

    let climate = report["information"]["climate"].as_str().unwrap();
    assert!(climate.contains("Atlantis"));
    assert_eq!(report["information"]["building_examples"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_unknown_language_uses_english() {
    let server = MockServer::start().await;

    let body = json!({ "region": "Lyon", "language": "fr" });
    let (status, report) = post_region(app(&server), Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["language"], "fr");
    assert_eq!(report["current_weather"]["weather_description"], "Unknown");
}

#[tokio::test]
async fn test_bad_coordinate_is_500_with_region() {
    let server = MockServer::start().await;

    let body = json!({ "region": "Kyoto", "lat": "north" });
    let (status, error) = post_region(app(&server), Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["region"], "Kyoto");
    assert_eq!(error["message"], "정보를 가져오는 중 오류가 발생했습니다.");
    assert_eq!(error["message_en"], "An error occurred while fetching region information.");
    assert!(error["error"].as_str().unwrap().contains("lat"));
}

#[tokio::test]
async fn test_unparseable_body_is_500() {
    let server = MockServer::start().await;

    let (status, error) = post_region(app(&server), Body::from("{not json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["region"], "Unknown");
}
