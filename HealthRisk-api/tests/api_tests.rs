use std::sync::Once;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use health_risk_api::api::create_application;
use health_risk_api::config::ServerConfig;

// Ensure tracing is initialized only once
static INIT: Once = Once::new();

fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

fn app() -> Router {
    initialize();
    create_application(ServerConfig {
        environment: "test".to_string(),
        ..ServerConfig::default()
    })
}

async fn get_body_bytes(body: Body) -> Vec<u8> {
    to_bytes(body, usize::MAX).await.unwrap().to_vec()
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = get_body_bytes(response.into_body()).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_text(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let request = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = get_body_bytes(response.into_body()).await;
    (status, headers, String::from_utf8(bytes).unwrap())
}

fn assessment(
    age: u32,
    weight_kg: u32,
    height_cm: u32,
    systolic_bp: u32,
    blood_sugar: u32,
    activity: &str,
    smoking: &str,
) -> Value {
    json!({
        "age": age,
        "gender": "Male",
        "weight_kg": weight_kg,
        "height_cm": height_cm,
        "systolic_bp": systolic_bp,
        "blood_sugar": blood_sugar,
        "activity": activity,
        "smoking": smoking
    })
}

#[tokio::test]
async fn test_default_form_is_low_risk() {
    let (status, body) = post_json("/api/v1/assessment", assessment(35, 70, 170, 125, 115, "Moderate", "No")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 24.22);
    assert_eq!(body["bmi_status"], "Normal");
    assert_eq!(body["risk_score"], 0);
    assert_eq!(body["risk_level"], "LOW");
    assert_eq!(body["condition_summary"], "You are currently at low health risk.");
    assert_eq!(body["chart_values"], json!([24.22, 62.5, 57.5, 35.0, 20.0]));
    assert_eq!(body["chart_upper_bound"], 82.5);
    assert_eq!(body["triggered_factors"], json!([]));
}

#[tokio::test]
async fn test_every_condition_gives_high_risk() {
    let (status, body) = post_json("/api/v1/assessment", assessment(60, 95, 170, 150, 160, "Low", "Yes")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 32.87);
    assert_eq!(body["bmi_status"], "Overweight");
    assert_eq!(body["risk_score"], 6);
    assert_eq!(body["risk_level"], "HIGH");
    assert_eq!(body["visit_advice"]["severity"], "error");
    assert_eq!(body["chart_values"][4], 40.0);
    assert_eq!(body["triggered_factors"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_score_of_two_is_low_risk() {
    let (status, body) = post_json("/api/v1/assessment", assessment(46, 70, 170, 141, 100, "High", "No")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_score"], 2);
    assert_eq!(body["risk_level"], "LOW");
    assert_eq!(body["triggered_factors"], json!(["high_blood_pressure", "age"]));
}

#[tokio::test]
async fn test_score_of_three_is_medium_risk() {
    let (status, body) = post_json("/api/v1/assessment", assessment(60, 70, 170, 125, 115, "Low", "Yes")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_score"], 3);
    assert_eq!(body["risk_level"], "MEDIUM");
    assert_eq!(body["condition_summary"], "Moderate health risk detected.");
    assert_eq!(body["visit_advice"]["severity"], "warning");
    assert_eq!(body["triggered_factors"], json!(["age", "low_activity", "smoking"]));
}

#[tokio::test]
async fn test_boundary_values_do_not_count() {
    // BMI of exactly 25.0 after rounding, and every other value on its threshold
    let (status, body) = post_json("/api/v1/assessment", assessment(45, 49, 140, 140, 140, "Moderate", "No")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 25.0);
    assert_eq!(body["bmi_status"], "Normal");
    assert_eq!(body["risk_score"], 0);
}

#[tokio::test]
async fn test_out_of_range_input_is_rejected() {
    let (status, body) = post_json("/api/v1/assessment", assessment(95, 70, 170, 125, 115, "Moderate", "No")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"], json!(["age: Age must be between 10 and 90"]));
}

#[tokio::test]
async fn test_report_download() {
    let (status, headers, text) = get_text(
        "/api/v1/assessment/report?age=35&gender=Female&weight_kg=70&height_cm=170&systolic_bp=125&blood_sugar=115&activity=Moderate&smoking=No",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"health_risk_report.txt\""
    );
    assert_eq!(
        text,
        "\nAI HEALTH RISK SUMMARY REPORT\n\nAge: 35\nGender: Female\nBMI: 24.22\nBlood Pressure: 125\nSugar Level: 115\nPhysical Activity: Moderate\nSmoking: No\n\nFinal Risk Level:\nLOW\n\nNote: This report is for awareness only.\n"
    );
}

#[tokio::test]
async fn test_page_with_defaults() {
    let (status, headers, html) = get_text("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(html.contains("Risk Level: LOW"));
    assert!(html.contains("BMI Status"));
    assert!(html.contains("Relative Risk Impact"));
}

#[tokio::test]
async fn test_page_with_visit_advice() {
    let (status, _, html) =
        get_text("/?age=60&weight_kg=95&systolic_bp=150&blood_sugar=160&activity=Low&smoking=Yes&advice=1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Risk Level: HIGH"));
    assert!(html.contains("Meet doctor immediately."));
}

#[tokio::test]
async fn test_page_with_invalid_value() {
    let (status, _, html) = get_text("/?weight_kg=200").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("weight_kg: Weight must be between 30 and 150 kg"));
    assert!(!html.contains("Risk Level:"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, _, text) = get_text("/health").await;
    let body: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["components"]["calculator"]["status"], "ok");
}
