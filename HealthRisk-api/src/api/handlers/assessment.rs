use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{info, instrument, warn};

use health_risk_domain::entities::assessment::AssessmentInput;
use health_risk_domain::services::{create_default_assessment_service, AssessmentServiceTrait, REPORT_FILE_NAME};

use crate::entities::assessment::{AssessmentRequest, AssessmentResponse};
use crate::entities::common::ErrorResponse;

/// Service type for dependency injection
pub type AssessmentService = Arc<dyn AssessmentServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> AssessmentService {
    Arc::new(create_default_assessment_service())
}

/// Compute a health risk assessment
#[utoipa::path(
    post,
    path = "/api/v1/assessment",
    request_body = AssessmentRequest,
    responses(
        (status = 200, description = "Assessment computed", body = AssessmentResponse),
        (status = 400, description = "Malformed request or input outside the supported ranges", body = ErrorResponse),
    ),
    tag = "assessment"
)]
#[instrument(skip(service))]
pub async fn create_assessment(
    State(service): State<AssessmentService>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Malformed assessment request: {}", rejection.body_text());
        ErrorResponse::from(rejection)
    })?;
    let input = AssessmentInput::from(request);

    match service.assess(&input) {
        Ok(result) => {
            info!(
                risk_score = result.risk_score,
                risk_tier = %result.risk_tier,
                "Assessment computed"
            );
            Ok((StatusCode::OK, Json(AssessmentResponse::from(result))))
        }
        Err(e) => {
            warn!("Invalid assessment input: {}", e);
            Err(ErrorResponse::from(e))
        }
    }
}

/// Download the plain text report for an assessment
#[utoipa::path(
    get,
    path = "/api/v1/assessment/report",
    params(AssessmentRequest),
    responses(
        (status = 200, description = "Report file", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed request or input outside the supported ranges", body = ErrorResponse),
    ),
    tag = "assessment"
)]
#[instrument(skip(service))]
pub async fn download_report(
    State(service): State<AssessmentService>,
    query: Result<Query<AssessmentRequest>, QueryRejection>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let Query(request) = query.map_err(|rejection| {
        warn!("Malformed report query: {}", rejection.body_text());
        ErrorResponse::from(rejection)
    })?;
    let input = AssessmentInput::from(request);

    let result = service.assess(&input).map_err(|e| {
        warn!("Report requested for invalid input: {}", e);
        ErrorResponse::from(e)
    })?;

    info!(risk_tier = %result.risk_tier, "Serving health report");

    let disposition = format!("attachment; filename=\"{}\"", REPORT_FILE_NAME);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        result.report_text,
    ))
}

/// Query string that reproduces an input on the report endpoint
pub fn report_query(input: &AssessmentInput) -> String {
    format!(
        "age={}&gender={}&weight_kg={}&height_cm={}&systolic_bp={}&blood_sugar={}&activity={}&smoking={}",
        input.age,
        input.gender,
        input.weight_kg,
        input.height_cm,
        input.systolic_bp,
        input.blood_sugar,
        input.activity,
        input.smoking,
    )
}
