use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use health_risk_domain::entities::assessment::{ActivityLevel, AssessmentInput, Gender, SmokingStatus};
use health_risk_domain::services::AssessmentError;

use crate::api::handlers::assessment::{report_query, AssessmentService};
use crate::view::{render_page, FormValues, PageModel};

/// Raw query parameters of the assessment form.
///
/// Every field is optional and kept as text so that a bad value can be shown
/// back to the user instead of rejecting the whole request.
#[derive(Debug, Default, Deserialize)]
pub struct FormParams {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub weight_kg: Option<String>,
    pub height_cm: Option<String>,
    pub systolic_bp: Option<String>,
    pub blood_sugar: Option<String>,
    pub activity: Option<String>,
    pub smoking: Option<String>,
    /// Present when the "doctor visit advice" button was pressed
    pub advice: Option<String>,
}

/// Blank or missing values fall back to the form default
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number(
    value: &Option<String>,
    field: &str,
    label: &str,
    default: u32,
    errors: &mut Vec<String>,
) -> u32 {
    match provided(value) {
        Some(raw) => raw.parse::<u32>().unwrap_or_else(|_| {
            errors.push(format!("{}: {} must be a whole number", field, label));
            default
        }),
        None => default,
    }
}

fn parse_option<T>(value: &Option<String>, default: T, errors: &mut Vec<String>) -> T
where
    T: std::str::FromStr<Err = AssessmentError>,
{
    match provided(value) {
        Some(raw) => raw.parse::<T>().unwrap_or_else(|AssessmentError::Validation(message)| {
            errors.push(message);
            default
        }),
        None => default,
    }
}

impl FormParams {
    /// Values to echo back into the form inputs
    pub fn form_values(&self) -> FormValues {
        let defaults = FormValues::from(&AssessmentInput::default());
        let pick = |value: &Option<String>, default: String| provided(value).map(str::to_string).unwrap_or(default);

        FormValues {
            age: pick(&self.age, defaults.age),
            gender: pick(&self.gender, defaults.gender),
            weight_kg: pick(&self.weight_kg, defaults.weight_kg),
            height_cm: pick(&self.height_cm, defaults.height_cm),
            systolic_bp: pick(&self.systolic_bp, defaults.systolic_bp),
            blood_sugar: pick(&self.blood_sugar, defaults.blood_sugar),
            activity: pick(&self.activity, defaults.activity),
            smoking: pick(&self.smoking, defaults.smoking),
        }
    }

    /// Build an input snapshot, collecting a message for every value that
    /// cannot be parsed
    pub fn to_input(&self) -> Result<AssessmentInput, Vec<String>> {
        let defaults = AssessmentInput::default();
        let mut errors = Vec::new();

        let input = AssessmentInput {
            age: parse_number(&self.age, "age", "Age", defaults.age, &mut errors),
            gender: parse_option::<Gender>(&self.gender, defaults.gender, &mut errors),
            weight_kg: parse_number(&self.weight_kg, "weight_kg", "Weight", defaults.weight_kg, &mut errors),
            height_cm: parse_number(&self.height_cm, "height_cm", "Height", defaults.height_cm, &mut errors),
            systolic_bp: parse_number(
                &self.systolic_bp,
                "systolic_bp",
                "Systolic blood pressure",
                defaults.systolic_bp,
                &mut errors,
            ),
            blood_sugar: parse_number(&self.blood_sugar, "blood_sugar", "Blood sugar", defaults.blood_sugar, &mut errors),
            activity: parse_option::<ActivityLevel>(&self.activity, defaults.activity, &mut errors),
            smoking: parse_option::<SmokingStatus>(&self.smoking, defaults.smoking, &mut errors),
        };

        if errors.is_empty() {
            Ok(input)
        } else {
            Err(errors)
        }
    }

    /// Whether the visit advice should be shown
    pub fn wants_visit_advice(&self) -> bool {
        provided(&self.advice).is_some()
    }
}

/// Render the assessment page for the submitted form values
#[instrument(skip(service))]
pub async fn assessment_page(
    State(service): State<AssessmentService>,
    Query(params): Query<FormParams>,
) -> impl IntoResponse {
    let form = params.form_values();

    let outcome = params.to_input().and_then(|input| {
        service
            .assess(&input)
            .map(|result| (input, result))
            .map_err(|AssessmentError::Validation(message)| message.split("; ").map(str::to_string).collect())
    });

    match outcome {
        Ok((input, result)) => {
            debug!(risk_score = result.risk_score, "Rendering assessment page");
            let html = render_page(&PageModel {
                form: &form,
                result: Some(&result),
                errors: &[],
                show_visit_advice: params.wants_visit_advice(),
                report_url: Some(format!("/api/v1/assessment/report?{}", report_query(&input))),
            });
            (StatusCode::OK, Html(html))
        }
        Err(errors) => {
            debug!(error_count = errors.len(), "Rendering assessment page with errors");
            let html = render_page(&PageModel {
                form: &form,
                result: None,
                errors: &errors,
                show_visit_advice: false,
                report_url: None,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html))
        }
    }
}
