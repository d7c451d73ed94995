use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use health_risk_domain::entities::assessment::{
    ActivityLevel, AssessmentInput, AssessmentResult, BmiStatus, ChartFactor, Gender, RiskFactor, RiskTier,
    SmokingStatus, VisitAdvice,
};

/// Request payload for a health risk assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssessmentRequest {
    /// Age in years (10-90)
    pub age: u32,

    /// Gender, shown in the report only
    pub gender: Gender,

    /// Weight in kilograms (30-150)
    pub weight_kg: u32,

    /// Height in centimetres (120-210)
    pub height_cm: u32,

    /// Systolic blood pressure (80-200)
    pub systolic_bp: u32,

    /// Blood sugar level in mg/dL (70-300)
    pub blood_sugar: u32,

    /// Physical activity level
    pub activity: ActivityLevel,

    /// Smoking habit
    pub smoking: SmokingStatus,
}

impl From<AssessmentRequest> for AssessmentInput {
    fn from(request: AssessmentRequest) -> Self {
        AssessmentInput {
            age: request.age,
            gender: request.gender,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            systolic_bp: request.systolic_bp,
            blood_sugar: request.blood_sugar,
            activity: request.activity,
            smoking: request.smoking,
        }
    }
}

/// Result of a health risk assessment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessmentResponse {
    /// Body-mass index rounded to two decimals
    pub bmi: f64,

    /// BMI classification
    pub bmi_status: BmiStatus,

    /// Number of triggered risk conditions (0-6)
    pub risk_score: u8,

    /// Risk tier
    pub risk_tier: RiskTier,

    /// Upper-case tier name as printed in the report ("LOW", "MEDIUM", "HIGH")
    pub risk_level: String,

    /// One line condition summary
    pub condition_summary: String,

    /// Medical guidance
    pub advice: String,

    /// Doctor visit recommendation
    pub visit_advice: VisitAdvice,

    /// Conditions that contributed to the score
    pub triggered_factors: Vec<RiskFactor>,

    /// Chart values in label order (BMI, Blood Pressure, Sugar, Age, Lifestyle)
    pub chart_values: Vec<f64>,

    /// Labelled chart bars
    pub chart: Vec<ChartFactor>,

    /// Upper limit of the chart's value axis
    pub chart_upper_bound: f64,

    /// Plain text report, as offered for download
    pub report_text: String,
}

impl From<AssessmentResult> for AssessmentResponse {
    fn from(result: AssessmentResult) -> Self {
        let chart = result.chart();
        let chart_upper_bound = result.chart_upper_bound();

        AssessmentResponse {
            bmi: result.bmi,
            bmi_status: result.bmi_status,
            risk_score: result.risk_score,
            risk_tier: result.risk_tier,
            risk_level: result.risk_tier.label().to_string(),
            condition_summary: result.condition_summary,
            advice: result.advice,
            visit_advice: result.visit_advice,
            triggered_factors: result.triggered_factors,
            chart_values: result.chart_values.to_vec(),
            chart,
            chart_upper_bound,
            report_text: result.report_text,
        }
    }
}
