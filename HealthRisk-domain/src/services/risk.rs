use crate::entities::assessment::{
    ActivityLevel, AssessmentInput, AssessmentResult, BmiStatus, RiskFactor, RiskTier, SmokingStatus,
};
use crate::services::report::render_report;

/// BMI above which a person counts as overweight
pub const BMI_THRESHOLD: f64 = 25.0;
/// Systolic pressure above which blood pressure counts as high
pub const SYSTOLIC_THRESHOLD: u32 = 140;
/// Blood sugar (mg/dL) above which sugar counts as high
pub const BLOOD_SUGAR_THRESHOLD: u32 = 140;
/// Age above which age counts as a risk factor
pub const AGE_THRESHOLD: u32 = 45;

/// Lifestyle bar height for a low activity level
const LIFESTYLE_LOW_ACTIVITY: f64 = 40.0;
/// Lifestyle bar height for moderate or high activity
const LIFESTYLE_ACTIVE: f64 = 20.0;

/// Round to two decimals, correctly rounded from the exact binary value.
///
/// Float formatting already performs exact decimal rounding (ties to even), so
/// going through the formatted string avoids the double rounding of
/// `(x * 100.0).round() / 100.0`.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Body-mass index from weight in kg and height in cm, rounded to two decimals
pub fn calculate_bmi(weight_kg: u32, height_cm: u32) -> f64 {
    let height_m = height_cm as f64 / 100.0;
    round_to_cents(weight_kg as f64 / height_m.powi(2))
}

/// Classify a (rounded) BMI value
pub fn bmi_status(bmi: f64) -> BmiStatus {
    if bmi > BMI_THRESHOLD {
        BmiStatus::Overweight
    } else {
        BmiStatus::Normal
    }
}

/// Evaluate all six threshold conditions and return the ones that fired.
///
/// Every condition is checked; the order of the returned factors is the check
/// order and has no effect on the score.
pub fn triggered_factors(input: &AssessmentInput, bmi: f64) -> Vec<RiskFactor> {
    let checks = [
        (bmi > BMI_THRESHOLD, RiskFactor::ElevatedBmi),
        (input.systolic_bp > SYSTOLIC_THRESHOLD, RiskFactor::HighBloodPressure),
        (input.blood_sugar > BLOOD_SUGAR_THRESHOLD, RiskFactor::HighBloodSugar),
        (input.age > AGE_THRESHOLD, RiskFactor::Age),
        (input.activity == ActivityLevel::Low, RiskFactor::LowActivity),
        (input.smoking == SmokingStatus::Yes, RiskFactor::Smoking),
    ];

    checks
        .into_iter()
        .filter_map(|(triggered, factor)| triggered.then_some(factor))
        .collect()
}

/// Risk score: one point per triggered condition
pub fn risk_score(input: &AssessmentInput, bmi: f64) -> u8 {
    triggered_factors(input, bmi).len() as u8
}

/// Bar heights of the factor chart: BMI, half the systolic pressure, half the
/// blood sugar, age, and a fixed lifestyle weight.
pub fn chart_values(input: &AssessmentInput, bmi: f64) -> [f64; 5] {
    let lifestyle = match input.activity {
        ActivityLevel::Low => LIFESTYLE_LOW_ACTIVITY,
        ActivityLevel::Moderate | ActivityLevel::High => LIFESTYLE_ACTIVE,
    };

    [
        bmi,
        input.systolic_bp as f64 / 2.0,
        input.blood_sugar as f64 / 2.0,
        input.age as f64,
        lifestyle,
    ]
}

/// Compute the full assessment for an input snapshot.
///
/// Assumes the input is within its documented ranges; use
/// [`crate::services::assessment::assess`] for unchecked input.
pub fn compute(input: &AssessmentInput) -> AssessmentResult {
    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let triggered_factors = triggered_factors(input, bmi);
    let risk_score = triggered_factors.len() as u8;
    let risk_tier = RiskTier::from_score(risk_score);

    AssessmentResult {
        bmi,
        bmi_status: bmi_status(bmi),
        risk_score,
        risk_tier,
        condition_summary: risk_tier.condition_summary().to_string(),
        advice: risk_tier.advice().to_string(),
        chart_values: chart_values(input, bmi),
        report_text: render_report(input, bmi, risk_tier),
        triggered_factors,
        visit_advice: risk_tier.visit_advice(),
    }
}
