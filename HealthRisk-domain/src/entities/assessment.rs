use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::services::assessment::AssessmentError;

/// Labels of the five chart factors, in display order
pub const CHART_LABELS: [&str; 5] = ["BMI", "Blood Pressure", "Sugar", "Age", "Lifestyle"];

/// Headroom added above the tallest bar of the factor chart
pub const CHART_HEADROOM: f64 = 20.0;

/// Gender of the person being assessed (display only, never scored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All variants in form order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AssessmentError::Validation(format!("gender: unknown option '{}'", s)))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// All variants in form order
    pub const ALL: [ActivityLevel; 3] = [ActivityLevel::Low, ActivityLevel::Moderate, ActivityLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AssessmentError::Validation(format!("activity: unknown option '{}'", s)))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smoking habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum SmokingStatus {
    No,
    Yes,
}

impl SmokingStatus {
    /// All variants in form order
    pub const ALL: [SmokingStatus; 2] = [SmokingStatus::No, SmokingStatus::Yes];

    pub fn as_str(&self) -> &'static str {
        match self {
            SmokingStatus::No => "No",
            SmokingStatus::Yes => "Yes",
        }
    }
}

impl FromStr for SmokingStatus {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AssessmentError::Validation(format!("smoking: unknown option '{}'", s)))
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the eight health metrics entered by the user.
///
/// A new snapshot is built for every evaluation; nothing is kept between
/// evaluations. The numeric ranges mirror the bounds of the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AssessmentInput {
    /// Age in years
    #[validate(range(min = 10, max = 90, message = "Age must be between 10 and 90"))]
    pub age: u32,

    /// Gender (not used in scoring)
    pub gender: Gender,

    /// Body weight in kilograms
    #[validate(range(min = 30, max = 150, message = "Weight must be between 30 and 150 kg"))]
    pub weight_kg: u32,

    /// Height in centimetres
    #[validate(range(min = 120, max = 210, message = "Height must be between 120 and 210 cm"))]
    pub height_cm: u32,

    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 80, max = 200, message = "Systolic blood pressure must be between 80 and 200"))]
    pub systolic_bp: u32,

    /// Blood sugar level in mg/dL
    #[validate(range(min = 70, max = 300, message = "Blood sugar must be between 70 and 300 mg/dL"))]
    pub blood_sugar: u32,

    /// Physical activity level
    pub activity: ActivityLevel,

    /// Smoking habit
    pub smoking: SmokingStatus,
}

impl Default for AssessmentInput {
    /// The values the input form starts with
    fn default() -> Self {
        Self {
            age: 35,
            gender: Gender::Male,
            weight_kg: 70,
            height_cm: 170,
            systolic_bp: 125,
            blood_sugar: 115,
            activity: ActivityLevel::Moderate,
            smoking: SmokingStatus::No,
        }
    }
}

/// BMI classification used by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BmiStatus {
    /// BMI of 25 or below
    Normal,
    /// BMI above 25
    Overweight,
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiStatus::Normal => f.write_str("Normal"),
            BmiStatus::Overweight => f.write_str("Overweight"),
        }
    }
}

/// One of the six threshold conditions that add a point to the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// BMI above 25
    ElevatedBmi,
    /// Systolic blood pressure above 140
    HighBloodPressure,
    /// Blood sugar above 140 mg/dL
    HighBloodSugar,
    /// Age above 45
    Age,
    /// Low physical activity
    LowActivity,
    /// Smoker
    Smoking,
}

impl RiskFactor {
    /// Human readable description of the condition
    pub fn description(&self) -> &'static str {
        match self {
            RiskFactor::ElevatedBmi => "BMI above 25",
            RiskFactor::HighBloodPressure => "Systolic blood pressure above 140",
            RiskFactor::HighBloodSugar => "Blood sugar above 140 mg/dL",
            RiskFactor::Age => "Age above 45",
            RiskFactor::LowActivity => "Low physical activity",
            RiskFactor::Smoking => "Smoking",
        }
    }
}

/// Risk tier derived from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum RiskTier {
    /// Score 0 to 2
    Low,
    /// Score 3 or 4
    Medium,
    /// Score 5 or 6
    High,
}

impl RiskTier {
    /// Map a risk score onto its tier.
    ///
    /// This is the only place the tier bands are defined; every piece of tier
    /// dependent text (summary, advice, visit advice, report) goes through it.
    pub fn from_score(score: u8) -> Self {
        if score <= 2 {
            RiskTier::Low
        } else if score <= 4 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    /// Upper-case tier name used in the report and the result label
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }

    pub fn condition_summary(&self) -> &'static str {
        match self {
            RiskTier::Low => "You are currently at low health risk.",
            RiskTier::Medium => "Moderate health risk detected.",
            RiskTier::High => "High health risk detected.",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            RiskTier::Low => {
                "No immediate doctor visit required. Maintain healthy lifestyle and annual checkups."
            }
            RiskTier::Medium => "Doctor consultation is advised within the next 2–3 weeks.",
            RiskTier::High => "Immediate doctor consultation is strongly recommended.",
        }
    }

    /// Short answer for the "doctor visit advice" action
    pub fn visit_advice(&self) -> VisitAdvice {
        match self {
            RiskTier::Low => VisitAdvice {
                message: "✅ No immediate doctor visit needed.".to_string(),
                severity: AdviceSeverity::Success,
            },
            RiskTier::Medium => VisitAdvice {
                message: "⏳ Visit doctor within 2–3 weeks.".to_string(),
                severity: AdviceSeverity::Warning,
            },
            RiskTier::High => VisitAdvice {
                message: "🚨 Meet doctor immediately.".to_string(),
                severity: AdviceSeverity::Error,
            },
        }
    }

    /// Display color of the tier label
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#27ae60",
            RiskTier::Medium => "#f39c12",
            RiskTier::High => "#e74c3c",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How urgently the visit advice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AdviceSeverity {
    Success,
    Warning,
    Error,
}

/// Doctor visit recommendation for a risk tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct VisitAdvice {
    /// Message shown to the user
    pub message: String,
    /// Presentation severity
    pub severity: AdviceSeverity,
}

/// A labelled bar of the factor chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ChartFactor {
    pub label: String,
    pub value: f64,
}

/// Everything derived from one [`AssessmentInput`].
///
/// Always a pure function of the input: computing it twice from the same
/// snapshot gives identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Body-mass index rounded to two decimals
    pub bmi: f64,

    /// BMI classification
    pub bmi_status: BmiStatus,

    /// Number of triggered threshold conditions (0 to 6)
    pub risk_score: u8,

    /// Tier derived from the score
    pub risk_tier: RiskTier,

    /// One line summary of the tier
    pub condition_summary: String,

    /// Medical guidance for the tier
    pub advice: String,

    /// Chart values in [`CHART_LABELS`] order
    pub chart_values: [f64; 5],

    /// Downloadable plain text report
    pub report_text: String,

    /// Conditions that contributed to the score, in check order
    pub triggered_factors: Vec<RiskFactor>,

    /// Doctor visit recommendation
    pub visit_advice: VisitAdvice,
}

impl AssessmentResult {
    /// Chart values paired with their labels
    pub fn chart(&self) -> Vec<ChartFactor> {
        CHART_LABELS
            .iter()
            .zip(self.chart_values.iter())
            .map(|(label, value)| ChartFactor {
                label: (*label).to_string(),
                value: *value,
            })
            .collect()
    }

    /// Upper limit of the chart's value axis
    pub fn chart_upper_bound(&self) -> f64 {
        self.chart_values.iter().copied().fold(f64::MIN, f64::max) + CHART_HEADROOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> AssessmentInput {
        AssessmentInput::default()
    }

    #[test]
    fn test_default_input_is_valid() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let lower = AssessmentInput {
            age: 10,
            weight_kg: 30,
            height_cm: 120,
            systolic_bp: 80,
            blood_sugar: 70,
            ..valid_input()
        };
        assert!(lower.validate().is_ok());

        let upper = AssessmentInput {
            age: 90,
            weight_kg: 150,
            height_cm: 210,
            systolic_bp: 200,
            blood_sugar: 300,
            ..valid_input()
        };
        assert!(upper.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields_are_rejected() {
        let input = AssessmentInput {
            age: 91,
            height_cm: 0,
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("height_cm"));
        assert!(!fields.contains_key("weight_kg"));
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(2), RiskTier::Low);
        assert_eq!(RiskTier::from_score(3), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(4), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(5), RiskTier::High);
        assert_eq!(RiskTier::from_score(6), RiskTier::High);
    }

    #[test]
    fn test_tier_summary_and_advice_text() {
        assert_eq!(RiskTier::Low.condition_summary(), "You are currently at low health risk.");
        assert_eq!(RiskTier::Medium.condition_summary(), "Moderate health risk detected.");
        assert_eq!(RiskTier::High.condition_summary(), "High health risk detected.");

        assert_eq!(
            RiskTier::Low.advice(),
            "No immediate doctor visit required. Maintain healthy lifestyle and annual checkups."
        );
        assert_eq!(RiskTier::Medium.advice(), "Doctor consultation is advised within the next 2–3 weeks.");
        assert_eq!(RiskTier::High.advice(), "Immediate doctor consultation is strongly recommended.");
    }

    #[test]
    fn test_visit_advice_follows_tier() {
        assert_eq!(RiskTier::Low.visit_advice().severity, AdviceSeverity::Success);
        assert_eq!(RiskTier::Medium.visit_advice().severity, AdviceSeverity::Warning);
        assert_eq!(RiskTier::High.visit_advice().severity, AdviceSeverity::Error);
        assert!(RiskTier::Medium.visit_advice().message.contains("2–3 weeks"));
    }

    #[test]
    fn test_parse_options() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("low".parse::<ActivityLevel>(), Ok(ActivityLevel::Low));
        assert_eq!(" Yes ".parse::<SmokingStatus>(), Ok(SmokingStatus::Yes));
        assert_eq!(
            "Sometimes".parse::<SmokingStatus>(),
            Err(AssessmentError::Validation("smoking: unknown option 'Sometimes'".to_string()))
        );
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&ActivityLevel::Moderate).unwrap(), "\"Moderate\"");
        assert_eq!(serde_json::to_string(&SmokingStatus::Yes).unwrap(), "\"Yes\"");
        assert_eq!(serde_json::to_string(&RiskFactor::HighBloodSugar).unwrap(), "\"high_blood_sugar\"");
        assert_eq!(serde_json::to_string(&AdviceSeverity::Warning).unwrap(), "\"warning\"");
    }
}
