use crate::entities::assessment::{AssessmentInput, RiskTier};

/// File name offered when the report is downloaded
pub const REPORT_FILE_NAME: &str = "health_risk_report.txt";

/// Last line of every report
pub const REPORT_DISCLAIMER: &str = "Note: This report is for awareness only.";

/// Format a decimal the way the report has always printed it: shortest
/// round-trip digits, with a trailing `.0` for whole numbers (`25.0`, `24.22`).
pub fn format_decimal(value: f64) -> String {
    format!("{:?}", value)
}

/// Render the plain text summary report.
///
/// Existing consumers parse this file line by line, so the field order, the
/// line labels and the leading and trailing blank lines are fixed.
pub fn render_report(input: &AssessmentInput, bmi: f64, tier: RiskTier) -> String {
    format!(
        "
AI HEALTH RISK SUMMARY REPORT

Age: {age}
Gender: {gender}
BMI: {bmi}
Blood Pressure: {bp}
Sugar Level: {sugar}
Physical Activity: {activity}
Smoking: {smoking}

Final Risk Level:
{tier}

{disclaimer}
",
        age = input.age,
        gender = input.gender,
        bmi = format_decimal(bmi),
        bp = input.systolic_bp,
        sugar = input.blood_sugar,
        activity = input.activity,
        smoking = input.smoking,
        tier = tier.label(),
        disclaimer = REPORT_DISCLAIMER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::assessment::{ActivityLevel, Gender, SmokingStatus};

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(24.22), "24.22");
        assert_eq!(format_decimal(25.0), "25.0");
        assert_eq!(format_decimal(104.17), "104.17");
        assert_eq!(format_decimal(20.5), "20.5");
    }

    #[test]
    fn test_report_matches_template() {
        let input = AssessmentInput::default();
        let report = render_report(&input, 24.22, RiskTier::Low);

        let expected = "\nAI HEALTH RISK SUMMARY REPORT\n\nAge: 35\nGender: Male\nBMI: 24.22\n\
                        Blood Pressure: 125\nSugar Level: 115\nPhysical Activity: Moderate\nSmoking: No\n\n\
                        Final Risk Level:\nLOW\n\nNote: This report is for awareness only.\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_echoes_inputs() {
        let input = AssessmentInput {
            age: 72,
            gender: Gender::Other,
            weight_kg: 120,
            height_cm: 160,
            systolic_bp: 188,
            blood_sugar: 260,
            activity: ActivityLevel::Low,
            smoking: SmokingStatus::Yes,
        };
        let report = render_report(&input, 46.88, RiskTier::High);

        assert!(report.contains("Age: 72\n"));
        assert!(report.contains("Gender: Other\n"));
        assert!(report.contains("BMI: 46.88\n"));
        assert!(report.contains("Blood Pressure: 188\n"));
        assert!(report.contains("Sugar Level: 260\n"));
        assert!(report.contains("Physical Activity: Low\n"));
        assert!(report.contains("Smoking: Yes\n"));
        assert!(report.contains("Final Risk Level:\nHIGH\n"));
        assert!(report.ends_with("Note: This report is for awareness only.\n"));
    }
}
