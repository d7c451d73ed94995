use thiserror::Error;
use tracing::{debug, warn};
use validator::Validate;

use crate::entities::assessment::{AssessmentInput, AssessmentResult};
use crate::services::risk::compute;

/// Assessment service errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// One or more fields are outside their documented range
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Trait for assessment service operations
pub trait AssessmentServiceTrait {
    /// Check every field of an input against its documented range
    fn validate_input(&self, input: &AssessmentInput) -> Result<(), AssessmentError>;

    /// Validate the input, then compute its assessment
    fn assess(&self, input: &AssessmentInput) -> Result<AssessmentResult, AssessmentError>;
}

/// Default assessment service backed by the threshold calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentService;

impl AssessmentService {
    /// Create a new assessment service
    pub fn new() -> Self {
        Self
    }
}

impl AssessmentServiceTrait for AssessmentService {
    fn validate_input(&self, input: &AssessmentInput) -> Result<(), AssessmentError> {
        if let Err(validation_errors) = input.validate() {
            // Flatten field errors into "field: message; field: message"
            let mut fields: Vec<String> = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect();
            // field_errors() is a HashMap; keep the message stable
            fields.sort();

            let error_message = fields.join("; ");
            warn!("Rejected assessment input: {}", error_message);
            return Err(AssessmentError::Validation(error_message));
        }

        Ok(())
    }

    fn assess(&self, input: &AssessmentInput) -> Result<AssessmentResult, AssessmentError> {
        self.validate_input(input)?;

        let result = compute(input);
        debug!(
            risk_score = result.risk_score,
            risk_tier = %result.risk_tier,
            bmi = result.bmi,
            "Assessment computed"
        );
        Ok(result)
    }
}

/// Validate and compute an assessment with the default service
pub fn assess(input: &AssessmentInput) -> Result<AssessmentResult, AssessmentError> {
    AssessmentService::new().assess(input)
}

/// Create the default assessment service
pub fn create_default_assessment_service() -> impl AssessmentServiceTrait + Send + Sync {
    AssessmentService::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::assessment::{ActivityLevel, Gender, RiskTier, SmokingStatus};

    fn valid_input() -> AssessmentInput {
        AssessmentInput {
            age: 50,
            gender: Gender::Female,
            weight_kg: 90,
            height_cm: 170,
            systolic_bp: 150,
            blood_sugar: 150,
            activity: ActivityLevel::Low,
            smoking: SmokingStatus::Yes,
        }
    }

    #[test]
    fn test_validate_input_valid() {
        let service = AssessmentService::new();
        assert!(service.validate_input(&valid_input()).is_ok());
    }

    #[test]
    fn test_validate_input_age_too_high() {
        let service = AssessmentService::new();
        let input = AssessmentInput { age: 120, ..valid_input() };

        let result = service.validate_input(&input);
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("age: Age must be between 10 and 90"), "got '{}'", message);
    }

    #[test]
    fn test_validate_input_zero_height() {
        let service = AssessmentService::new();
        let input = AssessmentInput { height_cm: 0, ..valid_input() };

        let error = service.validate_input(&input).unwrap_err();
        assert!(error.to_string().contains("height_cm"));
    }

    #[test]
    fn test_validate_input_reports_every_field_in_order() {
        let service = AssessmentService::new();
        let input = AssessmentInput {
            weight_kg: 10,
            blood_sugar: 400,
            ..valid_input()
        };

        let AssessmentError::Validation(message) = service.validate_input(&input).unwrap_err();
        assert_eq!(
            message,
            "blood_sugar: Blood sugar must be between 70 and 300 mg/dL; weight_kg: Weight must be between 30 and 150 kg"
        );
    }

    #[test]
    fn test_assess_rejects_invalid_input() {
        let input = AssessmentInput { systolic_bp: 20, ..valid_input() };
        assert!(matches!(assess(&input), Err(AssessmentError::Validation(_))));
    }

    #[test]
    fn test_assess_valid_input() {
        let result = assess(&valid_input()).unwrap();
        assert_eq!(result.risk_score, 6);
        assert_eq!(result.risk_tier, RiskTier::High);
        assert_eq!(result, compute(&valid_input()));
    }
}
