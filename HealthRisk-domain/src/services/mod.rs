pub mod assessment;
pub mod report;
pub mod risk;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use assessment::{assess, create_default_assessment_service, AssessmentError, AssessmentService, AssessmentServiceTrait};
pub use report::{render_report, REPORT_FILE_NAME};
pub use risk::compute;
