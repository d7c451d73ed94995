// Domain entities and value objects
pub mod assessment;

// Re-export common types for easier imports
pub use assessment::{
    ActivityLevel, AdviceSeverity, AssessmentInput, AssessmentResult, BmiStatus, ChartFactor, Gender, RiskFactor,
    RiskTier, SmokingStatus, VisitAdvice, CHART_HEADROOM, CHART_LABELS,
};
