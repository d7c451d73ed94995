// HealthRisk Domain
// This crate contains the business logic for the health risk predictor

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

pub use entities::{AssessmentInput, AssessmentResult, RiskTier};
pub use services::{assess, compute, AssessmentError};
