//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::assessment::{AssessmentInput, RiskTier};
use crate::services::risk::compute;

/// BMI the reference assessment must produce
const REFERENCE_BMI: f64 = 24.22;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a system health report, deriving the overall status from the
    /// worst component
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        SystemHealth { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the risk calculator
    /// Returns true if the calculator produces the reference assessment
    /// Returns an error if the check could not be performed
    async fn check_calculator_status(&self) -> Result<bool, String>;
}

/// Run the default form values through the calculator and compare against
/// the known answer.
///
/// Returns:
/// - Ok(true) if the reference assessment matches
/// - Ok(false) if the calculator returned a different result
///
/// The calculator is pure, so this check never returns `Err`. The `Result`
/// matches [`HealthServiceTrait::check_calculator_status`], whose
/// implementations may fail to run their check.
pub async fn check_calculator_status() -> Result<bool, String> {
    let result = compute(&AssessmentInput::default());
    Ok(result.bmi == REFERENCE_BMI && result.risk_score == 0 && result.risk_tier == RiskTier::Low)
}

/// Health of the domain components (currently only the calculator).
///
/// The `Err` arm below maps a failed check to `Unhealthy`; the built-in check
/// never takes it.
pub async fn get_system_health() -> SystemHealth {
    let calculator_component = match check_calculator_status().await {
        Ok(true) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(false) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("Calculator returned an unexpected reference assessment".to_string()),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    SystemHealth::from_components(
        vec![("calculator".to_string(), calculator_component)]
            .into_iter()
            .collect(),
    )
}
