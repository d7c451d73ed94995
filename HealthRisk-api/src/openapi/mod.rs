use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Assessment endpoints
        crate::api::handlers::assessment::create_assessment,
        crate::api::handlers::assessment::download_report,
    ),
    components(
        schemas(
            // Entities
            crate::entities::assessment::AssessmentRequest,
            crate::entities::assessment::AssessmentResponse,
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,

            // Domain schemas
            health_risk_domain::entities::assessment::Gender,
            health_risk_domain::entities::assessment::ActivityLevel,
            health_risk_domain::entities::assessment::SmokingStatus,
            health_risk_domain::entities::assessment::BmiStatus,
            health_risk_domain::entities::assessment::RiskTier,
            health_risk_domain::entities::assessment::RiskFactor,
            health_risk_domain::entities::assessment::VisitAdvice,
            health_risk_domain::entities::assessment::AdviceSeverity,
            health_risk_domain::entities::assessment::ChartFactor,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "assessment", description = "Health risk assessment and report endpoints")
    ),
    info(
        title = "HealthRisk API",
        version = "0.1.0",
        description = "Rule-based early health risk prediction from basic health indicators",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "HealthRisk API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().expect("tags should be defined");
        assert!(tags.iter().any(|tag| tag.name == "health"));
        assert!(tags.iter().any(|tag| tag.name == "assessment"));

        assert!(openapi.paths.paths.contains_key("/health"));
        assert!(openapi.paths.paths.contains_key("/api/v1/assessment"));
        assert!(openapi.paths.paths.contains_key("/api/v1/assessment/report"));
    }

    #[test]
    fn test_schemas_are_registered() {
        let openapi = ApiDoc::openapi();
        let schemas = &openapi.components.as_ref().expect("components should be defined").schemas;

        for name in ["AssessmentRequest", "AssessmentResponse", "ErrorResponse", "HealthResponse", "RiskTier"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
