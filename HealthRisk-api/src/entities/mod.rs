// Public entities for the HealthRisk API
// This module contains data structures that are shared across the application boundary

// Assessment request and response payloads
pub mod assessment;

// Common entities for error handling
pub mod common;
