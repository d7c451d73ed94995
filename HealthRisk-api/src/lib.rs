// HealthRisk-api lib.rs
//
// HTTP surface of the health risk predictor: the assessment page, the JSON
// API, the report download and the OpenAPI documentation.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
pub mod view;
