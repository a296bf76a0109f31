/// Logo analysis for single teams.
pub mod analysis_service;
/// Concept generation and the style profile.
pub mod concept_service;
/// Action-name dispatch onto the other services.
pub mod dispatch_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Team listing and filtering.
pub mod team_service;
