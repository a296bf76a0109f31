use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for NFL Logo Back.
#[openapi(
    paths(crate::routes::api::dispatch, crate::routes::health::healthcheck),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::teams::TeamDto,
            crate::dto::teams::TeamsPayload,
            crate::dto::concepts::VariationsPayload,
            crate::dto::analysis::LogoAnalysisPayload,
            crate::design::concept::Concept,
            crate::design::profile::DesignProfile,
            crate::dao::teams::Team,
        )
    ),
    tags(
        (name = "api", description = "Action-dispatch endpoint"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
