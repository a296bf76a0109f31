use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::{
        api::{ApiPayload, ApiQuery},
        common::Envelope,
    },
    error::AppError,
    services::dispatch_service,
    state::SharedState,
};

/// Configure the action-dispatch route.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api", get(dispatch))
}

#[utoipa::path(
    get,
    path = "/api",
    tag = "api",
    params(ApiQuery),
    responses(
        (status = 200, description = "Success envelope with the action-specific payload"),
        (status = 400, description = "Error envelope: unknown action, unreadable dataset, or team not found")
    )
)]
/// Dispatch an action-style request and wrap the outcome in the uniform
/// envelope. CORS preflight is answered by the permissive CORS layer.
pub async fn dispatch(
    State(state): State<SharedState>,
    Query(query): Query<ApiQuery>,
) -> Result<Json<Envelope<ApiPayload>>, AppError> {
    let payload = dispatch_service::dispatch(&state, query).await?;
    Ok(Json(Envelope::success(payload)))
}
