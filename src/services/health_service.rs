use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether the team dataset can currently be served, logging the
/// failure detail when it cannot.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().load().await {
        Ok(_) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "dataset health check failed");
            HealthResponse::degraded()
        }
    }
}
