use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{dao::teams::StoreError, dto::common::Envelope};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Dataset could not be read, parsed, or validated.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Requested team id does not exist.
    #[error("Team not found")]
    TeamNotFound,
    /// The action query parameter is not recognized.
    #[error("Invalid action specified")]
    InvalidAction,
}

/// Application-level error converted to the uniform JSON error envelope.
///
/// Every failure answers HTTP 400 with `{success: false, error, timestamp}`;
/// nothing propagates to the client as a raw fault.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    message: String,
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let payload = Json(Envelope::<()>::failure(self.message));
        (StatusCode::BAD_REQUEST, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_keep_their_client_messages() {
        assert_eq!(
            AppError::from(ServiceError::TeamNotFound).to_string(),
            "Team not found"
        );
        assert_eq!(
            AppError::from(ServiceError::InvalidAction).to_string(),
            "Invalid action specified"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            AppError::from(ServiceError::Store(StoreError::Unavailable(io))).to_string(),
            "Teams data file not found"
        );
    }
}
