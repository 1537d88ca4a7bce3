use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bimbel_core::error::CoreError;
use bimbel_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// ## Summary
    /// Maps the error to the HTTP status a client should see.
    ///
    /// Missing resources are 404, rejected input is 400, and everything else
    /// (storage failures, broken wiring) is 500.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::ServiceError(
                ServiceError::InvalidInput(_) | ServiceError::CoreError(CoreError::InvalidInput(_)),
            )
            | Self::CoreError(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::ServiceError(
                ServiceError::NotFound(_) | ServiceError::CoreError(CoreError::NotFound(_)),
            )
            | Self::CoreError(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::ServiceError(_) | Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Writes the status and a JSON error body to the response.
    ///
    /// Server-side failures are logged in full but reported to the client
    /// with a generic message.
    pub fn render(self, res: &mut salvo::Response) {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = %self, "Request rejected");
            self.to_string()
        };

        res.status_code(status);
        res.render(Json(ErrorResponse { error: message }));
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bimbel_db::error::DbError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(ServiceError::NotFound("class".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ServiceError::InvalidInput("time".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("body".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ServiceError::DatabaseError(DbError::MigrationError(
                "boom".into()
            )))
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(CoreError::InvariantViolation("wiring")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
