use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] bimbel_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] bimbel_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Returns true if the error was caused by the caller's request or the
    /// data it points at, rather than by the infrastructure.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        use bimbel_core::error::CoreError;

        matches!(
            self,
            Self::NotFound(_)
                | Self::InvalidInput(_)
                | Self::CoreError(CoreError::NotFound(_) | CoreError::InvalidInput(_))
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
