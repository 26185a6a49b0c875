//! Review Error Types
//!
//! Review-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Failures raised by the identity
//! store keep their own mapping.

use auth::AuthError;
use auth::error::storage_error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use thiserror::Error;

/// Review-specific result type alias
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Review-specific error variants
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Input rejected before any write
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Error raised while reading or writing users and profiles
    #[error(transparent)]
    Identity(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReviewError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReviewError::Validation(_) => ErrorKind::BadRequest,
            ReviewError::NotFound(_) => ErrorKind::NotFound,
            ReviewError::Identity(e) => e.kind(),
            ReviewError::Database(e) => classify_sqlx(e).kind(),
            ReviewError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Storage and internal details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ReviewError::Identity(e) => e.to_app_error(),
            ReviewError::Database(e) => storage_error(e),
            ReviewError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            ReviewError::Identity(e) => e.log(),
            ReviewError::Database(e) => {
                tracing::error!(error = %e, "Review database error");
            }
            ReviewError::Internal(msg) => {
                tracing::error!(message = %msg, "Review internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Review error");
            }
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ReviewError::Validation("rating".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ReviewError::NotFound("User").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ReviewError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ReviewError::Database(sqlx::Error::Protocol("bad frame".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_identity_errors_keep_their_mapping() {
        let err = ReviewError::from(AuthError::NotFound("User"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_app_error().message(), "User not found");

        let err = ReviewError::from(AuthError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        // Both crates classify storage failures the same way
        let own = ReviewError::Database(sqlx::Error::PoolClosed).to_app_error();
        let identity = ReviewError::from(AuthError::Database(sqlx::Error::PoolClosed)).to_app_error();
        assert_eq!(own.kind(), identity.kind());
        assert_eq!(own.message(), identity.message());
        assert_eq!(own.action(), Some("Retry the request"));
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = ReviewError::Internal("corrupt rating row".into());
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
