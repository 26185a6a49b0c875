//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already registered
    #[error("Email already registered")]
    DuplicateIdentity,

    /// Unknown email or wrong password
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Bad signature, malformed payload or expired token
    #[error("Could not validate credentials")]
    InvalidToken,

    /// Token is valid but its subject no longer exists
    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Input rejected before any write
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateIdentity => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::Unauthenticated => {
                ErrorKind::Unauthorized
            }
            AuthError::NotFound(_) => ErrorKind::NotFound,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(e) => classify_sqlx(e).kind(),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the logs; clients get a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(e) => storage_error(e),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken | AuthError::Unauthenticated => {
                tracing::info!(error = ?self, "Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

/// Client-facing form of a storage failure, shared with the review crate
pub fn storage_error(err: &sqlx::Error) -> AppError {
    let app_err = classify_sqlx(err);
    if app_err.is_transient() {
        app_err.with_action("Retry the request")
    } else {
        app_err
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid(_) | TokenError::Expired => AuthError::InvalidToken,
            TokenError::Signing(msg) => AuthError::Internal(msg),
        }
    }
}
