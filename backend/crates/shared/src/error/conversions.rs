//! Error conversions
//!
//! Storage error classification and the HTTP response for [`AppError`].

use super::app_error::AppError;
#[cfg(test)]
use super::kind::ErrorKind;

// ============================================================================
// SQLx classification (feature-gated)
// ============================================================================

/// Classify a storage failure into a client-safe [`AppError`]
///
/// Pool exhaustion, socket failures and server resource or shutdown codes
/// are transient (503); everything unrecognised is internal (500). The
/// message never carries driver text.
#[cfg(feature = "sqlx")]
pub fn classify_sqlx(err: &sqlx::Error) -> AppError {
    match err {
        sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            AppError::service_unavailable("Database connection pool exhausted")
        }
        sqlx::Error::Database(db_err) => {
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            match db_err.code().as_deref() {
                Some("23505") => AppError::conflict("Duplicate key value"),
                Some("23502") => AppError::bad_request("Required field is null"),
                Some("23514") => AppError::bad_request("Check constraint violation"),
                Some("53000" | "53100" | "53200" | "53300") => {
                    AppError::service_unavailable("Database resource exhausted")
                }
                Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                    AppError::service_unavailable("Database unavailable")
                }
                _ => AppError::internal("Database error"),
            }
        }
        sqlx::Error::Io(_) => AppError::service_unavailable("Database connection error"),
        _ => AppError::internal("Database error"),
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::{HeaderValue, StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sqlx")]
    mod sqlx_classification {
        use super::*;
        use std::borrow::Cow;
        use std::fmt;

        #[derive(Debug)]
        struct CodedError(&'static str);

        impl fmt::Display for CodedError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "database error {}", self.0)
            }
        }

        impl std::error::Error for CodedError {}

        impl sqlx::error::DatabaseError for CodedError {
            fn message(&self) -> &str {
                "database error"
            }

            fn code(&self) -> Option<Cow<'_, str>> {
                Some(Cow::Borrowed(self.0))
            }

            fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
                self
            }

            fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
                self
            }

            fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
                self
            }

            fn kind(&self) -> sqlx::error::ErrorKind {
                sqlx::error::ErrorKind::Other
            }
        }

        fn coded(code: &'static str) -> sqlx::Error {
            sqlx::Error::Database(Box::new(CodedError(code)))
        }

        #[test]
        fn test_pool_and_io_are_transient() {
            assert!(classify_sqlx(&sqlx::Error::PoolTimedOut).is_transient());
            assert!(classify_sqlx(&sqlx::Error::PoolClosed).is_transient());
            let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
            assert!(classify_sqlx(&sqlx::Error::Io(io)).is_transient());
        }

        #[test]
        fn test_server_codes() {
            assert_eq!(classify_sqlx(&coded("53300")).kind(), ErrorKind::ServiceUnavailable);
            assert_eq!(classify_sqlx(&coded("57P01")).kind(), ErrorKind::ServiceUnavailable);
            assert_eq!(classify_sqlx(&coded("23505")).kind(), ErrorKind::Conflict);
            assert_eq!(classify_sqlx(&coded("23514")).kind(), ErrorKind::BadRequest);
            assert_eq!(classify_sqlx(&coded("XX000")).kind(), ErrorKind::InternalServerError);
        }

        #[test]
        fn test_message_hides_driver_text() {
            let err = classify_sqlx(&coded("XX000"));
            assert_eq!(err.message(), "Database error");
            assert_eq!(classify_sqlx(&sqlx::Error::RowNotFound).kind(), ErrorKind::NotFound);
        }
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_unauthorized_response_carries_bearer_challenge() {
        use axum::response::IntoResponse;

        let response = AppError::unauthorized("Could not validate credentials").into_response();
        assert_eq!(response.status(), 401);
        assert_eq!(
            response.headers().get(axum::http::header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let response = AppError::not_found("User not found").into_response();
        assert!(response.headers().get(axum::http::header::WWW_AUTHENTICATE).is_none());
    }
}
