//! Maps domain `AppError` to HTTP responses.
//!
//! Client-facing failures keep their message; everything server-side
//! collapses to a generic body, with the detail going to the log only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use eventhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub message: String,
}

/// Wrapper carrying an `AppError` out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated | ErrorKind::InvalidToken => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(kind = %self.0.kind, error = %self.0, "Internal server error");
            "Something went wrong".to_string()
        } else {
            self.0.message.clone()
        };

        (status, Json(ApiErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_status_and_message() {
        let cases = [
            (AppError::validation("bad input"), StatusCode::BAD_REQUEST),
            (AppError::conflict("User already registered"), StatusCode::BAD_REQUEST),
            (
                AppError::unauthenticated("Access denied, no token was provided"),
                StatusCode::UNAUTHORIZED,
            ),
            (AppError::invalid_token("Invalid token"), StatusCode::UNAUTHORIZED),
            (AppError::forbidden("nope"), StatusCode::FORBIDDEN),
            (AppError::not_found("Event not found"), StatusCode::NOT_FOUND),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError(err).status(), expected);
        }
    }

    #[test]
    fn test_server_errors_map_to_500() {
        for err in [
            AppError::database("connection refused"),
            AppError::storage("bucket gone"),
            AppError::internal("boom"),
        ] {
            assert_eq!(
                ApiError(err).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
