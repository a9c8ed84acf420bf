//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use console_core::error::{AppError, ErrorKind};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub code: u16,
    /// Short message safe to show to users.
    pub message: String,
    /// Message including the underlying cause.
    #[serde(rename = "detailedMessage")]
    pub detailed_message: String,
}

/// Handler error wrapping an [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::LicenseNotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::ExternalService => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detailed_message = self.0.detailed_message();

        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %detailed_message, "Request failed");
        } else {
            tracing::debug!(kind = %self.0.kind, error = %detailed_message, "Request rejected");
        }

        let body = ApiErrorResponse {
            code: status.as_u16(),
            message: self.0.message,
            detailed_message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(AppError::bad_request()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(AppError::license_not_found()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(AppError::authentication("no session")).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError(AppError::generic()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError(AppError::configuration("bad proxy")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_only_missing_license_is_not_found() {
        let kinds = [
            ErrorKind::LicenseNotFound,
            ErrorKind::Authentication,
            ErrorKind::Validation,
            ErrorKind::Internal,
            ErrorKind::Configuration,
            ErrorKind::Serialization,
            ErrorKind::ExternalService,
        ];
        let not_found: Vec<ErrorKind> = kinds
            .into_iter()
            .filter(|kind| ApiError(AppError::new(*kind, "x")).status() == StatusCode::NOT_FOUND)
            .collect();
        assert_eq!(not_found, vec![ErrorKind::LicenseNotFound]);
    }
}
