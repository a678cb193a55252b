//! Domain-to-HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use atrium_domain::DomainError;

use crate::dto::ErrorResponse;

/// A domain failure on its way out as an HTTP response.
///
/// Handlers return `Result<_, ApiError>` and use `?`; the `From` impl
/// converts every service failure, and `IntoResponse` renders the
/// status code plus the `{ code, message }` JSON body.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] DomainError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::AlreadyExists { .. } => StatusCode::CONFLICT,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match &self.0 {
            DomainError::InvalidInput(_) => "INVALID_INPUT",
            DomainError::NotFound { .. } => "ENTITY_DOES_NOT_EXIST",
            DomainError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
            DomainError::Unauthorized(_) => "UNAUTHORIZED",
            DomainError::Storage(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed on the server side");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_covers_the_taxonomy() {
        let cases = [
            (
                DomainError::invalid("bad"),
                StatusCode::BAD_REQUEST,
                "INVALID_INPUT",
            ),
            (
                DomainError::not_found("floor", "f1"),
                StatusCode::NOT_FOUND,
                "ENTITY_DOES_NOT_EXIST",
            ),
            (
                DomainError::already_exists("room", "name"),
                StatusCode::CONFLICT,
                "ENTITY_ALREADY_EXISTS",
            ),
            (
                DomainError::Unauthorized("no token".into()),
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
            ),
            (
                DomainError::Storage("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                "DATABASE_ERROR",
            ),
        ];

        for (domain_error, status, code) in cases {
            let api_error = ApiError::from(domain_error);
            assert_eq!(api_error.status_code(), status);
            assert_eq!(api_error.error_code(), code);
        }
    }

    #[test]
    fn test_message_passes_through_unchanged() {
        let api_error =
            ApiError::from(DomainError::invalid("The room is blocking another's door."));
        assert_eq!(
            api_error.to_string(),
            "The room is blocking another's door."
        );
    }
}
