//! Error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use copilot::ServiceError;
use database::{ConstraintKind, DatabaseError};
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error from the generation or history services.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Error from a direct store read.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// The request body was not usable JSON.
    #[error("invalid JSON body: {0}")]
    InvalidBody(String),

    /// The query string could not be parsed.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// No route matched.
    #[error("route not found")]
    NotFound,
}

/// Error body sent to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ApiError {
    /// Status code, client-facing message and optional rule list.
    fn parts(&self) -> (StatusCode, String, Option<Vec<String>>) {
        match self {
            ApiError::Service(ServiceError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(errors.clone()),
            ),
            ApiError::Service(ServiceError::UnsupportedLanguage(name)) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Language \"{}\" is not supported. Please choose from available languages.",
                    name
                ),
                None,
            ),
            ApiError::Service(ServiceError::InvalidUser(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid user ID".to_string(), None)
            }
            ApiError::Service(ServiceError::Provider(_)) => (
                StatusCode::BAD_GATEWAY,
                "Failed to generate code using AI service".to_string(),
                None,
            ),
            ApiError::Service(ServiceError::Database(err)) | ApiError::Database(err) => {
                let (status, message) = database_parts(err);
                (status, message.to_string(), None)
            }
            ApiError::InvalidBody(detail) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON body".to_string(),
                Some(vec![detail.clone()]),
            ),
            ApiError::InvalidQuery(detail) => (
                StatusCode::BAD_REQUEST,
                "Invalid query string".to_string(),
                Some(vec![detail.clone()]),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Route not found".to_string(), None),
        }
    }
}

fn database_parts(err: &DatabaseError) -> (StatusCode, &'static str) {
    match err {
        DatabaseError::AlreadyExists { .. }
        | DatabaseError::Constraint {
            kind: ConstraintKind::Unique,
            ..
        } => (StatusCode::CONFLICT, "Duplicate entry"),
        DatabaseError::Constraint {
            kind: ConstraintKind::ForeignKey,
            ..
        } => (StatusCode::BAD_REQUEST, "Invalid reference in database"),
        DatabaseError::PoolTimeout => {
            (StatusCode::SERVICE_UNAVAILABLE, "Service temporarily unavailable")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, errors) = self.parts();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self);
        }

        let body = ErrorBody {
            success: false,
            error,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use provider_core::ProviderError;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_client_errors() {
        let (status, message, errors) =
            ApiError::from(ServiceError::Validation(vec!["Language is required".into()])).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Validation failed");
        assert_eq!(errors.unwrap(), vec!["Language is required"]);

        let (_, message, _) =
            ApiError::from(ServiceError::UnsupportedLanguage("Cobol".into())).parts();
        assert_eq!(
            message,
            "Language \"Cobol\" is not supported. Please choose from available languages."
        );

        assert_eq!(
            status_of(ServiceError::InvalidUser(4).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::InvalidBody("expected value".into())),
            StatusCode::BAD_REQUEST
        );

        let (status, message, errors) =
            ApiError::InvalidQuery("duplicate field `page`".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Invalid query string");
        assert_eq!(errors.unwrap(), vec!["duplicate field `page`"]);
    }

    #[test]
    fn test_provider_failure_is_bad_gateway() {
        let err: ApiError = ServiceError::Provider(ProviderError::failed("quota")).into();
        let (status, message, _) = err.parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!message.contains("quota"));
    }

    #[test]
    fn test_database_errors() {
        let duplicate = DatabaseError::Constraint {
            kind: ConstraintKind::Unique,
            message: "UNIQUE constraint failed: users.username".into(),
        };
        assert_eq!(status_of(duplicate.into()), StatusCode::CONFLICT);

        let exists = DatabaseError::AlreadyExists {
            entity: "user",
            id: "alice".into(),
        };
        assert_eq!(status_of(exists.into()), StatusCode::CONFLICT);

        let bad_ref = DatabaseError::Constraint {
            kind: ConstraintKind::ForeignKey,
            message: "FOREIGN KEY constraint failed".into(),
        };
        assert_eq!(
            status_of(ServiceError::Database(bad_ref).into()),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            status_of(DatabaseError::PoolTimeout.into()),
            StatusCode::SERVICE_UNAVAILABLE
        );

        let (status, message, _) = ApiError::from(DatabaseError::NotFound {
            entity: "generation",
            id: "9".into(),
        })
        .parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal server error");
    }
}
