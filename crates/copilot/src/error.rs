//! Error types for service operations.

use database::DatabaseError;
use provider_core::ProviderError;
use thiserror::Error;

/// Errors that can occur while creating or listing generations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more input rules failed; every violated rule is listed.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The requested language is not in the known set.
    #[error("language not supported: {0}")]
    UnsupportedLanguage(String),

    /// The given user does not exist.
    #[error("invalid user ID: {0}")]
    InvalidUser(i64),

    /// The provider could not produce code.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The store failed.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}

impl ServiceError {
    /// Whether the caller sent a bad request, as opposed to a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_)
                | ServiceError::UnsupportedLanguage(_)
                | ServiceError::InvalidUser(_)
        )
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
