//! Error types for provider operations.

use thiserror::Error;

/// Errors that can occur while talking to a generation provider.
///
/// Every runtime failure (transport, authentication, quota, malformed or empty
/// response) is reported as [`ProviderError::Failed`]; callers are not expected
/// to tell them apart.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not be constructed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The provider did not produce code.
    #[error("generation failed: {0}")]
    Failed(String),
}

impl ProviderError {
    /// Shorthand for a runtime failure.
    pub fn failed(reason: impl Into<String>) -> Self {
        ProviderError::Failed(reason.into())
    }
}
