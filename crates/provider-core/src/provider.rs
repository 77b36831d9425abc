//! The CodeProvider trait definition.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Turns a prompt and a target language into source code.
///
/// This trait is object-safe and can be used with `Arc<dyn CodeProvider>`.
#[async_trait]
pub trait CodeProvider: Send + Sync {
    /// Generate code for `prompt` in `language`.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The user's request, forwarded verbatim.
    /// * `language` - Display name of the target language (e.g. "Python").
    ///
    /// # Returns
    ///
    /// The generated code with surrounding whitespace trimmed, or
    /// [`ProviderError::Failed`] if the provider produced nothing usable.
    async fn generate(&self, prompt: &str, language: &str) -> Result<String, ProviderError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}
