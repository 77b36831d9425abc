//! Static provider - returns fixed code.

use std::sync::atomic::{AtomicUsize, Ordering};

use provider_core::{async_trait, clean_output, CodeProvider, ProviderError};

/// A provider that always returns the same code.
///
/// Output goes through the same trimming as real providers.
#[derive(Debug, Default)]
pub struct StaticProvider {
    code: String,
    calls: AtomicUsize,
}

impl StaticProvider {
    /// Create a provider that returns `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeProvider for StaticProvider {
    async fn generate(&self, _prompt: &str, _language: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        clean_output(&self.code)
    }

    fn name(&self) -> &str {
        "StaticProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_trims_and_counts() {
        let provider = StaticProvider::new("\n  fn main() {}  \n");

        assert_eq!(provider.calls(), 0);
        let code = provider.generate("Write an empty main", "Rust").await.unwrap();
        assert_eq!(code, "fn main() {}");
        provider.generate("Write an empty main", "Rust").await.unwrap();
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_blank_code_fails() {
        let provider = StaticProvider::new("   ");
        let result = provider.generate("Write an empty main", "Rust").await;
        assert!(matches!(result, Err(ProviderError::Failed(_))));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_provider_name() {
        assert_eq!(StaticProvider::new("x").name(), "StaticProvider");
    }
}
