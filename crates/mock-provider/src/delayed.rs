//! Delayed provider - wraps another provider with artificial delay.

use std::time::Duration;

use provider_core::{async_trait, CodeProvider, ProviderError};
use tokio::time::sleep;

/// A provider that wraps another provider and adds artificial delay.
///
/// Useful for simulating provider latency.
pub struct DelayedProvider<P: CodeProvider> {
    inner: P,
    delay: Duration,
}

impl<P: CodeProvider> DelayedProvider<P> {
    /// Create a new DelayedProvider wrapping the given provider with the specified delay.
    pub fn new(inner: P, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a provider with a delay in milliseconds.
    pub fn with_millis(inner: P, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: CodeProvider> CodeProvider for DelayedProvider<P> {
    async fn generate(&self, prompt: &str, language: &str) -> Result<String, ProviderError> {
        sleep(self.delay).await;
        self.inner.generate(prompt, language).await
    }

    fn name(&self) -> &str {
        "DelayedProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticProvider;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_provider() {
        let provider = DelayedProvider::with_millis(StaticProvider::new("x = 1"), 100);

        let start = Instant::now();
        let code = provider.generate("Assign one to x", "Python").await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(code, "x = 1");
        assert!(elapsed >= Duration::from_millis(100));
        assert_eq!(provider.inner().calls(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_calls_overlap() {
        let provider = DelayedProvider::with_millis(StaticProvider::new("x = 1"), 100);

        let start = Instant::now();
        let (a, b) = futures::join!(
            provider.generate("Assign one to x", "Python"),
            provider.generate("Assign one to x", "Python"),
        );
        assert!(a.is_ok() && b.is_ok());
        assert!(start.elapsed() < Duration::from_millis(190));
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = DelayedProvider::with_millis(StaticProvider::new("x"), 0);
        assert_eq!(provider.name(), "DelayedProvider");
    }
}
