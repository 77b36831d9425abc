//! Failing provider - simulates an unavailable generation service.

use std::sync::atomic::{AtomicUsize, Ordering};

use provider_core::{async_trait, CodeProvider, ProviderError};

/// A provider whose every call fails.
#[derive(Debug)]
pub struct FailingProvider {
    reason: String,
    calls: AtomicUsize,
}

impl Default for FailingProvider {
    fn default() -> Self {
        Self::new("simulated provider outage")
    }
}

impl FailingProvider {
    /// Create a provider that fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeProvider for FailingProvider {
    async fn generate(&self, _prompt: &str, _language: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::failed(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "FailingProvider"
    }
}
