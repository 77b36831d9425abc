//! Echo provider - turns the prompt into a code comment.

use provider_core::{async_trait, clean_output, CodeProvider, ProviderError};

/// A provider that answers with the prompt as a comment in the target language.
///
/// Useful for running the whole service without an API key.
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// Create a new EchoProvider.
    pub fn new() -> Self {
        Self
    }
}

/// Line comment marker for a language display name.
fn comment_prefix(language: &str) -> &'static str {
    match language {
        "Python" | "Ruby" => "#",
        _ => "//",
    }
}

#[async_trait]
impl CodeProvider for EchoProvider {
    async fn generate(&self, prompt: &str, language: &str) -> Result<String, ProviderError> {
        let prefix = comment_prefix(language);
        let body: Vec<String> = prompt
            .lines()
            .map(|line| format!("{} {}", prefix, line.trim_end()))
            .collect();

        clean_output(&format!("{} {}\n{}", prefix, language, body.join("\n")))
    }

    fn name(&self) -> &str {
        "EchoProvider"
    }
}
