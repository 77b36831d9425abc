//! GeminiProvider implementation using the Gemini `generateContent` API.

use provider_core::{
    async_trait, build_instruction, clean_output, instruction_fingerprint, CodeProvider,
    ProviderError,
};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::config::GeminiConfig;

/// A provider that generates code with Google's Gemini models.
///
/// Each call is a single stateless `generateContent` request; nothing is
/// retried. Transport, HTTP and decoding failures are all reported as
/// [`ProviderError::Failed`] after being logged.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create a new GeminiProvider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::Configuration(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            model = %config.model,
            instruction_fingerprint = %instruction_fingerprint(),
            "GeminiProvider initialized"
        );

        Ok(Self { client, config })
    }

    /// Create a GeminiProvider from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, ProviderError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the request body for one generation.
    fn build_request(&self, prompt: &str, language: &str) -> GenerateContentRequest {
        let generation_config =
            if self.config.max_output_tokens.is_none() && self.config.temperature.is_none() {
                None
            } else {
                Some(GenerationConfig {
                    max_output_tokens: self.config.max_output_tokens,
                    temperature: self.config.temperature,
                })
            };

        GenerateContentRequest {
            contents: vec![Content::user(build_instruction(prompt, language))],
            generation_config,
        }
    }

    /// Make a `generateContent` request.
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.config.generate_url();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::failed(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(ProviderError::failed(format!(
                    "Gemini API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(ProviderError::failed(format!(
                "Gemini API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::failed(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl CodeProvider for GeminiProvider {
    async fn generate(&self, prompt: &str, language: &str) -> Result<String, ProviderError> {
        let request = self.build_request(prompt, language);
        debug!(language, prompt_chars = prompt.chars().count(), "Sending generation request");

        let completion = match self.generate_content(&request).await {
            Ok(completion) => completion,
            Err(err) => {
                warn!(error = %err, "Gemini request failed");
                return Err(err);
            }
        };

        if let Some(ref usage) = completion.usage_metadata {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        let text = completion.first_text().ok_or_else(|| {
            let reason = completion
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            warn!(%reason, "Gemini returned no text");
            ProviderError::failed(format!("Gemini returned no text ({})", reason))
        })?;

        clean_output(&text)
    }

    fn name(&self) -> &str {
        "GeminiProvider"
    }
}
