//! Google Gemini-based code generation provider.
//!
//! This crate implements [`CodeProvider`] on top of the Gemini
//! `generateContent` REST endpoint.
//!
//! # Features
//!
//! - Uses `gemini-2.5-flash` by default
//! - One stateless request per generation, no retries
//! - Every failure collapses to [`ProviderError::Failed`]
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_provider::{CodeProvider, GeminiProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GeminiProvider::from_env()?;
//!     let code = provider.generate("Write a function to reverse a string", "Python").await?;
//!     println!("{}", code);
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod provider;

pub use config::{GeminiConfig, GeminiConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};
pub use provider::GeminiProvider;

// Re-export provider-core types for convenience
pub use provider_core::{async_trait, CodeProvider, ProviderError};
