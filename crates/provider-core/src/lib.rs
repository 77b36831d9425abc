//! Core trait and types for code generation providers.
//!
//! This crate provides the shared interface for every provider the copilot can
//! delegate code generation to. It defines:
//!
//! - [`CodeProvider`] - The trait that all provider implementations must implement
//! - [`ProviderError`] - Error type for provider operations
//! - [`instruction`] - How a user prompt becomes a provider instruction
//!
//! # Example
//!
//! ```rust
//! use provider_core::{async_trait, CodeProvider, ProviderError};
//!
//! struct HelloProvider;
//!
//! #[async_trait]
//! impl CodeProvider for HelloProvider {
//!     async fn generate(&self, _prompt: &str, _language: &str) -> Result<String, ProviderError> {
//!         Ok("print('hello')".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "HelloProvider"
//!     }
//! }
//! ```

mod error;
pub mod instruction;
mod provider;

pub use error::ProviderError;
pub use instruction::{build_instruction, clean_output, instruction_fingerprint};
pub use provider::CodeProvider;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
