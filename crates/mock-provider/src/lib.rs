//! Mock provider implementations for code generation.
//!
//! This crate provides mock implementations of the `CodeProvider` trait for
//! tests and offline runs:
//! - `StaticProvider` - Returns the same code every time
//! - `EchoProvider` - Returns a comment built from the prompt
//! - `FailingProvider` - Always fails
//! - `DelayedProvider` - Wraps another provider with artificial delay
//!
//! `StaticProvider` and `FailingProvider` count their calls so tests can
//! assert that no provider call happened.
//!
//! For production generation, use the `gemini-provider` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_provider::{CodeProvider, StaticProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_provider::ProviderError> {
//!     let provider = StaticProvider::new("print('hi')");
//!
//!     let code = provider.generate("Print a greeting please", "Python").await?;
//!     assert_eq!(code, "print('hi')");
//!     assert_eq!(provider.calls(), 1);
//!     Ok(())
//! }
//! ```

mod delayed;
mod echo;
mod failing;
mod static_code;

// Re-export provider-core types for convenience
pub use provider_core::{async_trait, CodeProvider, ProviderError};

// Export mock implementations
pub use delayed::DelayedProvider;
pub use echo::EchoProvider;
pub use failing::FailingProvider;
pub use static_code::StaticProvider;
